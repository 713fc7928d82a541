use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use copydesk_core::{FeedbackToken, Intent};
use copydesk_logging::copydesk_trace;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::{EngineEvent, EventSink};

/// Deferred copied-indicator resets, at most one pending per form.
#[derive(Debug, Default)]
pub struct FeedbackTimers {
    pending: HashMap<Intent, JoinHandle<()>>,
}

impl FeedbackTimers {
    /// Schedules a `CopyResetDue` after `after`, aborting the form's previous timer first.
    pub fn schedule(
        &mut self,
        runtime: &Handle,
        intent: Intent,
        token: FeedbackToken,
        after: Duration,
        sink: Arc<dyn EventSink>,
    ) {
        if let Some(previous) = self.pending.remove(&intent) {
            if !previous.is_finished() {
                copydesk_trace!("restarting copy reset timer for {:?}", intent);
            }
            previous.abort();
        }
        let task = runtime.spawn(async move {
            tokio::time::sleep(after).await;
            sink.emit(EngineEvent::CopyResetDue { intent, token });
        });
        self.pending.insert(intent, task);
    }

    pub fn cancel_all(&mut self) {
        for (_, task) in self.pending.drain() {
            task.abort();
        }
    }
}

impl Drop for FeedbackTimers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
