use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use copydesk_core::{FeedbackToken, GenerationRequest, Intent, SubmissionId};
use copydesk_logging::{copydesk_debug, copydesk_warn};

use crate::client::{ClientSettings, GenerationClient, ReqwestGenerationClient};
use crate::{EngineEvent, EventSink, FeedbackTimers};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    Submit {
        intent: Intent,
        submission: SubmissionId,
        request: GenerationRequest,
    },
    ScheduleCopyReset {
        intent: Intent,
        token: FeedbackToken,
        after: Duration,
    },
    CheckHealth,
}

/// Command side of the engine thread. Results arrive on the sink passed at start-up.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        Self::with_client(Arc::new(ReqwestGenerationClient::new(settings)), sink)
    }

    pub fn with_client(
        client: Arc<dyn GenerationClient>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("copydesk-engine".to_string())
            .spawn(move || {
                let mut timers = FeedbackTimers::default();
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::ScheduleCopyReset {
                            intent,
                            token,
                            after,
                        } => {
                            timers.schedule(runtime.handle(), intent, token, after, sink.clone());
                        }
                        EngineCommand::Submit {
                            intent,
                            submission,
                            request,
                        } => {
                            let client = client.clone();
                            let sink = sink.clone();
                            runtime.spawn(async move {
                                run_submission(
                                    client.as_ref(),
                                    intent,
                                    submission,
                                    request,
                                    sink.as_ref(),
                                )
                                .await;
                            });
                        }
                        EngineCommand::CheckHealth => {
                            let client = client.clone();
                            let sink = sink.clone();
                            runtime.spawn(async move {
                                let result = client.health().await;
                                sink.emit(EngineEvent::HealthChecked(result));
                            });
                        }
                    }
                }
                timers.cancel_all();
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn submit(&self, intent: Intent, submission: SubmissionId, request: GenerationRequest) {
        self.send(EngineCommand::Submit {
            intent,
            submission,
            request,
        });
    }

    pub fn schedule_copy_reset(&self, intent: Intent, token: FeedbackToken, after: Duration) {
        self.send(EngineCommand::ScheduleCopyReset {
            intent,
            token,
            after,
        });
    }

    pub fn check_health(&self) {
        self.send(EngineCommand::CheckHealth);
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            copydesk_warn!("engine thread has stopped; command dropped");
        }
    }
}

async fn run_submission(
    client: &dyn GenerationClient,
    intent: Intent,
    submission: SubmissionId,
    request: GenerationRequest,
    sink: &dyn EventSink,
) {
    copydesk_debug!("submitting {:?} #{}", intent, submission);
    let result = client.generate(&request).await;
    if let Err(err) = &result {
        copydesk_warn!("{:?} #{} failed: {}", intent, submission, err);
    }
    sink.emit(EngineEvent::GenerationCompleted {
        intent,
        submission,
        result,
    });
}
