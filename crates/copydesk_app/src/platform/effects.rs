use std::sync::mpsc;

use copydesk_core::{Effect, Msg, Severity};
use copydesk_engine::{ClipboardWriter, EngineEvent, EngineHandle, EventSink};
use copydesk_logging::{copydesk_error, copydesk_info, copydesk_warn};

use super::app::AppEvent;

pub struct EffectRunner<C: ClipboardWriter> {
    engine: EngineHandle,
    clipboard: C,
}

impl<C: ClipboardWriter> EffectRunner<C> {
    pub fn new(engine: EngineHandle, clipboard: C) -> Self {
        Self { engine, clipboard }
    }

    pub fn check_service(&self) {
        self.engine.check_health();
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit {
                    intent,
                    submission,
                    request,
                } => {
                    copydesk_info!("Submit intent={:?} submission={}", intent, submission);
                    self.engine.submit(intent, submission, request);
                }
                Effect::CopyToClipboard { text } => {
                    if let Err(err) = self.clipboard.write_text(&text) {
                        copydesk_error!("Copy of {} chars failed: {}", text.len(), err);
                    }
                }
                Effect::ScheduleCopyReset {
                    intent,
                    token,
                    after,
                } => {
                    self.engine.schedule_copy_reset(intent, token, after);
                }
                Effect::Notify(notice) => match notice.severity {
                    Severity::Info => copydesk_info!("{}: {}", notice.title, notice.description),
                    Severity::Error => copydesk_warn!("{}: {}", notice.title, notice.description),
                },
            }
        }
    }
}

/// Forwards engine events into the UI loop as core messages.
pub struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl MsgSink {
    pub fn new(tx: mpsc::Sender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Msg(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::GenerationCompleted {
            intent,
            submission,
            result,
        } => Msg::GenerationCompleted {
            intent,
            submission,
            result: result.map_err(|err| err.kind()),
        },
        EngineEvent::CopyResetDue { intent, token } => Msg::CopyFeedbackExpired { intent, token },
        EngineEvent::HealthChecked(result) => {
            match &result {
                Ok(status) => copydesk_info!("Generation service reachable: {}", status),
                Err(err) => copydesk_warn!("Generation service unreachable: {}", err),
            }
            Msg::ServiceChecked {
                reachable: result.is_ok(),
            }
        }
    }
}
