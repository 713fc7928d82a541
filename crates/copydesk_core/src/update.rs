use crate::{AppState, Effect, Msg, ServiceStatus, SubmitOutcome, COPY_FEEDBACK_DURATION};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ScreenSelected(intent) => {
            state.select(intent);
            Vec::new()
        }
        Msg::FieldChanged {
            intent,
            field,
            value,
        } => {
            state.set_field(intent, field, value);
            Vec::new()
        }
        Msg::KeywordAdded { intent } => {
            state.add_pending_keyword(intent);
            Vec::new()
        }
        Msg::KeywordRemoved { intent, keyword } => {
            state.remove_keyword(intent, &keyword);
            Vec::new()
        }
        Msg::SubmitClicked { intent } => match state.form_mut(intent).submit() {
            SubmitOutcome::Started {
                submission,
                request,
            } => {
                state.mark_dirty();
                vec![Effect::Submit {
                    intent,
                    submission,
                    request,
                }]
            }
            SubmitOutcome::Rejected(_) => {
                let notice = intent.config().missing_notice;
                state.set_notice(notice);
                vec![Effect::Notify(notice)]
            }
            // The trigger is disabled while submitting; a bypassed guard lands here.
            SubmitOutcome::Busy => Vec::new(),
        },
        Msg::GenerationCompleted {
            intent,
            submission,
            result,
        } => {
            let failed = result.is_err();
            if !state.form_mut(intent).complete(submission, result) {
                return (state, Vec::new());
            }
            state.mark_dirty();
            if failed {
                let notice = intent.config().failure_notice;
                state.set_notice(notice);
                vec![Effect::Notify(notice)]
            } else {
                Vec::new()
            }
        }
        Msg::CopyClicked { intent } => match state.form_mut(intent).copy() {
            Some((text, token)) => {
                let notice = intent.config().copied_notice;
                state.set_notice(notice);
                vec![
                    Effect::CopyToClipboard { text },
                    Effect::ScheduleCopyReset {
                        intent,
                        token,
                        after: COPY_FEEDBACK_DURATION,
                    },
                    Effect::Notify(notice),
                ]
            }
            None => Vec::new(),
        },
        Msg::CopyFeedbackExpired { intent, token } => {
            if state.form_mut(intent).expire_feedback(token) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ServiceChecked { reachable } => {
            state.set_service(if reachable {
                ServiceStatus::Reachable
            } else {
                ServiceStatus::Unreachable
            });
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
