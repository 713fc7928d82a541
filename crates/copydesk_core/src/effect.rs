use std::time::Duration;

use crate::{FeedbackToken, GenerationRequest, Intent, Notice, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one request to the generation service.
    Submit {
        intent: Intent,
        submission: SubmissionId,
        request: GenerationRequest,
    },
    /// Put text on the system clipboard.
    CopyToClipboard { text: String },
    /// Schedule the copied indicator reset, replacing any earlier one for the form.
    ScheduleCopyReset {
        intent: Intent,
        token: FeedbackToken,
        after: Duration,
    },
    /// Show a transient notice to the user.
    Notify(Notice),
}
