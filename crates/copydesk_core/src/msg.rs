use crate::{FeedbackToken, GenerationResult, Intent, SubmissionId};

/// Editable text fields across the three forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Keyword,
    Name,
    Category,
    Details,
    Audience,
    Platform,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User switched to another generator screen.
    ScreenSelected(Intent),
    /// User edited a text field of a form.
    FieldChanged {
        intent: Intent,
        field: Field,
        value: String,
    },
    /// User confirmed the pending keyword.
    KeywordAdded { intent: Intent },
    /// User removed a keyword chip.
    KeywordRemoved { intent: Intent, keyword: String },
    /// User pressed the generate button.
    SubmitClicked { intent: Intent },
    /// Engine finished a generation call.
    GenerationCompleted {
        intent: Intent,
        submission: SubmissionId,
        result: GenerationResult,
    },
    /// User pressed the copy button.
    CopyClicked { intent: Intent },
    /// The copied indicator reset timer fired.
    CopyFeedbackExpired {
        intent: Intent,
        token: FeedbackToken,
    },
    /// Start-up probe of the generation service finished.
    ServiceChecked { reachable: bool },
    /// Input that maps to nothing, e.g. a blank console line.
    NoOp,
}
