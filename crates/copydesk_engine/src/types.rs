use copydesk_core::{ErrorKind, FeedbackToken, Intent, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    GenerationCompleted {
        intent: Intent,
        submission: SubmissionId,
        result: Result<String, RequestError>,
    },
    CopyResetDue {
        intent: Intent,
        token: FeedbackToken,
    },
    HealthChecked(Result<String, RequestError>),
}

/// Why a request failed. Only used for diagnostics; callers see `ErrorKind::RequestFailed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    InvalidUrl,
    Network,
    HttpStatus(u16),
    MalformedBody,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{cause:?}: {message}")]
pub struct RequestError {
    pub cause: FailureCause,
    pub message: String,
}

impl RequestError {
    pub(crate) fn new(cause: FailureCause, message: impl Into<String>) -> Self {
        Self {
            cause,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::RequestFailed
    }
}
