use crate::{
    build, ClipboardFeedback, FeedbackToken, FormFields, GenerationRequest, Intent,
    ValidationError,
};

/// Error categories surfaced to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network, transport, status or body failure; the cause is not distinguished.
    RequestFailed,
}

/// Outcome of one generation call: the raw service text or the failure kind.
pub type GenerationResult = Result<String, ErrorKind>;

/// Sequence number of a submission within one form.
pub type SubmissionId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        raw_text: String,
    },
    Failed {
        reason: ErrorKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: &'static str,
    pub description: &'static str,
}

/// Static per-intent wording and labels.
#[derive(Debug)]
pub struct IntentConfig {
    pub label: &'static str,
    pub missing_notice: Notice,
    pub failure_notice: Notice,
    pub copied_notice: Notice,
}

const FAILURE_TITLE: &str = "Error";
const COPIED_TITLE: &str = "Copied to clipboard";

static TAGS: IntentConfig = IntentConfig {
    label: "SEO Tags",
    missing_notice: Notice {
        severity: Severity::Error,
        title: "No keywords added",
        description: "Please add at least one keyword to generate SEO tags.",
    },
    failure_notice: Notice {
        severity: Severity::Error,
        title: FAILURE_TITLE,
        description: "Failed to generate SEO tags. Please try again.",
    },
    copied_notice: Notice {
        severity: Severity::Info,
        title: COPIED_TITLE,
        description: "SEO tags have been copied to your clipboard.",
    },
};

static DESCRIPTION: IntentConfig = IntentConfig {
    label: "Product Description",
    missing_notice: Notice {
        severity: Severity::Error,
        title: "Missing information",
        description: "Please provide at least a product name and category.",
    },
    failure_notice: Notice {
        severity: Severity::Error,
        title: FAILURE_TITLE,
        description: "Failed to generate product description. Please try again.",
    },
    copied_notice: Notice {
        severity: Severity::Info,
        title: COPIED_TITLE,
        description: "Product description has been copied to your clipboard.",
    },
};

static MARKETING: IntentConfig = IntentConfig {
    label: "Marketing Content",
    missing_notice: Notice {
        severity: Severity::Error,
        title: "Missing information",
        description: "Please provide both target audience and platform.",
    },
    failure_notice: Notice {
        severity: Severity::Error,
        title: FAILURE_TITLE,
        description: "Failed to generate marketing content. Please try again.",
    },
    copied_notice: Notice {
        severity: Severity::Info,
        title: COPIED_TITLE,
        description: "Marketing content has been copied to your clipboard.",
    },
};

impl Intent {
    pub fn config(self) -> &'static IntentConfig {
        match self {
            Intent::Tags => &TAGS,
            Intent::Description => &DESCRIPTION,
            Intent::Marketing => &MARKETING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// State moved to `Submitting`; the request must be sent exactly once.
    Started {
        submission: SubmissionId,
        request: GenerationRequest,
    },
    /// Fields failed validation; state unchanged.
    Rejected(ValidationError),
    /// A request is already in flight; nothing happened.
    Busy,
}

/// Submission lifecycle of one generator form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    fields: FormFields,
    state: WorkflowState,
    feedback: ClipboardFeedback,
    submission: SubmissionId,
}

impl Workflow {
    pub fn new(intent: Intent) -> Self {
        Self {
            fields: FormFields::empty(intent),
            state: WorkflowState::Idle,
            feedback: ClipboardFeedback::default(),
            submission: 0,
        }
    }

    pub fn intent(&self) -> Intent {
        self.fields.intent()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn feedback(&self) -> &ClipboardFeedback {
        &self.feedback
    }

    pub fn is_submitting(&self) -> bool {
        self.state == WorkflowState::Submitting
    }

    /// Raw text of the latest successful result, if the form is showing one.
    pub fn result_text(&self) -> Option<&str> {
        match &self.state {
            WorkflowState::Succeeded { raw_text } => Some(raw_text),
            _ => None,
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Busy;
        }
        match build(&self.fields) {
            Ok(request) => {
                self.submission += 1;
                self.state = WorkflowState::Submitting;
                SubmitOutcome::Started {
                    submission: self.submission,
                    request,
                }
            }
            Err(err) => SubmitOutcome::Rejected(err),
        }
    }

    /// Applies a client completion. Completions for anything other than the
    /// request currently in flight are ignored and return false.
    pub fn complete(&mut self, submission: SubmissionId, result: GenerationResult) -> bool {
        if !self.is_submitting() || submission != self.submission {
            return false;
        }
        self.state = match result {
            Ok(raw_text) => WorkflowState::Succeeded { raw_text },
            Err(reason) => WorkflowState::Failed { reason },
        };
        true
    }

    /// Turns on the copied indicator when a successful result exists and returns
    /// the text to place on the clipboard with the reset token.
    pub fn copy(&mut self) -> Option<(String, FeedbackToken)> {
        let text = self.result_text()?.to_string();
        let token = self.feedback.trigger();
        Some((text, token))
    }

    pub fn expire_feedback(&mut self, token: FeedbackToken) -> bool {
        self.feedback.expire(token)
    }
}
