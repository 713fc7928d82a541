//! Copydesk core: pure generation workflow state machine and view-model helpers.
mod effect;
mod feedback;
mod keywords;
mod msg;
mod request;
mod state;
mod tags;
mod update;
mod view_model;
mod workflow;

pub use effect::Effect;
pub use feedback::{ClipboardFeedback, FeedbackToken, COPY_FEEDBACK_DURATION};
pub use keywords::KeywordSet;
pub use msg::{Field, Msg};
pub use request::{
    build, DescriptionFields, FormFields, GenerationRequest, Intent, MarketingFields, Platform,
    TagFields, ValidationError,
};
pub use state::{AppState, ServiceStatus};
pub use tags::{parse_tags, ParsedTag};
pub use update::update;
pub use view_model::{AppViewModel, FormStatus, FormView};
pub use workflow::{
    ErrorKind, GenerationResult, IntentConfig, Notice, Severity, SubmissionId, SubmitOutcome,
    Workflow, WorkflowState,
};
