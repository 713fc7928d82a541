use crate::{
    parse_tags, ErrorKind, FormFields, Intent, Notice, ParsedTag, ServiceStatus, Workflow,
    WorkflowState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub active: Intent,
    /// One entry per intent, in `Intent::ALL` order.
    pub forms: Vec<FormView>,
    pub last_notice: Option<Notice>,
    pub service: ServiceStatus,
}

impl AppViewModel {
    pub fn form(&self, intent: Intent) -> Option<&FormView> {
        self.forms.iter().find(|form| form.intent == intent)
    }

    pub fn active_form(&self) -> Option<&FormView> {
        self.form(self.active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed(ErrorKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub intent: Intent,
    pub label: &'static str,
    pub status: FormStatus,
    pub fields: FormFields,
    pub submit_enabled: bool,
    pub result_text: Option<String>,
    /// Parsed from `result_text` on every view; empty for other intents.
    pub tags: Vec<ParsedTag>,
    pub copied: bool,
}

impl FormView {
    pub(crate) fn from_workflow(workflow: &Workflow) -> Self {
        let intent = workflow.intent();
        let status = match workflow.state() {
            WorkflowState::Idle => FormStatus::Idle,
            WorkflowState::Submitting => FormStatus::Submitting,
            WorkflowState::Succeeded { .. } => FormStatus::Succeeded,
            WorkflowState::Failed { reason } => FormStatus::Failed(*reason),
        };
        let result_text = workflow.result_text().map(ToOwned::to_owned);
        let tags = match (intent, result_text.as_deref()) {
            (Intent::Tags, Some(raw)) => parse_tags(raw),
            _ => Vec::new(),
        };
        Self {
            intent,
            label: intent.config().label,
            status,
            fields: workflow.fields().clone(),
            submit_enabled: !workflow.is_submitting(),
            result_text,
            tags,
            copied: workflow.feedback().is_active(),
        }
    }
}
