use crate::view_model::{AppViewModel, FormView};
use crate::{Field, FormFields, Intent, Notice, Workflow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Reachable,
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    active: Intent,
    tags: Workflow,
    description: Workflow,
    marketing: Workflow,
    last_notice: Option<Notice>,
    service: ServiceStatus,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active: Intent::Tags,
            tags: Workflow::new(Intent::Tags),
            description: Workflow::new(Intent::Description),
            marketing: Workflow::new(Intent::Marketing),
            last_notice: None,
            service: ServiceStatus::Unknown,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            active: self.active,
            forms: Intent::ALL
                .into_iter()
                .map(|intent| FormView::from_workflow(self.form(intent)))
                .collect(),
            last_notice: self.last_notice,
            service: self.service,
        }
    }

    pub fn active(&self) -> Intent {
        self.active
    }

    pub fn form(&self, intent: Intent) -> &Workflow {
        match intent {
            Intent::Tags => &self.tags,
            Intent::Description => &self.description,
            Intent::Marketing => &self.marketing,
        }
    }

    pub(crate) fn form_mut(&mut self, intent: Intent) -> &mut Workflow {
        match intent {
            Intent::Tags => &mut self.tags,
            Intent::Description => &mut self.description,
            Intent::Marketing => &mut self.marketing,
        }
    }

    pub(crate) fn select(&mut self, intent: Intent) -> bool {
        if self.active == intent {
            return false;
        }
        self.active = intent;
        self.mark_dirty();
        true
    }

    /// Writes a field value. Returns false when the form has no such field.
    pub(crate) fn set_field(&mut self, intent: Intent, field: Field, value: String) -> bool {
        let applied = match (self.form_mut(intent).fields_mut(), field) {
            (FormFields::Tags(tags), Field::Keyword) => {
                tags.pending_keyword = value;
                true
            }
            (FormFields::Description(description), Field::Name) => {
                description.name = value;
                true
            }
            (FormFields::Description(description), Field::Category) => {
                description.category = value;
                true
            }
            (FormFields::Description(description), Field::Details) => {
                description.details = Some(value);
                true
            }
            (FormFields::Marketing(marketing), Field::Audience) => {
                marketing.audience = value;
                true
            }
            (FormFields::Marketing(marketing), Field::Platform) => {
                marketing.platform = value;
                true
            }
            _ => false,
        };
        if applied {
            self.mark_dirty();
        }
        applied
    }

    /// Moves the pending keyword into the keyword set. The pending input is
    /// only cleared when the keyword was accepted.
    pub(crate) fn add_pending_keyword(&mut self, intent: Intent) -> bool {
        let FormFields::Tags(tags) = self.form_mut(intent).fields_mut() else {
            return false;
        };
        if !tags.keywords.add(&tags.pending_keyword) {
            return false;
        }
        tags.pending_keyword.clear();
        self.mark_dirty();
        true
    }

    pub(crate) fn remove_keyword(&mut self, intent: Intent, keyword: &str) -> bool {
        let FormFields::Tags(tags) = self.form_mut(intent).fields_mut() else {
            return false;
        };
        if !tags.keywords.remove(keyword) {
            return false;
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.last_notice = Some(notice);
        self.mark_dirty();
    }

    pub(crate) fn set_service(&mut self, service: ServiceStatus) {
        self.service = service;
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
