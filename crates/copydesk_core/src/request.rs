use std::fmt;
use std::str::FromStr;

use crate::KeywordSet;

/// Which of the three generation flows a form targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Intent {
    Tags,
    Description,
    Marketing,
}

impl Intent {
    pub const ALL: [Intent; 3] = [Intent::Tags, Intent::Description, Intent::Marketing];
}

/// Marketing platforms the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Instagram,
    Facebook,
    Twitter,
    LinkedIn,
    TikTok,
    Email,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::Facebook,
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::TikTok,
        Platform::Email,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::LinkedIn => "LinkedIn",
            Platform::TikTok => "TikTok",
            Platform::Email => "Email",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ValidationError;

    /// Exact match against the fixed platform names.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == value)
            .ok_or(ValidationError::MissingRequired { field: "platform" })
    }
}

/// A validated payload ready to be sent to the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Tags {
        keywords: Vec<String>,
    },
    Description {
        name: String,
        category: String,
        details: Option<String>,
    },
    Marketing {
        audience: String,
        platform: Platform,
    },
}

impl GenerationRequest {
    pub fn intent(&self) -> Intent {
        match self {
            GenerationRequest::Tags { .. } => Intent::Tags,
            GenerationRequest::Description { .. } => Intent::Description,
            GenerationRequest::Marketing { .. } => Intent::Marketing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("at least one keyword is required")]
    Empty,
    #[error("missing required field `{field}`")]
    MissingRequired { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagFields {
    pub keywords: KeywordSet,
    /// Keyword typed but not yet added.
    pub pending_keyword: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescriptionFields {
    pub name: String,
    pub category: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarketingFields {
    pub audience: String,
    /// Raw platform selection; validated on build.
    pub platform: String,
}

/// Current input values of one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormFields {
    Tags(TagFields),
    Description(DescriptionFields),
    Marketing(MarketingFields),
}

impl FormFields {
    pub fn empty(intent: Intent) -> Self {
        match intent {
            Intent::Tags => FormFields::Tags(TagFields::default()),
            Intent::Description => FormFields::Description(DescriptionFields::default()),
            Intent::Marketing => FormFields::Marketing(MarketingFields::default()),
        }
    }

    pub fn intent(&self) -> Intent {
        match self {
            FormFields::Tags(_) => Intent::Tags,
            FormFields::Description(_) => Intent::Description,
            FormFields::Marketing(_) => Intent::Marketing,
        }
    }
}

/// Validates the current field values and assembles a request.
///
/// Pure: the same fields always produce the same outcome.
pub fn build(fields: &FormFields) -> Result<GenerationRequest, ValidationError> {
    match fields {
        FormFields::Tags(tags) => {
            if tags.keywords.is_empty() {
                return Err(ValidationError::Empty);
            }
            Ok(GenerationRequest::Tags {
                keywords: tags.keywords.to_vec(),
            })
        }
        FormFields::Description(description) => {
            let name = required(&description.name, "name")?;
            let category = required(&description.category, "category")?;
            Ok(GenerationRequest::Description {
                name,
                category,
                details: description.details.clone(),
            })
        }
        FormFields::Marketing(marketing) => {
            let audience = required(&marketing.audience, "audience")?;
            let platform = marketing.platform.trim().parse::<Platform>()?;
            Ok(GenerationRequest::Marketing { audience, platform })
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingRequired { field })
    } else {
        Ok(value.to_string())
    }
}
