//! JSON bodies exchanged with the generation service.
use copydesk_core::{GenerationRequest, Intent};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct TagsBody<'a> {
    keywords: &'a [String],
}

#[derive(Serialize)]
struct DescriptionBody<'a> {
    name: &'a str,
    category: &'a str,
    details: &'a str,
}

#[derive(Serialize)]
struct MarketingBody<'a> {
    audience: &'a str,
    platform: &'a str,
}

#[derive(Deserialize)]
struct TagsResponse {
    tags: String,
}

#[derive(Deserialize)]
struct DescriptionResponse {
    description: String,
}

#[derive(Deserialize)]
struct MarketingResponse {
    marketing_content: String,
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

pub(crate) fn endpoint_path(intent: Intent) -> &'static str {
    match intent {
        Intent::Tags => "generate_tags",
        Intent::Description => "generate_description",
        Intent::Marketing => "generate_marketing_content",
    }
}

/// Missing `details` goes out as an empty string; the service requires the field.
pub(crate) fn encode_request(request: &GenerationRequest) -> serde_json::Result<Vec<u8>> {
    match request {
        GenerationRequest::Tags { keywords } => serde_json::to_vec(&TagsBody { keywords }),
        GenerationRequest::Description {
            name,
            category,
            details,
        } => serde_json::to_vec(&DescriptionBody {
            name,
            category,
            details: details.as_deref().unwrap_or_default(),
        }),
        GenerationRequest::Marketing { audience, platform } => {
            serde_json::to_vec(&MarketingBody {
                audience,
                platform: platform.as_str(),
            })
        }
    }
}

pub(crate) fn decode_response(intent: Intent, body: &[u8]) -> serde_json::Result<String> {
    match intent {
        Intent::Tags => serde_json::from_slice::<TagsResponse>(body).map(|r| r.tags),
        Intent::Description => {
            serde_json::from_slice::<DescriptionResponse>(body).map(|r| r.description)
        }
        Intent::Marketing => {
            serde_json::from_slice::<MarketingResponse>(body).map(|r| r.marketing_content)
        }
    }
}

pub(crate) fn decode_health(body: &[u8]) -> serde_json::Result<String> {
    serde_json::from_slice::<HealthResponse>(body).map(|r| r.status)
}
