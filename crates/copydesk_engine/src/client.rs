use copydesk_core::GenerationRequest;
use copydesk_logging::{copydesk_debug, copydesk_info};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::wire::{decode_health, decode_response, encode_request, endpoint_path};
use crate::{FailureCause, RequestError};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait GenerationClient: Send + Sync {
    /// Sends one request and returns the raw generated text. Never retries.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, RequestError>;

    /// Asks the service root for its status line.
    async fn health(&self) -> Result<String, RequestError>;
}

/// HTTP client for the generation service.
///
/// No request timeout is configured; a hanging service keeps the form in
/// `Submitting` until the transport gives up.
#[derive(Debug, Clone)]
pub struct ReqwestGenerationClient {
    settings: ClientSettings,
}

impl ReqwestGenerationClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, RequestError> {
        reqwest::Client::builder()
            .build()
            .map_err(|err| RequestError::new(FailureCause::Network, err.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<Url, RequestError> {
        let mut base = self.settings.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base)
            .and_then(|base| base.join(path))
            .map_err(|err| RequestError::new(FailureCause::InvalidUrl, err.to_string()))
    }

    async fn read_success_body(response: reqwest::Response) -> Result<Vec<u8>, RequestError> {
        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::new(
                FailureCause::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(body.to_vec())
    }
}

#[async_trait::async_trait]
impl GenerationClient for ReqwestGenerationClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, RequestError> {
        let intent = request.intent();
        let url = self.endpoint(endpoint_path(intent))?;
        let body = encode_request(request)
            .map_err(|err| RequestError::new(FailureCause::MalformedBody, err.to_string()))?;
        let client = self.build_client()?;

        copydesk_debug!("POST {} ({} bytes)", url, body.len());
        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let bytes = Self::read_success_body(response).await?;
        let text = decode_response(intent, &bytes)
            .map_err(|err| RequestError::new(FailureCause::MalformedBody, err.to_string()))?;
        copydesk_info!("{:?} generation returned {} chars", intent, text.len());
        Ok(text)
    }

    async fn health(&self) -> Result<String, RequestError> {
        let url = self.endpoint("")?;
        let client = self.build_client()?;
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;
        let bytes = Self::read_success_body(response).await?;
        decode_health(&bytes)
            .map_err(|err| RequestError::new(FailureCause::MalformedBody, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_builder() {
        return RequestError::new(FailureCause::InvalidUrl, err.to_string());
    }
    if err.is_decode() {
        return RequestError::new(FailureCause::MalformedBody, err.to_string());
    }
    RequestError::new(FailureCause::Network, err.to_string())
}
