use super::types::ClassScores;
use crate::{Error, Result, config::EndpointConfig};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait InferenceEndpoint: Send + Sync {
    async fn invoke(&self, image: &[u8]) -> Result<ClassScores>;
}

/// Remote inference endpoint reached over HTTP.
///
/// One POST per invocation, raw image bytes as body, no retries. Requests
/// are bounded by the configured timeout.
pub struct HttpInferenceEndpoint {
    client: reqwest::Client,
    url: String,
    content_type: String,
}

impl HttpInferenceEndpoint {
    pub fn new(config: EndpointConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(Error::config("endpoint URL must not be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.url,
            content_type: config.content_type,
        })
    }
}

#[async_trait]
impl InferenceEndpoint for HttpInferenceEndpoint {
    async fn invoke(&self, image: &[u8]) -> Result<ClassScores> {
        debug!(
            "Invoking inference endpoint {} with {} byte payload",
            self.url,
            image.len()
        );

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, self.content_type.as_str())
            .body(image.to_vec())
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;

        debug!("Received {} byte endpoint response", body.len());

        ClassScores::from_response_body(&body)
    }
}
