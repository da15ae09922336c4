mod client;
mod types;

pub use client::{HttpInferenceEndpoint, InferenceEndpoint};
pub use types::{ClassScores, Verdict};

use crate::Result;
use std::sync::Arc;
use tracing::info;

/// Forwards an image to the inference endpoint and maps the returned score
/// pair to a verdict. Holds no per-request state.
pub struct Predictor {
    endpoint: Arc<dyn InferenceEndpoint>,
}

impl Predictor {
    pub fn new(endpoint: Arc<dyn InferenceEndpoint>) -> Self {
        Self { endpoint }
    }

    pub async fn predict(&self, image: &[u8]) -> Result<Verdict> {
        let scores = self.endpoint.invoke(image).await?;
        let verdict = scores.verdict();

        info!(
            "Classified image: benign={} malignant={} verdict={}",
            scores.benign, scores.malignant, verdict
        );

        Ok(verdict)
    }
}
