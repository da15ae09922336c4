use async_trait::async_trait;
use oncogate::{
    Error, Result,
    predictor::{ClassScores, InferenceEndpoint},
};
use std::sync::{Arc, Mutex};

/// Stub inference endpoint for testing the decision logic without HTTP.
pub struct StubEndpoint {
    scores: Option<ClassScores>,
    error: Option<String>,
    /// Payload sizes of every invocation, in order.
    pub invocations: Arc<Mutex<Vec<usize>>>,
}

impl StubEndpoint {
    pub fn returning(benign: f64, malignant: f64) -> Self {
        Self {
            scores: Some(ClassScores { benign, malignant }),
            error: None,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            scores: None,
            error: Some(message.to_string()),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl InferenceEndpoint for StubEndpoint {
    async fn invoke(&self, image: &[u8]) -> Result<ClassScores> {
        self.invocations.lock().unwrap().push(image.len());

        if let Some(ref message) = self.error {
            return Err(Error::malformed_response(message.clone()));
        }

        Ok(self.scores.expect("stub endpoint has no scores configured"))
    }
}
