use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ScreeningRequest {
    /// Base64-encoded image bytes, standard alphabet.
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
