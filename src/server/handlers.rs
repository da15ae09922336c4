use super::types::{ErrorResponse, ScreeningRequest, ScreeningResponse};
use crate::{Error, predictor::Predictor};
use axum::{extract::State, http::StatusCode, response::Json};
use base64::{Engine as _, engine::general_purpose};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
}

pub async fn screen(
    State(state): State<AppState>,
    Json(request): Json<ScreeningRequest>,
) -> Result<Json<ScreeningResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        "Received screening request ({} base64 characters)",
        request.image.len()
    );

    // Decode failures abort the request; the endpoint is never contacted.
    let image = general_purpose::STANDARD
        .decode(&request.image)
        .map_err(|e| {
            error!("Failed to decode image payload: {}", e);
            error_response(Error::Decode(e))
        })?;

    match state.predictor.predict(&image).await {
        Ok(verdict) => Ok(Json(ScreeningResponse {
            result: verdict.to_string(),
        })),
        Err(e) => {
            error!("Failed to classify image: {}", e);
            Err(error_response(e))
        }
    }
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        Error::Decode(_) => StatusCode::BAD_REQUEST,
        Error::EndpointInvocation(_) | Error::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
