pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    predictor::{HttpInferenceEndpoint, Predictor},
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Environment variable overrides the configured endpoint URL
    let mut endpoint_config = config.endpoint.clone();
    if let Ok(url) = std::env::var("ENDPOINT_URL") {
        endpoint_config.url = url;
    }

    let endpoint = HttpInferenceEndpoint::new(endpoint_config)?;
    let predictor = Predictor::new(Arc::new(endpoint));

    let app_state = handlers::AppState {
        predictor: Arc::new(predictor),
    };

    let app = Router::new()
        .route("/", post(handlers::screen))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
