use crate::{
    AppState, health, list_documents, login, qa_chatbot, root, upload_document,
};

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use log::warn;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Build the application router with all endpoints
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        // Public endpoints
        .route("/", get(root))
        .route("/qa-chatbot", post(qa_chatbot))
        .route("/health", get(health::health_check))
        // Authentication
        .route("/auth/login", post(login))
        // Secure client portal (bearer token required)
        .route("/portal/documents", get(list_documents))
        .route("/portal/documents/upload", post(upload_document))
        // Add shared state
        .with_state(state)
        .layer(cors_layer(allowed_origins))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// CORS for the configured front-end origins; any origin when none are configured
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
