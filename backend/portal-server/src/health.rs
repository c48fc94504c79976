use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - liveness plus the auth configuration the process runs with
pub async fn health_check(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "auth": {
                "algorithm": state.auth.algorithm(),
                "token_ttl_minutes": state.auth.token_ttl().num_minutes(),
            },
        },
        "timestamp": state.clock.now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}
