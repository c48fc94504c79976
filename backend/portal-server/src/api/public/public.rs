//! Unauthenticated handlers

use crate::{QaRequest, QaResponse, answer_for};

use axum::Json;
use serde_json::{Value, json};

pub const ROOT_MESSAGE: &str = "Advocate Portfolio API Gateway is running.";

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": ROOT_MESSAGE }))
}

/// POST /qa-chatbot
///
/// Keyword lookup standing in for a retrieval pipeline
pub async fn qa_chatbot(Json(request): Json<QaRequest>) -> Json<QaResponse> {
    log::debug!("FAQ query ({} chars)", request.query.len());

    Json(QaResponse {
        answer: answer_for(&request.query),
    })
}
