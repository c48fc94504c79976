use serde::Deserialize;

/// Body of POST /qa-chatbot
#[derive(Debug, Clone, Deserialize)]
pub struct QaRequest {
    pub query: String,
}
