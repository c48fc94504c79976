use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct QaResponse {
    pub answer: &'static str,
}
