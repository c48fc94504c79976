use chrono::{DateTime, Utc};
use serde::Serialize;

/// Document record shown in the client portal
#[derive(Debug, Clone, Serialize)]
pub struct DocumentMetadata {
    pub id: String,
    pub filename: String,
    pub uploaded_by: String,
    pub upload_date: DateTime<Utc>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_summary: Option<String>,
    pub cloud_path: String,
}
