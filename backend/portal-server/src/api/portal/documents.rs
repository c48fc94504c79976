//! Client portal handlers
//!
//! Both routes require a bearer token. Storage and summarisation are
//! simulated: nothing uploaded is persisted.

use crate::{
    ApiError, ApiResult, AppState, CurrentUser, DocumentMetadata, STATUS_NEW, demo_documents,
};

use axum::{
    Json,
    extract::{Multipart, State},
};
use log::info;
use uuid::Uuid;

const UPLOAD_FIELD: &str = "file";

// =============================================================================
// Handlers
// =============================================================================

/// GET /portal/documents
///
/// List the caller's documents
pub async fn list_documents(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<DocumentMetadata>>> {
    Ok(Json(demo_documents(&user.email, state.clock.now())))
}

/// POST /portal/documents/upload
///
/// Accept a multipart `file` field and return the metadata it would be stored under
pub async fn upload_document(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    mut multipart: Multipart,
) -> ApiResult<Json<DocumentMetadata>> {
    let mut upload: Option<(String, usize)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .ok_or_else(|| ApiError::validation("uploaded file has no name", Some(UPLOAD_FIELD)))?;

        let bytes = field.bytes().await?;
        upload = Some((filename, bytes.len()));
        break;
    }

    let Some((filename, size)) = upload else {
        return Err(ApiError::validation(
            "multipart field 'file' is required",
            Some(UPLOAD_FIELD),
        ));
    };

    let id = Uuid::new_v4().to_string();
    info!("{} uploaded {} ({} bytes) as {}", user.email, filename, size, id);

    Ok(Json(DocumentMetadata {
        cloud_path: format!("s3://secure-bucket/{}/{}", id, filename),
        llm_summary: Some(format!(
            "LLM Summary: Preliminary analysis of {} suggests high complexity. Key terms: \
             Jurisdiction, Arbitration, and non-compete. Review needed.",
            filename
        )),
        id,
        filename,
        uploaded_by: user.email,
        upload_date: state.clock.now(),
        status: STATUS_NEW.into(),
    }))
}
