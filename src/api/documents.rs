//! Document endpoints, including the multipart upload.

use super::{ApiState, MessageResponse};
use crate::{
    core::document::{self, DocumentFilter, DocumentUpload, StoredDocument},
    entities::DocumentModel,
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Multipart, Path, Query, State, multipart::MultipartError},
};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

fn multipart_error(e: MultipartError) -> Error {
    Error::validation(format!("Malformed upload: {}", e.body_text()))
}

/// Empty form values count as absent.
fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// `POST /api/documents/upload`
///
/// Accepts `client_id`, `case_id`, `description`, `category` and `file` form fields.
pub async fn upload_document(
    State(state): State<ApiState>,
    mut multipart: Multipart,
) -> Result<Json<StoredDocument>> {
    let mut client_id = None;
    let mut case_id = None;
    let mut description = None;
    let mut category = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "client_id" => client_id = non_empty(field.text().await.map_err(multipart_error)?),
            "case_id" => case_id = non_empty(field.text().await.map_err(multipart_error)?),
            "description" => {
                description = non_empty(field.text().await.map_err(multipart_error)?);
            }
            "category" => category = non_empty(field.text().await.map_err(multipart_error)?),
            "file" => {
                let original_filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some((original_filename, content_type, bytes.to_vec()));
            }
            other => tracing::debug!("Ignoring unexpected upload field {other:?}"),
        }
    }

    let client_id = client_id.ok_or_else(|| Error::validation("client_id is required"))?;
    let (original_filename, content_type, bytes) =
        file.ok_or_else(|| Error::validation("file is required"))?;

    let upload = DocumentUpload {
        client_id,
        case_id,
        description,
        category,
        original_filename,
        content_type,
        bytes,
    };

    document::upload_document(&state.db, &state.uploads_dir, upload)
        .await
        .map(Json)
}

/// `GET /api/documents?client_id=&case_id=`
pub async fn list_documents(
    State(state): State<ApiState>,
    Query(filter): Query<DocumentFilter>,
) -> Result<Json<Vec<DocumentModel>>> {
    document::list_documents(&state.db, &filter).await.map(Json)
}

/// `DELETE /api/documents/{id}`
pub async fn delete_document(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    document::delete_document(&state.db, &id).await?;
    Ok(MessageResponse::json("Document deleted successfully"))
}
