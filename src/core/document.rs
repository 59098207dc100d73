//! Document business logic - Storing uploaded bytes and their metadata.
//!
//! Files are written to the uploads directory under a generated name
//! (`<uuid>.<ext>`) so client-supplied names never reach the filesystem.
//! Deleting a document removes both the stored file and the record.

use crate::{
    core::{LIST_LIMIT, client::get_client, new_id},
    entities::{Document, document},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Public URL prefix under which stored files are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// A file received from the API together with its form metadata
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// Owning client; must exist
    pub client_id: String,
    /// Case to file the document under
    pub case_id: Option<String>,
    /// Staff description
    pub description: Option<String>,
    /// Staff category label
    pub category: Option<String>,
    /// File name as sent by the uploader
    pub original_filename: String,
    /// MIME type as sent by the uploader
    pub content_type: String,
    /// File contents
    pub bytes: Vec<u8>,
}

/// Result of a successful upload
#[derive(Debug, Clone, Serialize)]
pub struct StoredDocument {
    /// Fixed confirmation message
    pub message: &'static str,
    /// The recorded document
    pub document: document::Model,
    /// Where the stored bytes can be fetched
    pub file_url: String,
}

/// Optional filters for [`list_documents`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentFilter {
    /// Only documents of this client
    pub client_id: Option<String>,
    /// Only documents filed under this case
    pub case_id: Option<String>,
}

/// Builds the stored file name, keeping the extension of the uploaded one.
///
/// Only an ASCII alphanumeric extension survives; anything else (separators,
/// dots, spaces) is dropped so the name always stays inside the uploads dir.
fn stored_filename(original: &str) -> String {
    match original.rsplit_once('.') {
        Some((_, extension))
            if !extension.is_empty() && extension.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            format!("{}.{extension}", new_id())
        }
        _ => new_id(),
    }
}

/// Writes the uploaded bytes to `uploads_dir` and records the document.
pub async fn upload_document(
    db: &DatabaseConnection,
    uploads_dir: &Path,
    upload: DocumentUpload,
) -> Result<StoredDocument> {
    get_client(db, &upload.client_id).await?;

    let filename = stored_filename(&upload.original_filename);
    let file_path = uploads_dir.join(&filename);

    tokio::fs::create_dir_all(uploads_dir).await?;
    tokio::fs::write(&file_path, &upload.bytes).await?;

    let file_size = i64::try_from(upload.bytes.len())
        .map_err(|_| Error::validation("uploaded file is too large"))?;

    let document = document::ActiveModel {
        id: Set(new_id()),
        client_id: Set(upload.client_id),
        case_id: Set(upload.case_id),
        filename: Set(filename.clone()),
        original_filename: Set(upload.original_filename),
        file_path: Set(file_path.to_string_lossy().into_owned()),
        file_size: Set(file_size),
        content_type: Set(upload.content_type),
        description: Set(upload.description),
        category: Set(upload.category),
        uploaded_at: Set(chrono::Utc::now()),
    };

    let document = match document.insert(db).await {
        Ok(document) => document,
        Err(e) => {
            // Do not leave unreferenced bytes behind
            if let Err(io) = tokio::fs::remove_file(&file_path).await {
                warn!("Failed to remove {} after insert error: {io}", file_path.display());
            }
            return Err(e.into());
        }
    };

    info!(
        document_id = %document.id,
        client_id = %document.client_id,
        bytes = document.file_size,
        "Document uploaded"
    );

    Ok(StoredDocument {
        message: "Document uploaded successfully",
        file_url: format!("{UPLOADS_URL_PREFIX}/{filename}"),
        document,
    })
}

/// Lists documents newest upload first.
pub async fn list_documents(
    db: &DatabaseConnection,
    filter: &DocumentFilter,
) -> Result<Vec<document::Model>> {
    let mut query = Document::find();

    if let Some(client_id) = &filter.client_id {
        query = query.filter(document::Column::ClientId.eq(client_id.as_str()));
    }
    if let Some(case_id) = &filter.case_id {
        query = query.filter(document::Column::CaseId.eq(case_id.as_str()));
    }

    query
        .order_by_desc(document::Column::UploadedAt)
        .limit(LIST_LIMIT)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes the stored file (if still present) and then the record.
pub async fn delete_document(db: &DatabaseConnection, document_id: &str) -> Result<()> {
    let document = Document::find_by_id(document_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::DocumentNotFound {
            id: document_id.to_string(),
        })?;

    match tokio::fs::remove_file(&document.file_path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(document_id, "Stored file already missing: {}", document.file_path);
        }
        Err(e) => return Err(e.into()),
    }

    Document::delete_by_id(document_id).exec(db).await?;
    info!(document_id, "Document deleted");
    Ok(())
}
