//! Ordered images attached to a miniature project.

use folio_core::files::file_url;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An attachment row joined with its storage file.
#[derive(Debug, Clone, FromRow)]
pub struct MiniatureImageRow {
    pub id: DbId,
    pub file_id: DbId,
    pub caption: Option<String>,
    pub display_order: i32,
    pub file_name: String,
    pub mime_type: String,
    pub file_type: String,
    pub storage_key: String,
    pub created_at: Timestamp,
}

impl MiniatureImageRow {
    pub fn resolve(self, files_url: &str) -> MiniatureImage {
        MiniatureImage {
            url: file_url(files_url, &self.file_type, &self.storage_key),
            id: self.id,
            file_id: self.file_id,
            caption: self.caption,
            display_order: self.display_order,
            file_name: self.file_name,
            mime_type: self.mime_type,
            created_at: self.created_at,
        }
    }
}

/// An attached image as returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct MiniatureImage {
    pub id: DbId,
    pub file_id: DbId,
    pub caption: Option<String>,
    pub display_order: i32,
    pub file_name: String,
    pub mime_type: String,
    pub url: String,
    pub created_at: Timestamp,
}

/// DTO for attaching a stored file to a project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttachImage {
    #[validate(range(min = 1))]
    pub file_id: DbId,
    #[validate(length(max = 500))]
    pub caption: Option<String>,
}
