//! References to externally stored binary assets.

use folio_core::files::file_url;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `storage_files` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StorageFile {
    pub id: DbId,
    pub storage_key: String,
    pub bucket: String,
    pub file_name: String,
    pub file_size: i64,
    pub mime_type: String,
    pub file_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StorageFile {
    /// The externally servable URL of this file.
    pub fn url(&self, files_url: &str) -> String {
        file_url(files_url, &self.file_type, &self.storage_key)
    }
}

/// DTO for registering a file the external file service has stored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStorageFile {
    pub storage_key: String,
    pub bucket: String,
    pub file_name: String,
    pub file_size: i64,
    pub mime_type: String,
    pub file_type: String,
}
