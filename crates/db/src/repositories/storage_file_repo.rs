//! Repository for the `storage_files` table.
//!
//! Rows are registered once the external file service has stored an object.
//! This service never deletes them.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::storage_file::{CreateStorageFile, StorageFile};

const COLUMNS: &str = "id, storage_key, bucket, file_name, file_size, mime_type, file_type, \
                       created_at, updated_at";

pub struct StorageFileRepo;

impl StorageFileRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateStorageFile,
    ) -> Result<StorageFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO storage_files (storage_key, bucket, file_name, file_size, mime_type, file_type)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StorageFile>(&query)
            .bind(&input.storage_key)
            .bind(&input.bucket)
            .bind(&input.file_name)
            .bind(input.file_size)
            .bind(&input.mime_type)
            .bind(&input.file_type)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StorageFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM storage_files WHERE id = $1");
        sqlx::query_as::<_, StorageFile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve an optional file reference to its public URL.
    ///
    /// A dangling reference resolves to `None`.
    pub async fn url_for(
        pool: &PgPool,
        file_id: Option<DbId>,
        files_url: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        let Some(id) = file_id else {
            return Ok(None);
        };
        Ok(Self::find_by_id(pool, id)
            .await?
            .map(|file| file.url(files_url)))
    }
}
