//! Repository for the singleton `profile` row.
//!
//! The row is addressed by the fixed key [`PROFILE_ID`] and created
//! implicitly by the first upsert.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::error::MutationError;
use crate::models::profile::{Profile, ProfileView, UpsertProfile};
use crate::repositories::StorageFileRepo;
use crate::schema::{PROFILE, PROFILE_ID};

const COLUMNS: &str = "id, full_name, title, bio, email, phone, location, \
                       avatar_file_id, resume_file_id, created_at, updated_at";

/// Which asset reference on the profile to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFile {
    Avatar,
    Resume,
}

impl ProfileFile {
    fn column(self) -> &'static str {
        match self {
            ProfileFile::Avatar => "avatar_file_id",
            ProfileFile::Resume => "resume_file_id",
        }
    }
}

pub struct ProfileRepo;

impl ProfileRepo {
    /// The profile, or `None` if it has never been written.
    pub async fn find(pool: &PgPool) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profile WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(PROFILE_ID)
            .fetch_optional(pool)
            .await
    }

    /// The profile with avatar and resume resolved to URLs.
    pub async fn find_view(
        pool: &PgPool,
        files_url: &str,
    ) -> Result<Option<ProfileView>, sqlx::Error> {
        let Some(profile) = Self::find(pool).await? else {
            return Ok(None);
        };
        let avatar_url = StorageFileRepo::url_for(pool, profile.avatar_file_id, files_url).await?;
        let resume_url = StorageFileRepo::url_for(pool, profile.resume_file_id, files_url).await?;
        Ok(Some(ProfileView {
            profile,
            avatar_url,
            resume_url,
        }))
    }

    /// Create the profile or update the supplied fields of the existing one.
    ///
    /// A single statement keyed on the sentinel id, so two concurrent first
    /// writes cannot both insert.
    pub async fn upsert(pool: &PgPool, input: &UpsertProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profile (id, full_name, title, bio, email, phone, location)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''),
                     COALESCE($5, ''), COALESCE($6, ''), COALESCE($7, ''))
             ON CONFLICT (id) DO UPDATE SET
                full_name = COALESCE($2, profile.full_name),
                title = COALESCE($3, profile.title),
                bio = COALESCE($4, profile.bio),
                email = COALESCE($5, profile.email),
                phone = COALESCE($6, profile.phone),
                location = COALESCE($7, profile.location)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(PROFILE_ID)
            .bind(&input.full_name)
            .bind(&input.title)
            .bind(&input.bio)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Point the avatar or resume at `file_id`, or clear it with `None`.
    ///
    /// Fails with [`MutationError::NotFound`] if the profile was never
    /// created.
    pub async fn set_file(
        pool: &PgPool,
        which: ProfileFile,
        file_id: Option<DbId>,
    ) -> Result<(), MutationError> {
        let query = format!("UPDATE profile SET {} = $2 WHERE id = $1", which.column());
        let done = sqlx::query(&query)
            .bind(PROFILE_ID)
            .bind(file_id)
            .execute(pool)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    entity = PROFILE.entity,
                    column = which.column(),
                    error = %e,
                    "Store operation failed"
                );
            })?;
        if done.rows_affected() == 0 {
            return Err(MutationError::not_found(PROFILE.entity, DbId::from(PROFILE_ID)));
        }
        Ok(())
    }
}
