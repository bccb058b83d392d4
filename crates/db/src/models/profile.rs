//! The singleton profile.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// The single row of the `profile` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: i16,
    pub full_name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub avatar_file_id: Option<DbId>,
    pub resume_file_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Profile with its asset references resolved to URLs.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: Profile,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
}

/// DTO for the profile upsert. Absent fields keep their stored value, or
/// default to empty on first creation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpsertProfile {
    #[validate(length(min = 1, max = 200))]
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// DTO for pointing the avatar or resume at a stored file.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetProfileFile {
    #[validate(range(min = 1))]
    pub file_id: DbId,
}
