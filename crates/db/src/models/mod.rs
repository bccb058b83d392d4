//! Entity rows, read views and request DTOs.
//!
//! Each module follows the same shape: a `FromRow` entity struct mirroring
//! the table, a `Create*` DTO for inserts, and an all-optional `Update*` DTO
//! that implements [`crate::mutation::Changeset`].

pub mod certification;
pub mod miniature_image;
pub mod miniature_paint;
pub mod miniature_project;
pub mod miniature_technique;
pub mod miniature_theme;
pub mod portfolio_project;
pub mod profile;
pub mod skill;
pub mod skill_type;
pub mod storage_file;
pub mod work_experience;

use folio_core::types::DbId;
use serde::Deserialize;
use validator::Validate;

/// Body of every `PUT .../{links}` route: the complete new set of child ids.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetLinkIds {
    pub ids: Vec<DbId>,
}
