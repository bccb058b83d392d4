//! Themes grouping miniature projects (armies, warbands, dioramas).

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::miniature_project::MiniatureProject;
use crate::mutation::{Changeset, FieldSet};

/// A row from the `miniature_themes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MiniatureTheme {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub cover_image_file_id: Option<DbId>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A theme with its projects and cover image URL.
#[derive(Debug, Clone, Serialize)]
pub struct MiniatureThemeView {
    #[serde(flatten)]
    pub theme: MiniatureTheme,
    pub cover_image_url: Option<String>,
    pub projects: Vec<MiniatureProject>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMiniatureTheme {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    pub cover_image_file_id: Option<DbId>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMiniatureTheme {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover_image_file_id: Option<DbId>,
    pub display_order: Option<i32>,
}

impl Changeset for UpdateMiniatureTheme {
    fn changeset(&self) -> FieldSet {
        FieldSet::new()
            .set_opt("name", self.name.clone())
            .set_opt("description", self.description.clone())
            .set_opt("cover_image_file_id", self.cover_image_file_id)
            .set_opt("display_order", self.display_order)
    }
}
