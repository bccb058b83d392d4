//! Painted miniature projects.

use folio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::miniature_image::MiniatureImage;
use crate::models::miniature_paint::MiniaturePaint;
use crate::models::miniature_technique::MiniatureTechnique;
use crate::mutation::{Changeset, FieldSet};

/// A row from the `miniature_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MiniatureProject {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub theme_id: Option<DbId>,
    pub scale: Option<String>,
    pub manufacturer: Option<String>,
    pub time_spent_hours: Option<f64>,
    pub difficulty: Option<String>,
    pub completed_date: Option<Date>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project with its ordered images and linked techniques and paints.
#[derive(Debug, Clone, Serialize)]
pub struct MiniatureProjectView {
    #[serde(flatten)]
    pub project: MiniatureProject,
    pub images: Vec<MiniatureImage>,
    pub techniques: Vec<MiniatureTechnique>,
    pub paints: Vec<MiniaturePaint>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMiniatureProject {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    pub theme_id: Option<DbId>,
    pub scale: Option<String>,
    pub manufacturer: Option<String>,
    #[validate(range(min = 0.0))]
    pub time_spent_hours: Option<f64>,
    pub difficulty: Option<String>,
    pub completed_date: Option<Date>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMiniatureProject {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub theme_id: Option<DbId>,
    pub scale: Option<String>,
    pub manufacturer: Option<String>,
    #[validate(range(min = 0.0))]
    pub time_spent_hours: Option<f64>,
    pub difficulty: Option<String>,
    pub completed_date: Option<Date>,
    pub display_order: Option<i32>,
}

impl Changeset for UpdateMiniatureProject {
    fn changeset(&self) -> FieldSet {
        FieldSet::new()
            .set_opt("title", self.title.clone())
            .set_opt("description", self.description.clone())
            .set_opt("theme_id", self.theme_id)
            .set_opt("scale", self.scale.clone())
            .set_opt("manufacturer", self.manufacturer.clone())
            .set_opt("time_spent_hours", self.time_spent_hours)
            .set_opt("difficulty", self.difficulty.clone())
            .set_opt("completed_date", self.completed_date)
            .set_opt("display_order", self.display_order)
    }
}
