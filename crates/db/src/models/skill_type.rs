//! Skill categories ("Languages", "Databases", ...).

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::mutation::{Changeset, FieldSet};

/// A row from the `skill_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillType {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkillType {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSkillType {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i32>,
}

impl Changeset for UpdateSkillType {
    fn changeset(&self) -> FieldSet {
        FieldSet::new()
            .set_opt("name", self.name.clone())
            .set_opt("description", self.description.clone())
            .set_opt("display_order", self.display_order)
    }
}
