//! Individual skills, each filed under one skill type.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::skill_type::SkillType;
use crate::mutation::{Changeset, FieldSet};

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub skill: String,
    pub skill_type_id: DbId,
    pub is_visible: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A skill with its type embedded.
#[derive(Debug, Clone, Serialize)]
pub struct SkillWithType {
    #[serde(flatten)]
    pub skill: Skill,
    pub skill_type: Option<SkillType>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkill {
    #[validate(length(min = 1, max = 100))]
    pub skill: String,
    pub skill_type_id: DbId,
    pub is_visible: Option<bool>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSkill {
    #[validate(length(min = 1, max = 100))]
    pub skill: Option<String>,
    pub skill_type_id: Option<DbId>,
    pub is_visible: Option<bool>,
    pub display_order: Option<i32>,
}

impl Changeset for UpdateSkill {
    fn changeset(&self) -> FieldSet {
        FieldSet::new()
            .set_opt("skill", self.skill.clone())
            .set_opt("skill_type_id", self.skill_type_id)
            .set_opt("is_visible", self.is_visible)
            .set_opt("display_order", self.display_order)
    }
}
