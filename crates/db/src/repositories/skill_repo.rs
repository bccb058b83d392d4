//! Repository for the `skills` table.

use std::collections::HashMap;

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::error::MutationError;
use crate::models::skill::{CreateSkill, Skill, SkillWithType, UpdateSkill};
use crate::models::skill_type::SkillType;
use crate::mutation::{self, Changeset};
use crate::repositories::SkillTypeRepo;
use crate::schema::SKILLS;

const COLUMNS: &str = "id, skill, skill_type_id, is_visible, display_order, created_at, updated_at";

pub struct SkillRepo;

impl SkillRepo {
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (skill, skill_type_id, is_visible, display_order)
             VALUES ($1, $2, COALESCE($3, true), COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.skill)
            .bind(input.skill_type_id)
            .bind(input.is_visible)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_with_type(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SkillWithType>, sqlx::Error> {
        let Some(skill) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let skill_type = SkillTypeRepo::find_by_id(pool, skill.skill_type_id).await?;
        Ok(Some(SkillWithType { skill, skill_type }))
    }

    /// All skills with their types, ordered by `display_order, skill`.
    pub async fn list_with_types(pool: &PgPool) -> Result<Vec<SkillWithType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY display_order, skill");
        let skills = sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await?;
        let types: HashMap<DbId, SkillType> = SkillTypeRepo::list(pool)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();
        Ok(skills
            .into_iter()
            .map(|skill| SkillWithType {
                skill_type: types.get(&skill.skill_type_id).cloned(),
                skill,
            })
            .collect())
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateSkill) -> Result<(), MutationError> {
        mutation::update(pool, &SKILLS, id, input.changeset()).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), MutationError> {
        mutation::delete(pool, &SKILLS, id).await
    }
}
