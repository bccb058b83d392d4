//! Repository for the `skill_types` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::error::MutationError;
use crate::models::skill_type::{CreateSkillType, SkillType, UpdateSkillType};
use crate::mutation::{self, Changeset};
use crate::schema::SKILL_TYPES;

const COLUMNS: &str = "id, name, description, display_order, created_at, updated_at";

pub struct SkillTypeRepo;

impl SkillTypeRepo {
    pub async fn create(pool: &PgPool, input: &CreateSkillType) -> Result<SkillType, sqlx::Error> {
        let query = format!(
            "INSERT INTO skill_types (name, description, display_order)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SkillType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SkillType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skill_types WHERE id = $1");
        sqlx::query_as::<_, SkillType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<SkillType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skill_types ORDER BY display_order, name");
        sqlx::query_as::<_, SkillType>(&query)
            .fetch_all(pool)
            .await
    }

    /// Number of skills filed under this type.
    pub async fn count_skills(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM skills WHERE skill_type_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSkillType,
    ) -> Result<(), MutationError> {
        mutation::update(pool, &SKILL_TYPES, id, input.changeset()).await
    }

    /// Delete a skill type. Refused by the store while skills reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), MutationError> {
        mutation::delete(pool, &SKILL_TYPES, id).await
    }
}
