//! Repository for the `work_experience` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::error::MutationError;
use crate::models::work_experience::{
    CreateWorkExperience, UpdateWorkExperience, WorkExperience,
};
use crate::mutation::{self, Changeset};
use crate::schema::WORK_EXPERIENCE;

const COLUMNS: &str = "id, company, position, description, start_date, end_date, is_current, \
                       display_order, created_at, updated_at";

pub struct WorkExperienceRepo;

impl WorkExperienceRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateWorkExperience,
    ) -> Result<WorkExperience, sqlx::Error> {
        let query = format!(
            "INSERT INTO work_experience
                (company, position, description, start_date, end_date, is_current, display_order)
             VALUES ($1, $2, COALESCE($3, ''), $4, $5, COALESCE($6, false), COALESCE($7, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkExperience>(&query)
            .bind(&input.company)
            .bind(&input.position)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_current)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WorkExperience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_experience WHERE id = $1");
        sqlx::query_as::<_, WorkExperience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<WorkExperience>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work_experience ORDER BY start_date DESC, display_order, id"
        );
        sqlx::query_as::<_, WorkExperience>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWorkExperience,
    ) -> Result<(), MutationError> {
        mutation::update(pool, &WORK_EXPERIENCE, id, input.changeset()).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), MutationError> {
        mutation::delete(pool, &WORK_EXPERIENCE, id).await
    }
}
