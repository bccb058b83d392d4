//! Repository for the `miniature_paints` table.

use std::collections::HashMap;

use folio_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::error::MutationError;
use crate::models::miniature_paint::{CreateMiniaturePaint, MiniaturePaint, UpdateMiniaturePaint};
use crate::mutation::{self, Changeset};
use crate::schema::MINIATURE_PAINTS;

const COLUMNS: &str = "id, name, manufacturer, color_hex, paint_type, created_at, updated_at";

#[derive(Debug, FromRow)]
struct LinkedPaint {
    project_id: DbId,
    #[sqlx(flatten)]
    paint: MiniaturePaint,
}

pub struct MiniaturePaintRepo;

impl MiniaturePaintRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateMiniaturePaint,
    ) -> Result<MiniaturePaint, sqlx::Error> {
        let query = format!(
            "INSERT INTO miniature_paints (name, manufacturer, color_hex, paint_type)
             VALUES ($1, $2, $3, COALESCE($4, 'base'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MiniaturePaint>(&query)
            .bind(&input.name)
            .bind(&input.manufacturer)
            .bind(&input.color_hex)
            .bind(&input.paint_type)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MiniaturePaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM miniature_paints WHERE id = $1");
        sqlx::query_as::<_, MiniaturePaint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<MiniaturePaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM miniature_paints ORDER BY manufacturer, name");
        sqlx::query_as::<_, MiniaturePaint>(&query)
            .fetch_all(pool)
            .await
    }

    /// Linked paints of each project in `project_ids`, keyed by project.
    pub async fn list_for_projects(
        pool: &PgPool,
        project_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<MiniaturePaint>>, sqlx::Error> {
        let mut by_project: HashMap<DbId, Vec<MiniaturePaint>> = HashMap::new();
        if project_ids.is_empty() {
            return Ok(by_project);
        }
        let rows = sqlx::query_as::<_, LinkedPaint>(
            "SELECT pp.project_id, p.id, p.name, p.manufacturer, p.color_hex, p.paint_type,
                    p.created_at, p.updated_at
             FROM miniature_paints p
             JOIN miniature_project_paints pp ON pp.paint_id = p.id
             WHERE pp.project_id = ANY($1)
             ORDER BY p.manufacturer, p.name",
        )
        .bind(project_ids)
        .fetch_all(pool)
        .await?;
        for row in rows {
            by_project.entry(row.project_id).or_default().push(row.paint);
        }
        Ok(by_project)
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMiniaturePaint,
    ) -> Result<(), MutationError> {
        mutation::update(pool, &MINIATURE_PAINTS, id, input.changeset()).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), MutationError> {
        mutation::delete(pool, &MINIATURE_PAINTS, id).await
    }
}
