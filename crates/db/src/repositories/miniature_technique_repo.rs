//! Repository for the seeded `miniature_techniques` table. Read-only.

use std::collections::HashMap;

use folio_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::miniature_technique::MiniatureTechnique;

const COLUMNS: &str = "id, name, slug, description, display_order, created_at, updated_at";

#[derive(Debug, FromRow)]
struct LinkedTechnique {
    project_id: DbId,
    #[sqlx(flatten)]
    technique: MiniatureTechnique,
}

pub struct MiniatureTechniqueRepo;

impl MiniatureTechniqueRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<MiniatureTechnique>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM miniature_techniques ORDER BY display_order, name");
        sqlx::query_as::<_, MiniatureTechnique>(&query)
            .fetch_all(pool)
            .await
    }

    /// Linked techniques of each project in `project_ids`, keyed by project.
    pub async fn list_for_projects(
        pool: &PgPool,
        project_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<MiniatureTechnique>>, sqlx::Error> {
        let mut by_project: HashMap<DbId, Vec<MiniatureTechnique>> = HashMap::new();
        if project_ids.is_empty() {
            return Ok(by_project);
        }
        let rows = sqlx::query_as::<_, LinkedTechnique>(
            "SELECT pt.project_id, t.id, t.name, t.slug, t.description, t.display_order,
                    t.created_at, t.updated_at
             FROM miniature_techniques t
             JOIN miniature_project_techniques pt ON pt.technique_id = t.id
             WHERE pt.project_id = ANY($1)
             ORDER BY t.display_order, t.name",
        )
        .bind(project_ids)
        .fetch_all(pool)
        .await?;
        for row in rows {
            by_project.entry(row.project_id).or_default().push(row.technique);
        }
        Ok(by_project)
    }
}
