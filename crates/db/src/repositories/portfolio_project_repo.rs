//! Repository for the `portfolio_projects` table and its technology links.

use std::collections::HashMap;

use folio_core::files::file_url;
use folio_core::types::DbId;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use crate::error::MutationError;
use crate::links;
use crate::models::portfolio_project::{
    CreatePortfolioProject, PortfolioProject, PortfolioProjectView, UpdatePortfolioProject,
};
use crate::models::skill::Skill;
use crate::mutation::{self, Changeset};
use crate::schema::{PORTFOLIO_PROJECTS, PORTFOLIO_PROJECT_TECHNOLOGIES};

const COLUMNS: &str = "id, title, category, description, long_description, image_file_id, \
                       github_url, live_url, start_date, end_date, is_ongoing, team_size, role, \
                       featured, features, challenges, learnings, display_order, created_at, \
                       updated_at";

/// Project row plus the storage columns of its cover image.
#[derive(Debug, FromRow)]
struct ProjectRow {
    #[sqlx(flatten)]
    project: PortfolioProject,
    image_file_type: Option<String>,
    image_storage_key: Option<String>,
}

/// A technology link with the linked skill.
#[derive(Debug, FromRow)]
struct TechnologyRow {
    project_id: DbId,
    #[sqlx(flatten)]
    skill: Skill,
}

pub struct PortfolioProjectRepo;

impl PortfolioProjectRepo {
    /// Insert a project and, when given, its technology links in one
    /// transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePortfolioProject,
    ) -> Result<PortfolioProject, MutationError> {
        let query = format!(
            "INSERT INTO portfolio_projects
                (title, category, description, long_description, image_file_id, github_url,
                 live_url, start_date, end_date, is_ongoing, team_size, role, featured,
                 features, challenges, learnings, display_order)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''), $5, $6,
                     $7, $8, $9, COALESCE($10, false), $11, COALESCE($12, ''), COALESCE($13, false),
                     $14, $15, $16, COALESCE($17, 0))
             RETURNING {COLUMNS}"
        );
        let result = async {
            let mut tx = pool.begin().await?;
            let project = sqlx::query_as::<_, PortfolioProject>(&query)
                .bind(&input.title)
                .bind(&input.category)
                .bind(&input.description)
                .bind(&input.long_description)
                .bind(input.image_file_id)
                .bind(&input.github_url)
                .bind(&input.live_url)
                .bind(input.start_date)
                .bind(input.end_date)
                .bind(input.is_ongoing)
                .bind(input.team_size)
                .bind(&input.role)
                .bind(input.featured)
                .bind(Json(input.features.clone().unwrap_or_default()))
                .bind(Json(input.challenges.clone().unwrap_or_default()))
                .bind(Json(input.learnings.clone().unwrap_or_default()))
                .bind(input.display_order)
                .fetch_one(&mut *tx)
                .await?;
            if let Some(ids) = &input.technology_ids {
                links::replace(&mut tx, &PORTFOLIO_PROJECT_TECHNOLOGIES, project.id, ids).await?;
            }
            tx.commit().await?;
            Ok::<_, MutationError>(project)
        }
        .await;
        result.inspect_err(|e| {
            if let MutationError::Store(err) = e {
                tracing::error!(
                    entity = PORTFOLIO_PROJECTS.entity,
                    action = "create",
                    error = %err,
                    "Store operation failed"
                );
            }
        })
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PortfolioProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_projects WHERE id = $1");
        sqlx::query_as::<_, PortfolioProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_view(
        pool: &PgPool,
        id: DbId,
        files_url: &str,
    ) -> Result<Option<PortfolioProjectView>, sqlx::Error> {
        let query = format!("{} WHERE p.id = $1", select_with_image());
        let Some(row) = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let mut views = Self::assemble(pool, vec![row], files_url).await?;
        Ok(views.pop())
    }

    /// All projects by `display_order`, newest first within the same order.
    pub async fn list_views(
        pool: &PgPool,
        files_url: &str,
    ) -> Result<Vec<PortfolioProjectView>, sqlx::Error> {
        let query = format!(
            "{} ORDER BY p.display_order, p.created_at DESC",
            select_with_image()
        );
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(pool)
            .await?;
        Self::assemble(pool, rows, files_url).await
    }

    /// Apply a partial update; `technology_ids`, when present, replaces the
    /// link set in the same transaction.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePortfolioProject,
    ) -> Result<(), MutationError> {
        mutation::update_with_links(
            pool,
            &PORTFOLIO_PROJECTS,
            id,
            input.changeset(),
            &[(
                &PORTFOLIO_PROJECT_TECHNOLOGIES,
                input.technology_ids.as_deref(),
            )],
        )
        .await
    }

    pub async fn set_technologies(
        pool: &PgPool,
        id: DbId,
        skill_ids: &[DbId],
    ) -> Result<usize, MutationError> {
        links::set_links(pool, &PORTFOLIO_PROJECT_TECHNOLOGIES, id, skill_ids).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), MutationError> {
        mutation::delete(pool, &PORTFOLIO_PROJECTS, id).await
    }

    async fn assemble(
        pool: &PgPool,
        rows: Vec<ProjectRow>,
        files_url: &str,
    ) -> Result<Vec<PortfolioProjectView>, sqlx::Error> {
        let ids: Vec<DbId> = rows.iter().map(|r| r.project.id).collect();
        let mut technologies: HashMap<DbId, Vec<Skill>> = HashMap::new();
        if !ids.is_empty() {
            let query = "SELECT t.project_id, s.id, s.skill, s.skill_type_id, s.is_visible, \
                                s.display_order, s.created_at, s.updated_at \
                         FROM portfolio_project_technologies t \
                         JOIN skills s ON s.id = t.skill_id \
                         WHERE t.project_id = ANY($1) \
                         ORDER BY s.display_order, s.skill";
            let links = sqlx::query_as::<_, TechnologyRow>(query)
                .bind(&ids)
                .fetch_all(pool)
                .await?;
            for link in links {
                technologies.entry(link.project_id).or_default().push(link.skill);
            }
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let image_url = match (row.image_file_type, row.image_storage_key) {
                    (Some(file_type), Some(key)) => Some(file_url(files_url, &file_type, &key)),
                    _ => None,
                };
                PortfolioProjectView {
                    technologies: technologies.remove(&row.project.id).unwrap_or_default(),
                    image_url,
                    project: row.project,
                }
            })
            .collect())
    }
}

fn select_with_image() -> String {
    let cols = COLUMNS
        .split(", ")
        .map(|c| format!("p.{c}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "SELECT {cols}, f.file_type AS image_file_type, f.storage_key AS image_storage_key \
         FROM portfolio_projects p \
         LEFT JOIN storage_files f ON f.id = p.image_file_id"
    )
}
