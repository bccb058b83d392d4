//! Repository for the `miniature_projects` table, its ordered images and
//! its technique and paint links.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::attachments;
use crate::error::MutationError;
use crate::links;
use crate::models::miniature_image::MiniatureImage;
use crate::models::miniature_project::{
    CreateMiniatureProject, MiniatureProject, MiniatureProjectView, UpdateMiniatureProject,
};
use crate::mutation::{self, Changeset};
use crate::repositories::{MiniaturePaintRepo, MiniatureTechniqueRepo};
use crate::schema::{
    MINIATURE_FILES, MINIATURE_IMAGES, MINIATURE_PROJECTS, MINIATURE_PROJECT_PAINTS,
    MINIATURE_PROJECT_TECHNIQUES,
};

const COLUMNS: &str = "id, title, description, theme_id, scale, manufacturer, time_spent_hours, \
                       difficulty, completed_date, display_order, created_at, updated_at";

pub struct MiniatureProjectRepo;

impl MiniatureProjectRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateMiniatureProject,
    ) -> Result<MiniatureProject, sqlx::Error> {
        let query = format!(
            "INSERT INTO miniature_projects
                (title, description, theme_id, scale, manufacturer, time_spent_hours,
                 difficulty, completed_date, display_order)
             VALUES ($1, COALESCE($2, ''), $3, $4, $5, $6, $7, $8, COALESCE($9, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MiniatureProject>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.theme_id)
            .bind(&input.scale)
            .bind(&input.manufacturer)
            .bind(input.time_spent_hours)
            .bind(&input.difficulty)
            .bind(input.completed_date)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MiniatureProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM miniature_projects WHERE id = $1");
        sqlx::query_as::<_, MiniatureProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<MiniatureProject>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM miniature_projects ORDER BY display_order, created_at DESC");
        sqlx::query_as::<_, MiniatureProject>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_for_theme(
        pool: &PgPool,
        theme_id: DbId,
    ) -> Result<Vec<MiniatureProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM miniature_projects WHERE theme_id = $1 \
             ORDER BY display_order, created_at DESC"
        );
        sqlx::query_as::<_, MiniatureProject>(&query)
            .bind(theme_id)
            .fetch_all(pool)
            .await
    }

    /// A project with its images, techniques and paints.
    pub async fn find_view(
        pool: &PgPool,
        id: DbId,
        files_url: &str,
    ) -> Result<Option<MiniatureProjectView>, sqlx::Error> {
        let Some(project) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let mut views = Self::assemble(pool, vec![project], files_url).await?;
        Ok(views.pop())
    }

    /// Every project as a view. Images, techniques and paints are fetched
    /// with one query each, however many projects there are.
    pub async fn list_views(
        pool: &PgPool,
        files_url: &str,
    ) -> Result<Vec<MiniatureProjectView>, sqlx::Error> {
        let projects = Self::list(pool).await?;
        Self::assemble(pool, projects, files_url).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMiniatureProject,
    ) -> Result<(), MutationError> {
        mutation::update(pool, &MINIATURE_PROJECTS, id, input.changeset()).await
    }

    /// Delete a project. Images and links go with it; the stored files and
    /// the linked techniques and paints stay.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), MutationError> {
        mutation::delete(pool, &MINIATURE_PROJECTS, id).await
    }

    pub async fn set_techniques(
        pool: &PgPool,
        id: DbId,
        technique_ids: &[DbId],
    ) -> Result<usize, MutationError> {
        links::set_links(pool, &MINIATURE_PROJECT_TECHNIQUES, id, technique_ids).await
    }

    pub async fn set_paints(
        pool: &PgPool,
        id: DbId,
        paint_ids: &[DbId],
    ) -> Result<usize, MutationError> {
        links::set_links(pool, &MINIATURE_PROJECT_PAINTS, id, paint_ids).await
    }

    /// Append an image at the end of the project's collection.
    pub async fn add_image(
        pool: &PgPool,
        id: DbId,
        file_id: DbId,
        caption: Option<&str>,
        files_url: &str,
    ) -> Result<MiniatureImage, MutationError> {
        attachments::append(pool, &MINIATURE_IMAGES, id, file_id, caption, files_url).await
    }

    pub async fn list_images(
        pool: &PgPool,
        id: DbId,
        files_url: &str,
    ) -> Result<Vec<MiniatureImage>, sqlx::Error> {
        attachments::list(pool, &MINIATURE_IMAGES, id, files_url).await
    }

    /// Remove one attached image. The storage file itself is kept.
    pub async fn remove_image(pool: &PgPool, image_id: DbId) -> Result<(), MutationError> {
        mutation::delete(pool, &MINIATURE_FILES, image_id).await
    }

    async fn assemble(
        pool: &PgPool,
        projects: Vec<MiniatureProject>,
        files_url: &str,
    ) -> Result<Vec<MiniatureProjectView>, sqlx::Error> {
        let ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();
        let mut images =
            attachments::list_for_parents(pool, &MINIATURE_IMAGES, &ids, files_url).await?;
        let mut techniques = MiniatureTechniqueRepo::list_for_projects(pool, &ids).await?;
        let mut paints = MiniaturePaintRepo::list_for_projects(pool, &ids).await?;

        Ok(projects
            .into_iter()
            .map(|project| MiniatureProjectView {
                images: images.remove(&project.id).unwrap_or_default(),
                techniques: techniques.remove(&project.id).unwrap_or_default(),
                paints: paints.remove(&project.id).unwrap_or_default(),
                project,
            })
            .collect())
    }
}
