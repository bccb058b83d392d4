//! Repository for the `miniature_themes` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::error::MutationError;
use crate::models::miniature_theme::{
    CreateMiniatureTheme, MiniatureTheme, MiniatureThemeView, UpdateMiniatureTheme,
};
use crate::mutation::{self, Changeset};
use crate::repositories::{MiniatureProjectRepo, StorageFileRepo};
use crate::schema::MINIATURE_THEMES;

const COLUMNS: &str =
    "id, name, description, cover_image_file_id, display_order, created_at, updated_at";

pub struct MiniatureThemeRepo;

impl MiniatureThemeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateMiniatureTheme,
    ) -> Result<MiniatureTheme, sqlx::Error> {
        let query = format!(
            "INSERT INTO miniature_themes (name, description, cover_image_file_id, display_order)
             VALUES ($1, COALESCE($2, ''), $3, COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MiniatureTheme>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.cover_image_file_id)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MiniatureTheme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM miniature_themes WHERE id = $1");
        sqlx::query_as::<_, MiniatureTheme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<MiniatureTheme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM miniature_themes ORDER BY display_order, name");
        sqlx::query_as::<_, MiniatureTheme>(&query)
            .fetch_all(pool)
            .await
    }

    /// A theme with its projects and resolved cover image.
    pub async fn find_view(
        pool: &PgPool,
        id: DbId,
        files_url: &str,
    ) -> Result<Option<MiniatureThemeView>, sqlx::Error> {
        let Some(theme) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        Ok(Some(Self::view(pool, theme, files_url).await?))
    }

    pub async fn list_views(
        pool: &PgPool,
        files_url: &str,
    ) -> Result<Vec<MiniatureThemeView>, sqlx::Error> {
        let mut views = Vec::new();
        for theme in Self::list(pool).await? {
            views.push(Self::view(pool, theme, files_url).await?);
        }
        Ok(views)
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMiniatureTheme,
    ) -> Result<(), MutationError> {
        mutation::update(pool, &MINIATURE_THEMES, id, input.changeset()).await
    }

    /// Delete a theme. Its projects survive with `theme_id` cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), MutationError> {
        mutation::delete(pool, &MINIATURE_THEMES, id).await
    }

    async fn view(
        pool: &PgPool,
        theme: MiniatureTheme,
        files_url: &str,
    ) -> Result<MiniatureThemeView, sqlx::Error> {
        let cover_image_url =
            StorageFileRepo::url_for(pool, theme.cover_image_file_id, files_url).await?;
        let projects = MiniatureProjectRepo::list_for_theme(pool, theme.id).await?;
        Ok(MiniatureThemeView {
            theme,
            cover_image_url,
            projects,
        })
    }
}
