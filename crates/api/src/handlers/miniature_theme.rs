//! Handlers for the `/miniatures/themes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::miniature_theme::{
    CreateMiniatureTheme, MiniatureThemeView, UpdateMiniatureTheme,
};
use folio_db::repositories::MiniatureThemeRepo;
use folio_db::schema::{MINIATURE_THEMES, STORAGE_FILES};

use super::{ensure_reference, ensure_target};
use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::permission::{MiniaturesDelete, MiniaturesEdit, MiniaturesRead, Require};
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// POST /api/v1/miniatures/themes
pub async fn create(
    _: Require<MiniaturesEdit>,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateMiniatureTheme>,
) -> AppResult<Response> {
    ensure_reference(
        &state.pool,
        &STORAGE_FILES,
        "cover_image_file_id",
        input.cover_image_file_id,
    )
    .await?;
    let theme = MiniatureThemeRepo::create(&state.pool, &input).await?;
    tracing::info!(id = theme.id, name = %theme.name, "Created miniature theme");
    let view = find(&state, theme.id).await?;
    Ok(created(format!("/api/v1/miniatures/themes/{}", theme.id), view))
}

/// GET /api/v1/miniatures/themes
pub async fn list(
    _: Require<MiniaturesRead>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MiniatureThemeView>>>> {
    let themes = MiniatureThemeRepo::list_views(&state.pool, state.files_url()).await?;
    Ok(Json(DataResponse { data: themes }))
}

/// GET /api/v1/miniatures/themes/{id}
pub async fn get_by_id(
    _: Require<MiniaturesRead>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MiniatureThemeView>>> {
    let theme = find(&state, id).await?;
    Ok(Json(DataResponse { data: theme }))
}

/// PUT /api/v1/miniatures/themes/{id}
pub async fn update(
    _: Require<MiniaturesEdit>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateMiniatureTheme>,
) -> AppResult<Json<DataResponse<MiniatureThemeView>>> {
    ensure_target(&state.pool, &MINIATURE_THEMES, id).await?;
    ensure_reference(
        &state.pool,
        &STORAGE_FILES,
        "cover_image_file_id",
        input.cover_image_file_id,
    )
    .await?;
    MiniatureThemeRepo::update(&state.pool, id, &input).await?;
    let theme = find(&state, id).await?;
    Ok(Json(DataResponse { data: theme }))
}

/// DELETE /api/v1/miniatures/themes/{id}
///
/// Projects of the theme survive, detached.
pub async fn delete(
    _: Require<MiniaturesDelete>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    MiniatureThemeRepo::delete(&state.pool, id).await?;
    tracing::info!(id, "Deleted miniature theme");
    Ok(StatusCode::NO_CONTENT)
}

async fn find(state: &AppState, id: DbId) -> AppResult<MiniatureThemeView> {
    MiniatureThemeRepo::find_view(&state.pool, id, state.files_url())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MiniatureTheme",
            id,
        }))
}
