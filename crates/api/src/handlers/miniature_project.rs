//! Handlers for the `/miniatures/projects` resource and its sub-collections.
//!
//! Projects are returned with their ordered images, techniques and paints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::miniature_image::{AttachImage, MiniatureImage};
use folio_db::models::miniature_project::{
    CreateMiniatureProject, MiniatureProjectView, UpdateMiniatureProject,
};
use folio_db::models::SetLinkIds;
use folio_db::repositories::MiniatureProjectRepo;
use folio_db::schema::{
    MINIATURE_PROJECTS, MINIATURE_PROJECT_PAINTS, MINIATURE_PROJECT_TECHNIQUES, MINIATURE_THEMES,
    STORAGE_FILES,
};

use super::{ensure_children, ensure_reference, ensure_target};
use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::permission::{MiniaturesDelete, MiniaturesEdit, MiniaturesRead, Require};
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// POST /api/v1/miniatures/projects
pub async fn create(
    _: Require<MiniaturesEdit>,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateMiniatureProject>,
) -> AppResult<Response> {
    ensure_reference(&state.pool, &MINIATURE_THEMES, "theme_id", input.theme_id).await?;
    let project = MiniatureProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = project.id, title = %project.title, "Created miniature project");
    let view = find(&state, project.id).await?;
    Ok(created(
        format!("/api/v1/miniatures/projects/{}", project.id),
        view,
    ))
}

/// GET /api/v1/miniatures/projects
pub async fn list(
    _: Require<MiniaturesRead>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MiniatureProjectView>>>> {
    let projects = MiniatureProjectRepo::list_views(&state.pool, state.files_url()).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/miniatures/projects/{id}
pub async fn get_by_id(
    _: Require<MiniaturesRead>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MiniatureProjectView>>> {
    let project = find(&state, id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/miniatures/projects/{id}
pub async fn update(
    _: Require<MiniaturesEdit>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateMiniatureProject>,
) -> AppResult<Json<DataResponse<MiniatureProjectView>>> {
    ensure_target(&state.pool, &MINIATURE_PROJECTS, id).await?;
    ensure_reference(&state.pool, &MINIATURE_THEMES, "theme_id", input.theme_id).await?;
    MiniatureProjectRepo::update(&state.pool, id, &input).await?;
    let project = find(&state, id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/miniatures/projects/{id}
///
/// Removes the project's images and links; stored files, techniques and
/// paints are kept.
pub async fn delete(
    _: Require<MiniaturesDelete>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    MiniatureProjectRepo::delete(&state.pool, id).await?;
    tracing::info!(id, "Deleted miniature project");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/miniatures/projects/{id}/images
pub async fn list_images(
    _: Require<MiniaturesRead>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<MiniatureImage>>>> {
    if MiniatureProjectRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }
    let images = MiniatureProjectRepo::list_images(&state.pool, id, state.files_url()).await?;
    Ok(Json(DataResponse { data: images }))
}

/// POST /api/v1/miniatures/projects/{id}/images
///
/// Appends after the project's current last image.
pub async fn add_image(
    _: Require<MiniaturesEdit>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<AttachImage>,
) -> AppResult<Response> {
    ensure_target(&state.pool, &MINIATURE_PROJECTS, id).await?;
    ensure_reference(&state.pool, &STORAGE_FILES, "file_id", Some(input.file_id)).await?;
    let image = MiniatureProjectRepo::add_image(
        &state.pool,
        id,
        input.file_id,
        input.caption.as_deref(),
        state.files_url(),
    )
    .await?;
    tracing::info!(
        project_id = id,
        image_id = image.id,
        display_order = image.display_order,
        "Attached image"
    );
    Ok(created(format!("/api/v1/files/{}", image.id), image))
}

/// PUT /api/v1/miniatures/projects/{id}/techniques
pub async fn set_techniques(
    _: Require<MiniaturesEdit>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<SetLinkIds>,
) -> AppResult<Json<DataResponse<MiniatureProjectView>>> {
    ensure_target(&state.pool, &MINIATURE_PROJECTS, id).await?;
    ensure_children(&state.pool, &MINIATURE_PROJECT_TECHNIQUES, "ids", &input.ids).await?;
    MiniatureProjectRepo::set_techniques(&state.pool, id, &input.ids).await?;
    tracing::info!(id, count = input.ids.len(), "Replaced project techniques");
    let project = find(&state, id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/miniatures/projects/{id}/paints
pub async fn set_paints(
    _: Require<MiniaturesEdit>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<SetLinkIds>,
) -> AppResult<Json<DataResponse<MiniatureProjectView>>> {
    ensure_target(&state.pool, &MINIATURE_PROJECTS, id).await?;
    ensure_children(&state.pool, &MINIATURE_PROJECT_PAINTS, "ids", &input.ids).await?;
    MiniatureProjectRepo::set_paints(&state.pool, id, &input.ids).await?;
    tracing::info!(id, count = input.ids.len(), "Replaced project paints");
    let project = find(&state, id).await?;
    Ok(Json(DataResponse { data: project }))
}

async fn find(state: &AppState, id: DbId) -> AppResult<MiniatureProjectView> {
    MiniatureProjectRepo::find_view(&state.pool, id, state.files_url())
        .await?
        .ok_or_else(|| not_found(id))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "MiniatureProject",
        id,
    })
}
