//! Handlers for the `/portfolio/projects` resource.
//!
//! Projects are returned with their cover image URL and linked
//! technologies (skills) resolved.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::validate_date_range;
use folio_db::models::SetLinkIds;
use folio_db::models::portfolio_project::{
    CreatePortfolioProject, PortfolioProjectView, UpdatePortfolioProject,
};
use folio_db::repositories::PortfolioProjectRepo;
use folio_db::schema::{PORTFOLIO_PROJECTS, PORTFOLIO_PROJECT_TECHNOLOGIES, STORAGE_FILES};

use super::{ensure_children, ensure_reference, ensure_target};
use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::permission::{ProjectsDelete, ProjectsEdit, ProjectsRead, Require};
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// POST /api/v1/portfolio/projects
pub async fn create(
    _: Require<ProjectsEdit>,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreatePortfolioProject>,
) -> AppResult<Response> {
    validate_date_range(input.start_date, input.end_date, "start_date", "end_date")?;
    ensure_reference(&state.pool, &STORAGE_FILES, "image_file_id", input.image_file_id).await?;
    if let Some(ids) = &input.technology_ids {
        ensure_children(&state.pool, &PORTFOLIO_PROJECT_TECHNOLOGIES, "technology_ids", ids)
            .await?;
    }

    let project = PortfolioProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = project.id, title = %project.title, "Created portfolio project");
    let view = find(&state, project.id).await?;
    Ok(created(
        format!("/api/v1/portfolio/projects/{}", project.id),
        view,
    ))
}

/// GET /api/v1/portfolio/projects
pub async fn list(
    _: Require<ProjectsRead>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PortfolioProjectView>>>> {
    let projects = PortfolioProjectRepo::list_views(&state.pool, state.files_url()).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/portfolio/projects/{id}
pub async fn get_by_id(
    _: Require<ProjectsRead>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PortfolioProjectView>>> {
    let project = find(&state, id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/portfolio/projects/{id}
///
/// A `technology_ids` field replaces the technology set atomically with the
/// column update.
pub async fn update(
    _: Require<ProjectsEdit>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdatePortfolioProject>,
) -> AppResult<Json<DataResponse<PortfolioProjectView>>> {
    validate_date_range(input.start_date, input.end_date, "start_date", "end_date")?;
    ensure_target(&state.pool, &PORTFOLIO_PROJECTS, id).await?;
    ensure_reference(&state.pool, &STORAGE_FILES, "image_file_id", input.image_file_id).await?;
    if let Some(ids) = &input.technology_ids {
        ensure_children(&state.pool, &PORTFOLIO_PROJECT_TECHNOLOGIES, "technology_ids", ids)
            .await?;
    }

    PortfolioProjectRepo::update(&state.pool, id, &input).await?;
    let project = find(&state, id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/portfolio/projects/{id}/technologies
///
/// Replaces the whole technology set; an empty list clears it.
pub async fn set_technologies(
    _: Require<ProjectsEdit>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<SetLinkIds>,
) -> AppResult<Json<DataResponse<PortfolioProjectView>>> {
    ensure_target(&state.pool, &PORTFOLIO_PROJECTS, id).await?;
    ensure_children(&state.pool, &PORTFOLIO_PROJECT_TECHNOLOGIES, "ids", &input.ids).await?;
    PortfolioProjectRepo::set_technologies(&state.pool, id, &input.ids).await?;
    tracing::info!(id, count = input.ids.len(), "Replaced project technologies");
    let project = find(&state, id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/portfolio/projects/{id}
pub async fn delete(
    _: Require<ProjectsDelete>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    PortfolioProjectRepo::delete(&state.pool, id).await?;
    tracing::info!(id, "Deleted portfolio project");
    Ok(StatusCode::NO_CONTENT)
}

async fn find(state: &AppState, id: DbId) -> AppResult<PortfolioProjectView> {
    PortfolioProjectRepo::find_view(&state.pool, id, state.files_url())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PortfolioProject",
            id,
        }))
}
