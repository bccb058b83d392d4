//! Handlers for the `/portfolio/experience` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::validate_date_range;
use folio_db::models::work_experience::{
    CreateWorkExperience, UpdateWorkExperience, WorkExperience,
};
use folio_db::repositories::WorkExperienceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::permission::{ExperienceDelete, ExperienceEdit, ExperienceRead, Require};
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// POST /api/v1/portfolio/experience
pub async fn create(
    _: Require<ExperienceEdit>,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateWorkExperience>,
) -> AppResult<Response> {
    validate_date_range(Some(input.start_date), input.end_date, "start_date", "end_date")?;
    let entry = WorkExperienceRepo::create(&state.pool, &input).await?;
    tracing::info!(id = entry.id, company = %entry.company, "Created work experience");
    Ok(created(
        format!("/api/v1/portfolio/experience/{}", entry.id),
        entry,
    ))
}

/// GET /api/v1/portfolio/experience
pub async fn list(
    _: Require<ExperienceRead>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<WorkExperience>>>> {
    let entries = WorkExperienceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/portfolio/experience/{id}
pub async fn get_by_id(
    _: Require<ExperienceRead>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<WorkExperience>>> {
    let entry = find(&state, id).await?;
    Ok(Json(DataResponse { data: entry }))
}

/// PUT /api/v1/portfolio/experience/{id}
pub async fn update(
    _: Require<ExperienceEdit>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateWorkExperience>,
) -> AppResult<Json<DataResponse<WorkExperience>>> {
    validate_date_range(input.start_date, input.end_date, "start_date", "end_date")?;
    WorkExperienceRepo::update(&state.pool, id, &input).await?;
    let entry = find(&state, id).await?;
    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/portfolio/experience/{id}
pub async fn delete(
    _: Require<ExperienceDelete>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    WorkExperienceRepo::delete(&state.pool, id).await?;
    tracing::info!(id, "Deleted work experience");
    Ok(StatusCode::NO_CONTENT)
}

async fn find(state: &AppState, id: DbId) -> AppResult<WorkExperience> {
    WorkExperienceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorkExperience",
            id,
        }))
}
