//! Handlers for the `/portfolio/skill-types` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::skill_type::{CreateSkillType, SkillType, UpdateSkillType};
use folio_db::repositories::SkillTypeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::permission::{Require, SkillsDelete, SkillsEdit, SkillsRead};
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// POST /api/v1/portfolio/skill-types
pub async fn create(
    _: Require<SkillsEdit>,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateSkillType>,
) -> AppResult<Response> {
    let skill_type = SkillTypeRepo::create(&state.pool, &input).await?;
    tracing::info!(id = skill_type.id, name = %skill_type.name, "Created skill type");
    Ok(created(
        format!("/api/v1/portfolio/skill-types/{}", skill_type.id),
        skill_type,
    ))
}

/// GET /api/v1/portfolio/skill-types
pub async fn list(
    _: Require<SkillsRead>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SkillType>>>> {
    let types = SkillTypeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: types }))
}

/// GET /api/v1/portfolio/skill-types/{id}
pub async fn get_by_id(
    _: Require<SkillsRead>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SkillType>>> {
    let skill_type = find(&state, id).await?;
    Ok(Json(DataResponse { data: skill_type }))
}

/// PUT /api/v1/portfolio/skill-types/{id}
pub async fn update(
    _: Require<SkillsEdit>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateSkillType>,
) -> AppResult<Json<DataResponse<SkillType>>> {
    SkillTypeRepo::update(&state.pool, id, &input).await?;
    let skill_type = find(&state, id).await?;
    Ok(Json(DataResponse { data: skill_type }))
}

/// DELETE /api/v1/portfolio/skill-types/{id}
///
/// Refused with 409 while skills still belong to the type.
pub async fn delete(
    _: Require<SkillsDelete>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let skills = SkillTypeRepo::count_skills(&state.pool, id).await?;
    if skills > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Skill type {id} still has {skills} skill(s)"
        ))));
    }
    SkillTypeRepo::delete(&state.pool, id).await?;
    tracing::info!(id, "Deleted skill type");
    Ok(StatusCode::NO_CONTENT)
}

async fn find(state: &AppState, id: DbId) -> AppResult<SkillType> {
    SkillTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SkillType",
            id,
        }))
}
