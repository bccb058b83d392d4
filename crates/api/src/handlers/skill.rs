//! Handlers for the `/portfolio/skills` resource.
//!
//! Skills are returned with their skill type embedded.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::skill::{CreateSkill, SkillWithType, UpdateSkill};
use folio_db::repositories::SkillRepo;
use folio_db::schema::{SKILLS, SKILL_TYPES};

use super::{ensure_reference, ensure_target};
use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::permission::{Require, SkillsDelete, SkillsEdit, SkillsRead};
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// POST /api/v1/portfolio/skills
pub async fn create(
    _: Require<SkillsEdit>,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateSkill>,
) -> AppResult<Response> {
    ensure_reference(&state.pool, &SKILL_TYPES, "skill_type_id", Some(input.skill_type_id))
        .await?;
    let skill = SkillRepo::create(&state.pool, &input).await?;
    tracing::info!(id = skill.id, skill = %skill.skill, "Created skill");
    let view = find(&state, skill.id).await?;
    Ok(created(format!("/api/v1/portfolio/skills/{}", skill.id), view))
}

/// GET /api/v1/portfolio/skills
pub async fn list(
    _: Require<SkillsRead>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SkillWithType>>>> {
    let skills = SkillRepo::list_with_types(&state.pool).await?;
    Ok(Json(DataResponse { data: skills }))
}

/// GET /api/v1/portfolio/skills/{id}
pub async fn get_by_id(
    _: Require<SkillsRead>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SkillWithType>>> {
    let skill = find(&state, id).await?;
    Ok(Json(DataResponse { data: skill }))
}

/// PUT /api/v1/portfolio/skills/{id}
pub async fn update(
    _: Require<SkillsEdit>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateSkill>,
) -> AppResult<Json<DataResponse<SkillWithType>>> {
    ensure_target(&state.pool, &SKILLS, id).await?;
    ensure_reference(&state.pool, &SKILL_TYPES, "skill_type_id", input.skill_type_id).await?;
    SkillRepo::update(&state.pool, id, &input).await?;
    let skill = find(&state, id).await?;
    Ok(Json(DataResponse { data: skill }))
}

/// DELETE /api/v1/portfolio/skills/{id}
pub async fn delete(
    _: Require<SkillsDelete>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    SkillRepo::delete(&state.pool, id).await?;
    tracing::info!(id, "Deleted skill");
    Ok(StatusCode::NO_CONTENT)
}

async fn find(state: &AppState, id: DbId) -> AppResult<SkillWithType> {
    SkillRepo::find_with_type(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))
}
