//! Handlers for the singleton `/portfolio/profile` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_db::models::profile::{ProfileView, SetProfileFile, UpsertProfile};
use folio_db::repositories::profile_repo::ProfileFile;
use folio_db::repositories::ProfileRepo;
use folio_db::schema::{PROFILE, PROFILE_ID, STORAGE_FILES};

use super::{ensure_reference, ensure_target};
use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::permission::{ProfileDelete, ProfileEdit, ProfileRead, Require};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/portfolio/profile
pub async fn get(
    _: Require<ProfileRead>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ProfileView>>> {
    let profile = find(&state).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/portfolio/profile
///
/// Creates the profile on first call; afterwards only supplied fields change.
pub async fn upsert(
    _: Require<ProfileEdit>,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<UpsertProfile>,
) -> AppResult<Json<DataResponse<ProfileView>>> {
    ProfileRepo::upsert(&state.pool, &input).await?;
    tracing::info!("Upserted profile");
    let profile = find(&state).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/portfolio/profile/avatar
pub async fn set_avatar(
    _: Require<ProfileEdit>,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<SetProfileFile>,
) -> AppResult<Json<DataResponse<ProfileView>>> {
    set_file(&state, ProfileFile::Avatar, input).await
}

/// DELETE /api/v1/portfolio/profile/avatar
pub async fn clear_avatar(
    _: Require<ProfileDelete>,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    ProfileRepo::set_file(&state.pool, ProfileFile::Avatar, None).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/portfolio/profile/resume
pub async fn set_resume(
    _: Require<ProfileEdit>,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<SetProfileFile>,
) -> AppResult<Json<DataResponse<ProfileView>>> {
    set_file(&state, ProfileFile::Resume, input).await
}

/// DELETE /api/v1/portfolio/profile/resume
pub async fn clear_resume(
    _: Require<ProfileDelete>,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    ProfileRepo::set_file(&state.pool, ProfileFile::Resume, None).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn set_file(
    state: &AppState,
    which: ProfileFile,
    input: SetProfileFile,
) -> AppResult<Json<DataResponse<ProfileView>>> {
    ensure_target(&state.pool, &PROFILE, PROFILE_ID.into()).await?;
    ensure_reference(&state.pool, &STORAGE_FILES, "file_id", Some(input.file_id)).await?;
    ProfileRepo::set_file(&state.pool, which, Some(input.file_id)).await?;
    let profile = find(state).await?;
    Ok(Json(DataResponse { data: profile }))
}

async fn find(state: &AppState) -> AppResult<ProfileView> {
    ProfileRepo::find_view(&state.pool, state.files_url())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: PROFILE.entity,
            id: PROFILE_ID.into(),
        }))
}
