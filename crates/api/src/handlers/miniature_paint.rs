//! Handlers for the `/miniatures/paints` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::validate_hex_color;
use folio_db::models::miniature_paint::{
    CreateMiniaturePaint, MiniaturePaint, UpdateMiniaturePaint,
};
use folio_db::repositories::MiniaturePaintRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::permission::{MiniaturesDelete, MiniaturesEdit, MiniaturesRead, Require};
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// POST /api/v1/miniatures/paints
pub async fn create(
    _: Require<MiniaturesEdit>,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateMiniaturePaint>,
) -> AppResult<Response> {
    validate_hex_color(&input.color_hex)?;
    let paint = MiniaturePaintRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = paint.id,
        manufacturer = %paint.manufacturer,
        name = %paint.name,
        "Created paint"
    );
    Ok(created(format!("/api/v1/miniatures/paints/{}", paint.id), paint))
}

/// GET /api/v1/miniatures/paints
pub async fn list(
    _: Require<MiniaturesRead>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MiniaturePaint>>>> {
    let paints = MiniaturePaintRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: paints }))
}

/// GET /api/v1/miniatures/paints/{id}
pub async fn get_by_id(
    _: Require<MiniaturesRead>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MiniaturePaint>>> {
    let paint = find(&state, id).await?;
    Ok(Json(DataResponse { data: paint }))
}

/// PUT /api/v1/miniatures/paints/{id}
pub async fn update(
    _: Require<MiniaturesEdit>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateMiniaturePaint>,
) -> AppResult<Json<DataResponse<MiniaturePaint>>> {
    if let Some(color) = &input.color_hex {
        validate_hex_color(color)?;
    }
    MiniaturePaintRepo::update(&state.pool, id, &input).await?;
    let paint = find(&state, id).await?;
    Ok(Json(DataResponse { data: paint }))
}

/// DELETE /api/v1/miniatures/paints/{id}
///
/// Unlinks the paint from every project that used it.
pub async fn delete(
    _: Require<MiniaturesDelete>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    MiniaturePaintRepo::delete(&state.pool, id).await?;
    tracing::info!(id, "Deleted paint");
    Ok(StatusCode::NO_CONTENT)
}

async fn find(state: &AppState, id: DbId) -> AppResult<MiniaturePaint> {
    MiniaturePaintRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MiniaturePaint",
            id,
        }))
}
