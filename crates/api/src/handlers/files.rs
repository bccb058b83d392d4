//! Handlers for the `/files` resource: attachment rows, not stored binaries.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use folio_core::types::DbId;
use folio_db::repositories::MiniatureProjectRepo;

use crate::error::AppResult;
use crate::middleware::permission::{FilesDelete, Require};
use crate::state::AppState;

/// DELETE /api/v1/files/{id}
///
/// Detaches one image from its project. The storage file stays; the
/// remaining images keep their display orders.
pub async fn delete(
    _: Require<FilesDelete>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    MiniatureProjectRepo::remove_image(&state.pool, id).await?;
    tracing::info!(id, "Removed attachment");
    Ok(StatusCode::NO_CONTENT)
}
