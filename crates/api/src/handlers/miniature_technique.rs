//! Handlers for the read-only `/miniatures/techniques` reference list.

use axum::extract::State;
use axum::Json;
use folio_db::models::miniature_technique::MiniatureTechnique;
use folio_db::repositories::MiniatureTechniqueRepo;

use crate::error::AppResult;
use crate::middleware::permission::{MiniaturesRead, Require};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/miniatures/techniques
pub async fn list(
    _: Require<MiniaturesRead>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MiniatureTechnique>>>> {
    let techniques = MiniatureTechniqueRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: techniques }))
}
