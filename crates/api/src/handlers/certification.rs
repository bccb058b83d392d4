//! Handlers for the `/portfolio/certifications` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::validate_date_range;
use folio_db::models::certification::{
    Certification, CreateCertification, UpdateCertification,
};
use folio_db::repositories::CertificationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::permission::{
    CertificationsDelete, CertificationsEdit, CertificationsRead, Require,
};
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// POST /api/v1/portfolio/certifications
pub async fn create(
    _: Require<CertificationsEdit>,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateCertification>,
) -> AppResult<Response> {
    validate_date_range(
        Some(input.issue_date),
        input.expiry_date,
        "issue_date",
        "expiry_date",
    )?;
    let cert = CertificationRepo::create(&state.pool, &input).await?;
    tracing::info!(id = cert.id, name = %cert.name, "Created certification");
    Ok(created(
        format!("/api/v1/portfolio/certifications/{}", cert.id),
        cert,
    ))
}

/// GET /api/v1/portfolio/certifications
pub async fn list(
    _: Require<CertificationsRead>,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Certification>>>> {
    let certs = CertificationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: certs }))
}

/// GET /api/v1/portfolio/certifications/{id}
pub async fn get_by_id(
    _: Require<CertificationsRead>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Certification>>> {
    let cert = find(&state, id).await?;
    Ok(Json(DataResponse { data: cert }))
}

/// PUT /api/v1/portfolio/certifications/{id}
pub async fn update(
    _: Require<CertificationsEdit>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateCertification>,
) -> AppResult<Json<DataResponse<Certification>>> {
    validate_date_range(input.issue_date, input.expiry_date, "issue_date", "expiry_date")?;
    CertificationRepo::update(&state.pool, id, &input).await?;
    let cert = find(&state, id).await?;
    Ok(Json(DataResponse { data: cert }))
}

/// DELETE /api/v1/portfolio/certifications/{id}
pub async fn delete(
    _: Require<CertificationsDelete>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    CertificationRepo::delete(&state.pool, id).await?;
    tracing::info!(id, "Deleted certification");
    Ok(StatusCode::NO_CONTENT)
}

async fn find(state: &AppState, id: DbId) -> AppResult<Certification> {
    CertificationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Certification",
            id,
        }))
}
