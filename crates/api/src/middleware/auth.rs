//! JWT-based authentication extractor for Axum handlers.

use std::collections::HashMap;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::error::CoreError;
use folio_core::permissions::{granted_level, Level, Resource};

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Caller extracted from a JWT Bearer token in the `Authorization` header.
///
/// Handlers normally take [`super::permission::Require`] instead, which
/// wraps this extractor and checks a scope.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Token subject.
    pub subject: String,
    /// Resource name to granted level, as carried by the token.
    pub scopes: HashMap<String, String>,
}

impl AuthUser {
    /// The level this caller holds on `resource`.
    pub fn level(&self, resource: Resource) -> Level {
        granted_level(&self.scopes, resource)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            subject: claims.sub,
            scopes: claims.scopes,
        })
    }
}
