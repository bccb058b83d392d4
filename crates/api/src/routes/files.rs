//! Route definitions for the `/files` resource.

use axum::routing::delete;
use axum::Router;

use crate::handlers::files;
use crate::state::AppState;

/// Routes mounted at `/files`.
///
/// ```text
/// DELETE /{id}                         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(files::delete))
}
