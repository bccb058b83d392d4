pub mod files;
pub mod health;
pub mod miniatures;
pub mod portfolio;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /portfolio/profile                               get, upsert
/// /portfolio/profile/{avatar,resume}               set, clear
/// /portfolio/experience[/{id}]                     CRUD
/// /portfolio/certifications[/{id}]                 CRUD
/// /portfolio/skills[/{id}]                         CRUD
/// /portfolio/skill-types[/{id}]                    CRUD
/// /portfolio/projects[/{id}]                       CRUD
/// /portfolio/projects/{id}/technologies            replace link set
///
/// /miniatures/themes[/{id}]                        CRUD
/// /miniatures/projects[/{id}]                      CRUD
/// /miniatures/projects/{id}/images                 list, append
/// /miniatures/projects/{id}/{techniques,paints}    replace link set
/// /miniatures/techniques                           list
/// /miniatures/paints[/{id}]                        CRUD
///
/// /files/{id}                                      remove attachment
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/portfolio", portfolio::router())
        .nest("/miniatures", miniatures::router())
        .nest("/files", files::router())
}
