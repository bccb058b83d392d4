//! Route definitions for the `/miniatures` resources.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{miniature_paint, miniature_project, miniature_technique, miniature_theme};
use crate::state::AppState;

/// Routes mounted at `/miniatures`.
///
/// ```text
/// GET    /themes                       -> list
/// POST   /themes                       -> create
/// GET    /themes/{id}                  -> get_by_id
/// PUT    /themes/{id}                  -> update
/// DELETE /themes/{id}                  -> delete
///
/// GET    /projects                     -> list
/// POST   /projects                     -> create
/// GET    /projects/{id}                -> get_by_id
/// PUT    /projects/{id}                -> update
/// DELETE /projects/{id}                -> delete
/// GET    /projects/{id}/images         -> list_images
/// POST   /projects/{id}/images         -> add_image
/// PUT    /projects/{id}/techniques     -> set_techniques
/// PUT    /projects/{id}/paints         -> set_paints
///
/// GET    /techniques                   -> list
///
/// GET    /paints                       -> list
/// POST   /paints                       -> create
/// GET    /paints/{id}                  -> get_by_id
/// PUT    /paints/{id}                  -> update
/// DELETE /paints/{id}                  -> delete
/// ```
pub fn router() -> Router<AppState> {
    let project_routes = Router::new()
        .route(
            "/",
            get(miniature_project::list).post(miniature_project::create),
        )
        .route(
            "/{id}",
            get(miniature_project::get_by_id)
                .put(miniature_project::update)
                .delete(miniature_project::delete),
        )
        .route(
            "/{id}/images",
            get(miniature_project::list_images).post(miniature_project::add_image),
        )
        .route("/{id}/techniques", put(miniature_project::set_techniques))
        .route("/{id}/paints", put(miniature_project::set_paints));

    Router::new()
        .route(
            "/themes",
            get(miniature_theme::list).post(miniature_theme::create),
        )
        .route(
            "/themes/{id}",
            get(miniature_theme::get_by_id)
                .put(miniature_theme::update)
                .delete(miniature_theme::delete),
        )
        .nest("/projects", project_routes)
        .route("/techniques", get(miniature_technique::list))
        .route(
            "/paints",
            get(miniature_paint::list).post(miniature_paint::create),
        )
        .route(
            "/paints/{id}",
            get(miniature_paint::get_by_id)
                .put(miniature_paint::update)
                .delete(miniature_paint::delete),
        )
}
