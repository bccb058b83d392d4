//! Route definitions for the `/portfolio` resources.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{
    certification, portfolio_project, profile, skill, skill_type, work_experience,
};
use crate::state::AppState;

/// Routes mounted at `/portfolio`.
///
/// ```text
/// GET    /profile                      -> profile::get
/// PUT    /profile                      -> profile::upsert
/// PUT    /profile/avatar               -> profile::set_avatar
/// DELETE /profile/avatar               -> profile::clear_avatar
/// PUT    /profile/resume               -> profile::set_resume
/// DELETE /profile/resume               -> profile::clear_resume
///
/// GET    /experience                   -> list
/// POST   /experience                   -> create
/// GET    /experience/{id}              -> get_by_id
/// PUT    /experience/{id}              -> update
/// DELETE /experience/{id}              -> delete
///
/// (same five routes for /certifications, /skills, /skill-types, /projects)
///
/// PUT    /projects/{id}/technologies   -> set_technologies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile::get).put(profile::upsert))
        .route(
            "/profile/avatar",
            put(profile::set_avatar).delete(profile::clear_avatar),
        )
        .route(
            "/profile/resume",
            put(profile::set_resume).delete(profile::clear_resume),
        )
        .route(
            "/experience",
            get(work_experience::list).post(work_experience::create),
        )
        .route(
            "/experience/{id}",
            get(work_experience::get_by_id)
                .put(work_experience::update)
                .delete(work_experience::delete),
        )
        .route(
            "/certifications",
            get(certification::list).post(certification::create),
        )
        .route(
            "/certifications/{id}",
            get(certification::get_by_id)
                .put(certification::update)
                .delete(certification::delete),
        )
        .route("/skills", get(skill::list).post(skill::create))
        .route(
            "/skills/{id}",
            get(skill::get_by_id).put(skill::update).delete(skill::delete),
        )
        .route("/skill-types", get(skill_type::list).post(skill_type::create))
        .route(
            "/skill-types/{id}",
            get(skill_type::get_by_id)
                .put(skill_type::update)
                .delete(skill_type::delete),
        )
        .route(
            "/projects",
            get(portfolio_project::list).post(portfolio_project::create),
        )
        .route(
            "/projects/{id}",
            get(portfolio_project::get_by_id)
                .put(portfolio_project::update)
                .delete(portfolio_project::delete),
        )
        .route(
            "/projects/{id}/technologies",
            put(portfolio_project::set_technologies),
        )
}
