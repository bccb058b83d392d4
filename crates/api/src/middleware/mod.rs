//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the caller from a JWT Bearer token.
//! - [`permission::Require`] -- Requires a resource/level scope, e.g.
//!   `Require<MiniaturesEdit>`.

pub mod auth;
pub mod permission;
