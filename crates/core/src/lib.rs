//! Pure domain logic for the portfolio content backend.
//!
//! Nothing in this crate touches the database. The `folio-db` crate and the
//! HTTP layer build on these types.

pub mod error;
pub mod files;
pub mod permissions;
pub mod types;
pub mod validation;
