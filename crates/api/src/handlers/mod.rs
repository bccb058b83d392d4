//! HTTP handlers, one module per resource.
//!
//! Every handler takes a [`crate::middleware::permission::Require`] first,
//! so authorization is settled before any store access.

pub mod certification;
pub mod files;
pub mod miniature_paint;
pub mod miniature_project;
pub mod miniature_technique;
pub mod miniature_theme;
pub mod portfolio_project;
pub mod profile;
pub mod skill;
pub mod skill_type;
pub mod work_experience;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::validate_ids;
use folio_db::links;
use folio_db::mutation;
use folio_db::schema::{LinkTable, Table};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Answer 404 unless the row a mutation targets exists.
///
/// Runs before the payload's references are checked, so a missing target
/// is never reported as a bad request.
pub(crate) async fn ensure_target(pool: &PgPool, table: &Table, id: DbId) -> AppResult<()> {
    if mutation::exists(pool, table, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: table.entity,
            id,
        }))
    }
}

/// Reject a payload whose optional foreign key points at no row of `table`.
///
/// Turns what would be an opaque foreign-key failure in the store into a
/// 400 naming the field.
pub(crate) async fn ensure_reference(
    pool: &PgPool,
    table: &Table,
    field: &str,
    id: Option<DbId>,
) -> AppResult<()> {
    let Some(id) = id else {
        return Ok(());
    };
    if mutation::exists(pool, table, id).await? {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "{field} references unknown {} {id}",
            table.entity
        )))
    }
}

/// Reject a link set containing ids with no row in the link's child table.
pub(crate) async fn ensure_children(
    pool: &PgPool,
    link: &LinkTable,
    field: &str,
    ids: &[DbId],
) -> AppResult<()> {
    validate_ids(ids, field)?;
    let missing = links::missing_children(pool, link, ids).await?;
    if missing.is_empty() {
        return Ok(());
    }
    let listed = missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(AppError::BadRequest(format!(
        "{field} contains unknown ids: {listed}"
    )))
}
