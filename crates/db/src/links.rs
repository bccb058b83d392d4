//! Whole-set replacement of many-to-many links.
//!
//! After [`set_links`] the parent's link set is exactly the ids supplied: no
//! merge with what was there before. An empty slice clears the set.
//! Child ids are not checked against their reference table here; a missing
//! child surfaces as a foreign-key violation and rolls the whole call back.

use std::collections::HashSet;

use folio_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::error::{traced, MutationError};
use crate::schema::LinkTable;

/// Replace the link set of `parent_id` with `child_ids`.
///
/// Runs in its own transaction. Duplicate ids are collapsed, first
/// occurrence wins. Returns the number of links stored. Fails with
/// [`MutationError::NotFound`] when the parent row does not exist.
pub async fn set_links(
    pool: &PgPool,
    link: &LinkTable,
    parent_id: DbId,
    child_ids: &[DbId],
) -> Result<usize, MutationError> {
    let result = async {
        let mut tx = pool.begin().await?;
        let stored = replace(&mut tx, link, parent_id, child_ids).await?;
        tx.commit().await?;
        Ok::<_, MutationError>(stored)
    }
    .await;
    traced(result, link.parent_entity, parent_id, "set_links")
}

/// The current child ids of `parent_id`, ascending.
pub async fn child_ids(
    pool: &PgPool,
    link: &LinkTable,
    parent_id: DbId,
) -> Result<Vec<DbId>, sqlx::Error> {
    let query = format!(
        "SELECT {child} FROM {table} WHERE {parent} = $1 ORDER BY {child}",
        child = link.child_column,
        table = link.table,
        parent = link.parent_column,
    );
    sqlx::query_scalar(&query)
        .bind(parent_id)
        .fetch_all(pool)
        .await
}

/// The subset of `ids` with no row in the link's child table, in input order.
pub async fn missing_children(
    pool: &PgPool,
    link: &LinkTable,
    ids: &[DbId],
) -> Result<Vec<DbId>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let query = format!("SELECT id FROM {} WHERE id = ANY($1)", link.child_table);
    let found: HashSet<DbId> = sqlx::query_scalar::<_, DbId>(&query)
        .bind(ids)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();
    Ok(dedupe(ids)
        .into_iter()
        .filter(|id| !found.contains(id))
        .collect())
}

/// Delete-then-insert on an open transaction, returning the number of
/// links inserted after duplicates are dropped.
///
/// The parent row is locked first so concurrent replacements of the same
/// set serialize instead of interleaving their deletes and inserts.
pub(crate) async fn replace(
    conn: &mut PgConnection,
    link: &LinkTable,
    parent_id: DbId,
    child_ids: &[DbId],
) -> Result<usize, MutationError> {
    let lock = format!("SELECT id FROM {} WHERE id = $1 FOR UPDATE", link.parent_table);
    let parent: Option<DbId> = sqlx::query_scalar(&lock)
        .bind(parent_id)
        .fetch_optional(&mut *conn)
        .await?;
    if parent.is_none() {
        return Err(MutationError::not_found(link.parent_entity, parent_id));
    }

    let delete = format!(
        "DELETE FROM {} WHERE {} = $1",
        link.table, link.parent_column
    );
    sqlx::query(&delete)
        .bind(parent_id)
        .execute(&mut *conn)
        .await?;

    let insert = format!(
        "INSERT INTO {} ({}, {}) VALUES ($1, $2)",
        link.table, link.parent_column, link.child_column
    );
    let unique = dedupe(child_ids);
    for child_id in &unique {
        sqlx::query(&insert)
            .bind(parent_id)
            .bind(*child_id)
            .execute(&mut *conn)
            .await?;
    }

    tracing::debug!(
        table = link.table,
        parent_id,
        count = unique.len(),
        "Replaced link set"
    );
    Ok(unique.len())
}

/// Drop repeated ids, keeping the first occurrence of each.
pub fn dedupe(ids: &[DbId]) -> Vec<DbId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
