//! Ordered file attachments.
//!
//! New attachments go to the end of their parent's collection:
//! `display_order = MAX(display_order) + 1`, or `0` for an empty collection.
//! Orders are never renumbered, so removal leaves gaps.
//!
//! Concurrent appends to the same parent serialize on a row lock of the
//! parent, so every append observes its predecessors and orders stay
//! strictly increasing in commit order.

use std::collections::HashMap;

use folio_core::types::DbId;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::error::{traced, MutationError};
use crate::models::miniature_image::{MiniatureImage, MiniatureImageRow};
use crate::schema::AttachmentTable;

#[derive(Debug, FromRow)]
struct ParentedRow {
    parent_id: DbId,
    #[sqlx(flatten)]
    row: MiniatureImageRow,
}

/// Append `file_id` to the collection of `parent_id`.
///
/// Fails with [`MutationError::NotFound`] (inserting nothing) when the
/// parent does not exist. Returns the new attachment resolved against its
/// storage file.
pub async fn append(
    pool: &PgPool,
    table: &AttachmentTable,
    parent_id: DbId,
    file_id: DbId,
    caption: Option<&str>,
    files_url: &str,
) -> Result<MiniatureImage, MutationError> {
    let result = async {
        let mut tx = pool.begin().await?;
        lock_parent(&mut tx, table, parent_id).await?;

        let next_query = format!(
            "SELECT COALESCE(MAX(display_order), -1) + 1 FROM {} WHERE {} = $1",
            table.table, table.parent_column
        );
        let next_order: i32 = sqlx::query_scalar(&next_query)
            .bind(parent_id)
            .fetch_one(&mut *tx)
            .await?;

        let insert = format!(
            "INSERT INTO {} ({}, {}, caption, display_order) \
             VALUES ($1, $2, $3, $4) RETURNING id",
            table.table, table.parent_column, table.file_column
        );
        let id: DbId = sqlx::query_scalar(&insert)
            .bind(parent_id)
            .bind(file_id)
            .bind(caption)
            .bind(next_order)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            table = table.table,
            parent_id,
            id,
            display_order = next_order,
            "Appended attachment"
        );

        let row = find_row(pool, table, id)
            .await?
            .ok_or(MutationError::not_found("Attachment", id))?;
        Ok::<_, MutationError>(row.resolve(files_url))
    }
    .await;
    traced(result, table.parent_entity, parent_id, "append_attachment")
}

/// All attachments of `parent_id`, by `display_order` then insertion.
pub async fn list(
    pool: &PgPool,
    table: &AttachmentTable,
    parent_id: DbId,
    files_url: &str,
) -> Result<Vec<MiniatureImage>, sqlx::Error> {
    let query = format!(
        "{} WHERE a.{} = $1 ORDER BY a.display_order, a.id",
        select_joined(table),
        table.parent_column
    );
    let rows = sqlx::query_as::<_, MiniatureImageRow>(&query)
        .bind(parent_id)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(|r| r.resolve(files_url)).collect())
}

/// Attachments of every parent in `parent_ids`, keyed by parent, each list
/// in the same order as [`list`].
pub async fn list_for_parents(
    pool: &PgPool,
    table: &AttachmentTable,
    parent_ids: &[DbId],
    files_url: &str,
) -> Result<HashMap<DbId, Vec<MiniatureImage>>, sqlx::Error> {
    let mut by_parent: HashMap<DbId, Vec<MiniatureImage>> = HashMap::new();
    if parent_ids.is_empty() {
        return Ok(by_parent);
    }
    let query = format!(
        "SELECT a.{parent} AS parent_id, {columns} {from} \
         WHERE a.{parent} = ANY($1) ORDER BY a.display_order, a.id",
        parent = table.parent_column,
        columns = joined_columns(table),
        from = joined_from(table),
    );
    let rows = sqlx::query_as::<_, ParentedRow>(&query)
        .bind(parent_ids)
        .fetch_all(pool)
        .await?;
    for ParentedRow { parent_id, row } in rows {
        by_parent
            .entry(parent_id)
            .or_default()
            .push(row.resolve(files_url));
    }
    Ok(by_parent)
}

async fn find_row(
    pool: &PgPool,
    table: &AttachmentTable,
    id: DbId,
) -> Result<Option<MiniatureImageRow>, sqlx::Error> {
    let query = format!("{} WHERE a.id = $1", select_joined(table));
    sqlx::query_as::<_, MiniatureImageRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

fn select_joined(table: &AttachmentTable) -> String {
    format!("SELECT {} {}", joined_columns(table), joined_from(table))
}

fn joined_columns(table: &AttachmentTable) -> String {
    format!(
        "a.id, a.{file} AS file_id, a.caption, a.display_order, \
         f.file_name, f.mime_type, f.file_type, f.storage_key, a.created_at",
        file = table.file_column,
    )
}

fn joined_from(table: &AttachmentTable) -> String {
    format!(
        "FROM {table} a JOIN storage_files f ON f.id = a.{file}",
        table = table.table,
        file = table.file_column,
    )
}

async fn lock_parent(
    conn: &mut PgConnection,
    table: &AttachmentTable,
    parent_id: DbId,
) -> Result<(), MutationError> {
    let query = format!("SELECT id FROM {} WHERE id = $1 FOR UPDATE", table.parent_table);
    let parent: Option<DbId> = sqlx::query_scalar(&query)
        .bind(parent_id)
        .fetch_optional(conn)
        .await?;
    match parent {
        Some(_) => Ok(()),
        None => Err(MutationError::not_found(table.parent_entity, parent_id)),
    }
}
