//! Safe partial updates and deletes for any declared [`Table`].
//!
//! An update is always two steps: a count-only existence check, then a
//! column-scoped `UPDATE` of exactly the fields the caller supplied. A row
//! that exists but whose values already match is a success, never a
//! `NotFound`. There is no full-row overwrite path, so an omitted optional
//! field can never wipe a stored value.
//!
//! Deletes rely on the foreign-key rules declared in [`crate::schema`];
//! nothing here fans out to dependent tables.

use folio_core::types::{Date, DbId};
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use crate::error::{traced, MutationError};
use crate::links;
use crate::schema::{LinkTable, Table, SYSTEM_COLUMNS};

// ---------------------------------------------------------------------------
// Field values
// ---------------------------------------------------------------------------

/// A typed column value. `None` writes SQL `NULL`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Int(Option<i32>),
    BigInt(Option<i64>),
    Double(Option<f64>),
    Bool(Option<bool>),
    Date(Option<Date>),
    Json(Option<serde_json::Value>),
}

impl FieldValue {
    fn push_bind(self, qb: &mut QueryBuilder<'_, Postgres>) {
        match self {
            FieldValue::Text(v) => {
                qb.push_bind(v);
            }
            FieldValue::Int(v) => {
                qb.push_bind(v);
            }
            FieldValue::BigInt(v) => {
                qb.push_bind(v);
            }
            FieldValue::Double(v) => {
                qb.push_bind(v);
            }
            FieldValue::Bool(v) => {
                qb.push_bind(v);
            }
            FieldValue::Date(v) => {
                qb.push_bind(v);
            }
            FieldValue::Json(v) => {
                qb.push_bind(v);
            }
        }
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(Some(v))
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(Some(v.to_string()))
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(Some(v))
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::BigInt(Some(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Double(Some(v))
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(Some(v))
    }
}

impl From<Date> for FieldValue {
    fn from(v: Date) -> Self {
        FieldValue::Date(Some(v))
    }
}

/// String lists are stored as JSONB arrays.
impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        FieldValue::Json(Some(serde_json::Value::from(v)))
    }
}

// ---------------------------------------------------------------------------
// Field sets
// ---------------------------------------------------------------------------

/// A sparse column -> value map for one partial update.
///
/// System columns (`id`, `created_at`, `updated_at`) are dropped when set,
/// whatever the caller supplied. Setting the same column twice keeps the
/// last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    fields: Vec<(&'static str, FieldValue)>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `column` to `value`.
    pub fn set(mut self, column: &'static str, value: impl Into<FieldValue>) -> Self {
        if SYSTEM_COLUMNS.contains(&column) {
            tracing::debug!(column, "Ignoring system column in field set");
            return self;
        }
        let value = value.into();
        match self.fields.iter_mut().find(|(c, _)| *c == column) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((column, value)),
        }
        self
    }

    /// Set `column` only when the caller supplied a value.
    pub fn set_opt<V: Into<FieldValue>>(self, column: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(c, _)| *c)
    }

    /// Keep only the columns `table` accepts, warning about the rest.
    fn restrict_to(self, table: &Table) -> Self {
        let fields = self
            .fields
            .into_iter()
            .filter(|(column, _)| {
                let ok = table.accepts(column);
                if !ok {
                    tracing::warn!(table = table.name, column, "Skipping undeclared column");
                }
                ok
            })
            .collect();
        Self { fields }
    }
}

/// Conversion of a sparse update payload into the fields it populates.
pub trait Changeset {
    fn changeset(&self) -> FieldSet;
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Apply a partial update to the row `id` of `table`.
///
/// Fails with [`MutationError::NotFound`] when the row does not exist. An
/// empty field set on an existing row succeeds without touching the row.
pub async fn update(
    pool: &PgPool,
    table: &Table,
    id: DbId,
    fields: FieldSet,
) -> Result<(), MutationError> {
    let result = async {
        let mut conn = pool.acquire().await?;
        ensure_exists(&mut conn, table, id).await?;
        apply(&mut conn, table, id, fields).await?;
        Ok::<_, MutationError>(())
    }
    .await;
    traced(result, table.entity, id, "update")
}

/// Like [`update`], additionally replacing every link set given as `Some`.
///
/// The existence check, the column update and all link replacements run in
/// one transaction through the same primitive as [`links::set_links`]; any
/// failure leaves the row and all its link sets as they were.
pub async fn update_with_links(
    pool: &PgPool,
    table: &Table,
    id: DbId,
    fields: FieldSet,
    link_sets: &[(&LinkTable, Option<&[DbId]>)],
) -> Result<(), MutationError> {
    let result = async {
        let mut tx = pool.begin().await?;
        ensure_exists(&mut tx, table, id).await?;
        apply(&mut tx, table, id, fields).await?;
        for (link, child_ids) in link_sets {
            if let Some(child_ids) = child_ids {
                links::replace(&mut tx, link, id, child_ids).await?;
            }
        }
        tx.commit().await?;
        Ok::<_, MutationError>(())
    }
    .await;
    traced(result, table.entity, id, "update")
}

/// Delete the row `id` of `table`.
///
/// Zero rows affected is [`MutationError::NotFound`]. Dependent rows follow
/// the declared `ON DELETE` rules; a `Restrict` dependent surfaces as a
/// store error.
pub async fn delete(pool: &PgPool, table: &Table, id: DbId) -> Result<(), MutationError> {
    let result = async {
        let query = format!("DELETE FROM {} WHERE id = $1", table.name);
        let done = sqlx::query(&query).bind(id).execute(pool).await?;
        if done.rows_affected() == 0 {
            return Err(MutationError::not_found(table.entity, id));
        }
        Ok::<_, MutationError>(())
    }
    .await;
    traced(result, table.entity, id, "delete")
}

/// Whether the row `id` exists in `table`.
pub async fn exists(pool: &PgPool, table: &Table, id: DbId) -> Result<bool, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    Ok(count(&mut conn, table.name, id).await? > 0)
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

async fn count(conn: &mut PgConnection, table: &str, id: DbId) -> Result<i64, sqlx::Error> {
    let query = format!("SELECT COUNT(*) FROM {table} WHERE id = $1");
    sqlx::query_scalar(&query).bind(id).fetch_one(conn).await
}

async fn ensure_exists(
    conn: &mut PgConnection,
    table: &Table,
    id: DbId,
) -> Result<(), MutationError> {
    if count(conn, table.name, id).await? == 0 {
        return Err(MutationError::not_found(table.entity, id));
    }
    Ok(())
}

/// Issue the column-scoped `UPDATE`. Zero rows affected is not an error.
async fn apply(
    conn: &mut PgConnection,
    table: &Table,
    id: DbId,
    fields: FieldSet,
) -> Result<(), sqlx::Error> {
    let fields = fields.restrict_to(table);
    if fields.is_empty() {
        return Ok(());
    }

    let mut qb = QueryBuilder::<Postgres>::new(format!("UPDATE {} SET ", table.name));
    for (i, (column, value)) in fields.fields.into_iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        qb.push(column).push(" = ");
        value.push_bind(&mut qb);
    }
    qb.push(" WHERE id = ").push_bind(id);

    qb.build().execute(conn).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{MINIATURE_PROJECTS, WORK_EXPERIENCE};

    #[test]
    fn system_columns_are_dropped() {
        let fields = FieldSet::new()
            .set("id", 42_i64)
            .set("created_at", "2020-01-01T00:00:00Z")
            .set("updated_at", "2020-01-01T00:00:00Z")
            .set("title", "Ork Boyz");
        assert_eq!(fields.columns().collect::<Vec<_>>(), vec!["title"]);
    }

    #[test]
    fn last_write_wins() {
        let fields = FieldSet::new().set("title", "a").set("title", "b");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.fields[0].1, FieldValue::Text(Some("b".into())));
    }

    #[test]
    fn set_opt_skips_absent_values() {
        let fields = FieldSet::new()
            .set_opt("title", Some("Knight"))
            .set_opt::<String>("description", None)
            .set_opt("display_order", Some(3));
        assert_eq!(
            fields.columns().collect::<Vec<_>>(),
            vec!["title", "display_order"]
        );
    }

    #[test]
    fn restrict_drops_columns_of_other_tables() {
        let fields = FieldSet::new()
            .set("company", "Acme")
            .set("scale", "28mm")
            .restrict_to(&WORK_EXPERIENCE);
        assert_eq!(fields.columns().collect::<Vec<_>>(), vec!["company"]);

        let fields = FieldSet::new()
            .set("scale", "28mm")
            .set("time_spent_hours", 12.5)
            .restrict_to(&MINIATURE_PROJECTS);
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn string_lists_become_json_arrays() {
        let value = FieldValue::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            value,
            FieldValue::Json(Some(serde_json::json!(["a", "b"])))
        );
    }
}
