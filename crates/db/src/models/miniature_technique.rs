use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A seeded painting technique. Read-only through the API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MiniatureTechnique {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
