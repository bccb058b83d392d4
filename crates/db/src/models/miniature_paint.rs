//! Paint catalogue.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::mutation::{Changeset, FieldSet};

/// A row from the `miniature_paints` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MiniaturePaint {
    pub id: DbId,
    pub name: String,
    pub manufacturer: String,
    pub color_hex: String,
    pub paint_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMiniaturePaint {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub manufacturer: String,
    pub color_hex: String,
    /// Defaults to `base` if omitted.
    pub paint_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMiniaturePaint {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub manufacturer: Option<String>,
    pub color_hex: Option<String>,
    pub paint_type: Option<String>,
}

impl Changeset for UpdateMiniaturePaint {
    fn changeset(&self) -> FieldSet {
        FieldSet::new()
            .set_opt("name", self.name.clone())
            .set_opt("manufacturer", self.manufacturer.clone())
            .set_opt("color_hex", self.color_hex.clone())
            .set_opt("paint_type", self.paint_type.clone())
    }
}
