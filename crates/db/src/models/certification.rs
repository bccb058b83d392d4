//! Professional certifications.

use folio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::mutation::{Changeset, FieldSet};

/// A row from the `certifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Certification {
    pub id: DbId,
    pub name: String,
    pub issuer: String,
    pub issue_date: Date,
    pub expiry_date: Option<Date>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a certification.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCertification {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub issuer: String,
    pub issue_date: Date,
    pub expiry_date: Option<Date>,
    pub credential_id: Option<String>,
    #[validate(url)]
    pub credential_url: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for updating a certification. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCertification {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub issuer: Option<String>,
    pub issue_date: Option<Date>,
    pub expiry_date: Option<Date>,
    pub credential_id: Option<String>,
    #[validate(url)]
    pub credential_url: Option<String>,
    pub display_order: Option<i32>,
}

impl Changeset for UpdateCertification {
    fn changeset(&self) -> FieldSet {
        FieldSet::new()
            .set_opt("name", self.name.clone())
            .set_opt("issuer", self.issuer.clone())
            .set_opt("issue_date", self.issue_date)
            .set_opt("expiry_date", self.expiry_date)
            .set_opt("credential_id", self.credential_id.clone())
            .set_opt("credential_url", self.credential_url.clone())
            .set_opt("display_order", self.display_order)
    }
}
