//! Repository for the `certifications` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::error::MutationError;
use crate::models::certification::{Certification, CreateCertification, UpdateCertification};
use crate::mutation::{self, Changeset};
use crate::schema::CERTIFICATIONS;

const COLUMNS: &str = "id, name, issuer, issue_date, expiry_date, credential_id, credential_url, \
                       display_order, created_at, updated_at";

pub struct CertificationRepo;

impl CertificationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCertification,
    ) -> Result<Certification, sqlx::Error> {
        let query = format!(
            "INSERT INTO certifications
                (name, issuer, issue_date, expiry_date, credential_id, credential_url, display_order)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certification>(&query)
            .bind(&input.name)
            .bind(&input.issuer)
            .bind(input.issue_date)
            .bind(input.expiry_date)
            .bind(&input.credential_id)
            .bind(&input.credential_url)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Certification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM certifications WHERE id = $1");
        sqlx::query_as::<_, Certification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Certification>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM certifications ORDER BY display_order, issue_date DESC");
        sqlx::query_as::<_, Certification>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCertification,
    ) -> Result<(), MutationError> {
        mutation::update(pool, &CERTIFICATIONS, id, input.changeset()).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), MutationError> {
        mutation::delete(pool, &CERTIFICATIONS, id).await
    }
}
