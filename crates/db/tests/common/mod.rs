//! Fixtures shared by the database integration tests.

#![allow(dead_code)]

use folio_core::types::{Date, DbId};
use folio_db::models::miniature_paint::CreateMiniaturePaint;
use folio_db::models::miniature_project::CreateMiniatureProject;
use folio_db::models::storage_file::CreateStorageFile;
use folio_db::models::work_experience::CreateWorkExperience;
use folio_db::repositories::{
    MiniaturePaintRepo, MiniatureProjectRepo, StorageFileRepo, WorkExperienceRepo,
};
use sqlx::PgPool;

pub const FILES_URL: &str = "http://files.test";

pub fn date(s: &str) -> Date {
    s.parse().unwrap()
}

pub async fn storage_file(pool: &PgPool, key: &str) -> DbId {
    StorageFileRepo::create(
        pool,
        &CreateStorageFile {
            storage_key: key.to_string(),
            bucket: "portfolio".to_string(),
            file_name: key.rsplit('/').next().unwrap_or(key).to_string(),
            file_size: 1024,
            mime_type: "image/webp".to_string(),
            file_type: "miniature-image".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn miniature_project(pool: &PgPool, title: &str) -> DbId {
    MiniatureProjectRepo::create(
        pool,
        &CreateMiniatureProject {
            title: title.to_string(),
            description: None,
            theme_id: None,
            scale: Some("28mm".to_string()),
            manufacturer: None,
            time_spent_hours: None,
            difficulty: None,
            completed_date: None,
            display_order: None,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn paint(pool: &PgPool, name: &str) -> DbId {
    MiniaturePaintRepo::create(
        pool,
        &CreateMiniaturePaint {
            name: name.to_string(),
            manufacturer: "Citadel".to_string(),
            color_hex: "#aa3322".to_string(),
            paint_type: None,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn work_experience(pool: &PgPool, company: &str, start: &str) -> DbId {
    WorkExperienceRepo::create(
        pool,
        &CreateWorkExperience {
            company: company.to_string(),
            position: "Engineer".to_string(),
            description: Some("Built things".to_string()),
            start_date: date(start),
            end_date: None,
            is_current: None,
            display_order: None,
        },
    )
    .await
    .unwrap()
    .id
}

/// Id of a seeded technique.
pub async fn technique(pool: &PgPool, slug: &str) -> DbId {
    sqlx::query_scalar("SELECT id FROM miniature_techniques WHERE slug = $1")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Run a `SELECT COUNT(*) ... WHERE x = $1` query.
pub async fn count(pool: &PgPool, sql: &str, id: DbId) -> i64 {
    sqlx::query_scalar(sql)
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}
