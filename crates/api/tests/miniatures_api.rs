//! HTTP-level integration tests for the `/miniatures` and `/files` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json, seed_file, FILES_URL};
use folio_db::repositories::StorageFileRepo;
use serde_json::json;
use sqlx::PgPool;

async fn create_project(pool: &PgPool, body: serde_json::Value) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/miniatures/projects",
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn create_paint(pool: &PgPool, name: &str, color_hex: &str) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/miniatures/paints",
        json!({"name": name, "manufacturer": "Citadel", "color_hex": color_hex}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn attach(pool: &PgPool, project_id: i64, file_id: i64) -> serde_json::Value {
    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/miniatures/projects/{project_id}/images"),
        json!({"file_id": file_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

fn ids_of(items: &serde_json::Value) -> Vec<i64> {
    let mut ids: Vec<i64> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    ids
}

// ---------------------------------------------------------------------------
// Themes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn theme_lists_its_projects_and_cover_url(pool: PgPool) {
    let cover = seed_file(&pool, "cover").await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/miniatures/themes",
        json!({"name": "Grimdark", "cover_image_file_id": cover.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()["location"].to_str().unwrap().to_string();
    let theme_id = body_json(response).await["data"]["id"].as_i64().unwrap();
    assert_eq!(location, format!("/api/v1/miniatures/themes/{theme_id}"));

    let project_id = create_project(&pool, json!({"title": "Knight", "theme_id": theme_id})).await;

    let response = get(common::build_test_app(pool), &location).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["cover_image_url"],
        format!("{FILES_URL}/files/image/cover")
    );
    assert_eq!(ids_of(&json["data"]["projects"]), vec![project_id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_theme_keeps_its_projects(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/miniatures/themes",
        json!({"name": "Grimdark"}),
    )
    .await;
    let theme_id = body_json(response).await["data"]["id"].as_i64().unwrap();
    let project_id = create_project(&pool, json!({"title": "Knight", "theme_id": theme_id})).await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/miniatures/themes/{theme_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/miniatures/projects/{project_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"]["theme_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_with_unknown_theme_returns_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/miniatures/projects",
        json!({"title": "Knight", "theme_id": 999999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("theme_id"));
}

// ---------------------------------------------------------------------------
// Paints and techniques
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_paint_colour_returns_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/miniatures/paints",
        json!({"name": "Mephiston Red", "manufacturer": "Citadel", "color_hex": "red"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn paint_defaults_type_and_rejects_duplicates(pool: PgPool) {
    let id = create_paint(&pool, "Mephiston Red", "#9A1115").await;

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/miniatures/paints/{id}"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["paint_type"], "base");

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/miniatures/paints",
        json!({"name": "Mephiston Red", "manufacturer": "Citadel", "color_hex": "#9A1115"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn techniques_are_seeded(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/miniatures/techniques").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let techniques = json["data"].as_array().unwrap();
    assert_eq!(techniques.len(), 10);
    assert!(techniques.iter().all(|t| t["slug"].is_string()));
}

// ---------------------------------------------------------------------------
// Project link replacement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_techniques_and_paints_replace_links(pool: PgPool) {
    let project_id = create_project(&pool, json!({"title": "Knight"})).await;
    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/miniatures/techniques",
    )
    .await;
    let techniques = ids_of(&body_json(response).await["data"]);
    let red = create_paint(&pool, "Mephiston Red", "#9A1115").await;
    let black = create_paint(&pool, "Abaddon Black", "#231F20").await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/miniatures/projects/{project_id}/techniques"),
        json!({"ids": [techniques[0], techniques[1]]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        ids_of(&json["data"]["techniques"]),
        vec![techniques[0], techniques[1]]
    );

    let uri = format!("/api/v1/miniatures/projects/{project_id}/paints");
    put_json(common::build_test_app(pool.clone()), &uri, json!({"ids": [red]})).await;
    let response = put_json(common::build_test_app(pool), &uri, json!({"ids": [black]})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids_of(&json["data"]["paints"]), vec![black]);
    assert_eq!(json["data"]["techniques"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_paint_ids_return_400(pool: PgPool) {
    let project_id = create_project(&pool, json!({"title": "Knight"})).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/miniatures/projects/{project_id}/paints"),
        json!({"ids": [424242]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("424242"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_positive_link_id_returns_400(pool: PgPool) {
    let project_id = create_project(&pool, json!({"title": "Knight"})).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/miniatures/projects/{project_id}/techniques"),
        json!({"ids": [0]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Ordered images
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn images_are_appended_in_order(pool: PgPool) {
    let project_id = create_project(&pool, json!({"title": "Knight"})).await;
    let front = seed_file(&pool, "front").await;
    let back = seed_file(&pool, "back").await;

    let first = attach(&pool, project_id, front.id).await;
    let second = attach(&pool, project_id, back.id).await;

    assert_eq!(first["display_order"], 0);
    assert_eq!(second["display_order"], 1);
    assert_eq!(first["url"], format!("{FILES_URL}/files/image/front"));

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/miniatures/projects/{project_id}/images"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let orders: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|image| image["display_order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![0, 1]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_image_returns_location_of_attachment(pool: PgPool) {
    let project_id = create_project(&pool, json!({"title": "Knight"})).await;
    let file = seed_file(&pool, "front").await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/miniatures/projects/{project_id}/images"),
        json!({"file_id": file.id, "caption": "Front"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()["location"].to_str().unwrap().to_string();
    let json = body_json(response).await;
    let image_id = json["data"]["id"].as_i64().unwrap();
    assert_eq!(location, format!("/api/v1/files/{image_id}"));
    assert_eq!(json["data"]["caption"], "Front");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn image_on_missing_project_returns_404(pool: PgPool) {
    let file = seed_file(&pool, "front").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/miniatures/projects/999999/images",
        json!({"file_id": file.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(
        common::build_test_app(pool),
        "/api/v1/miniatures/projects/999999/images",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn image_with_unknown_file_returns_400(pool: PgPool) {
    let project_id = create_project(&pool, json!({"title": "Knight"})).await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/miniatures/projects/{project_id}/images"),
        json!({"file_id": 999999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn removing_attachment_keeps_file_and_other_orders(pool: PgPool) {
    let project_id = create_project(&pool, json!({"title": "Knight"})).await;
    let front = seed_file(&pool, "front").await;
    let side = seed_file(&pool, "side").await;
    let back = seed_file(&pool, "back").await;

    attach(&pool, project_id, front.id).await;
    let middle = attach(&pool, project_id, side.id).await;
    attach(&pool, project_id, back.id).await;

    let uri = format!("/api/v1/files/{}", middle["id"].as_i64().unwrap());
    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert!(StorageFileRepo::find_by_id(&pool, side.id)
        .await
        .unwrap()
        .is_some());

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/miniatures/projects/{project_id}/images"),
    )
    .await;
    let json = body_json(response).await;
    let orders: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|image| image["display_order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![0, 2]);

    let next = attach(&pool, project_id, side.id).await;
    assert_eq!(next["display_order"], 3);
}

// ---------------------------------------------------------------------------
// Missing targets win over dangling references
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn mutations_on_missing_project_return_404_before_reference_checks(pool: PgPool) {
    let requests = [
        ("PUT", "/api/v1/miniatures/projects/999999", json!({"theme_id": 424242})),
        (
            "PUT",
            "/api/v1/miniatures/projects/999999/paints",
            json!({"ids": [424242]}),
        ),
        (
            "PUT",
            "/api/v1/miniatures/projects/999999/techniques",
            json!({"ids": [424242]}),
        ),
        (
            "POST",
            "/api/v1/miniatures/projects/999999/images",
            json!({"file_id": 424242}),
        ),
    ];

    for (method, uri, body) in requests {
        let app = common::build_test_app(pool.clone());
        let response = match method {
            "PUT" => put_json(app, uri, body).await,
            _ => post_json(app, uri, body).await,
        };
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["error"], "MiniatureProject with id 999999 not found");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_theme_with_unknown_cover_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/miniatures/themes/999999",
        json!({"cover_image_file_id": 424242}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dangling_reference_on_existing_project_still_returns_400(pool: PgPool) {
    let project_id = create_project(&pool, json!({"title": "Knight"})).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/miniatures/projects/{project_id}"),
        json!({"theme_id": 424242}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Project deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_project_keeps_files_and_paints(pool: PgPool) {
    let project_id = create_project(&pool, json!({"title": "Knight"})).await;
    let file = seed_file(&pool, "front").await;
    let paint = create_paint(&pool, "Mephiston Red", "#9A1115").await;
    attach(&pool, project_id, file.id).await;
    put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/miniatures/projects/{project_id}/paints"),
        json!({"ids": [paint]}),
    )
    .await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/miniatures/projects/{project_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/miniatures/projects/{project_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/miniatures/paints/{paint}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(StorageFileRepo::find_by_id(&pool, file.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_list_includes_images(pool: PgPool) {
    let project_id = create_project(&pool, json!({"title": "Knight"})).await;
    let file = seed_file(&pool, "front").await;
    attach(&pool, project_id, file.id).await;

    let response = get(common::build_test_app(pool), "/api/v1/miniatures/projects").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let projects = json["data"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["title"], "Knight");
    assert_eq!(projects[0]["images"].as_array().unwrap().len(), 1);
}
