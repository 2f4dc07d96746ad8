//! HTTP-level integration tests for the entity CRUD endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Project CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"title": "Test Project"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Test Project");
    assert!(json["id"].is_string());
    assert!(json["created_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_project_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"title": "Get Me"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Get Me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/projects/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_project_is_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"title": "Original"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let first = body_json(
        put_json(
            app,
            &format!("/api/v1/projects/{id}"),
            serde_json::json!({"title": "X"}),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool);
    let second = body_json(
        put_json(
            app,
            &format!("/api/v1/projects/{id}"),
            serde_json::json!({"title": "X"}),
        )
        .await,
    )
    .await;

    assert_eq!(first["title"], "X");
    assert_eq!(second["title"], "X");
    // updated_at refreshes on every mutation and never moves backwards.
    let first_updated =
        chrono::DateTime::parse_from_rfc3339(first["updated_at"].as_str().unwrap()).unwrap();
    let second_updated =
        chrono::DateTime::parse_from_rfc3339(second["updated_at"].as_str().unwrap()).unwrap();
    assert!(second_updated >= first_updated);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_projects_filtered_by_owner(pool: PgPool) {
    let owner = "11111111-1111-1111-1111-111111111111";

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"title": "Mine", "user_id": owner}),
    )
    .await;
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"title": "Unowned"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let all = body_json(get(app, "/api/v1/projects").await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool);
    let owned = body_json(get(app, &format!("/api/v1/projects?user_id={owner}")).await).await;
    assert_eq!(owned.as_array().unwrap().len(), 1);
    assert_eq!(owned[0]["title"], "Mine");
}

// ---------------------------------------------------------------------------
// Scene CRUD
// ---------------------------------------------------------------------------

async fn create_project(pool: &PgPool, title: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let resp = post_json(app, "/api/v1/projects", serde_json::json!({"title": title})).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await["id"].as_str().unwrap().to_string()
}

async fn create_scene(pool: &PgPool, project_id: &str, prompt: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let resp = post_json(
        app,
        "/api/v1/scenes",
        serde_json::json!({"project_id": project_id, "prompt_text": prompt}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_scene_create_roundtrip_with_defaults(pool: PgPool) {
    let project_id = create_project(&pool, "Scenes").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/scenes",
            serde_json::json!({
                "project_id": project_id,
                "prompt_text": "a red barn",
                "caption": "Barn",
            }),
        )
        .await,
    )
    .await;

    let id = created["id"].as_str().unwrap();
    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/v1/scenes/{id}")).await).await;

    assert_eq!(fetched["prompt_text"], "a red barn");
    assert_eq!(fetched["caption"], "Barn");
    assert_eq!(fetched["x"], 0.0);
    assert_eq!(fetched["y"], 0.0);
    assert_eq!(fetched["width"], 300.0);
    assert_eq!(fetched["height"], 200.0);
    assert!(fetched["created_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_scene_partial_update_leaves_other_fields(pool: PgPool) {
    let project_id = create_project(&pool, "Patch").await;
    let scene = create_scene(&pool, &project_id, "a red barn").await;
    let id = scene["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let patched = body_json(
        patch_json(
            app,
            &format!("/api/v1/scenes/{id}"),
            serde_json::json!({"caption": "x"}),
        )
        .await,
    )
    .await;

    assert_eq!(patched["caption"], "x");
    assert_eq!(patched["prompt_text"], "a red barn");
    assert_eq!(patched["width"], 300.0);
    assert_eq!(patched["height"], 200.0);

    // Zero is a supplied value, distinct from "unset".
    let app = common::build_test_app(pool);
    let moved = body_json(
        patch_json(
            app,
            &format!("/api/v1/scenes/{id}"),
            serde_json::json!({"x": 0.0, "y": 42.5}),
        )
        .await,
    )
    .await;
    assert_eq!(moved["x"], 0.0);
    assert_eq!(moved["y"], 42.5);
    assert_eq!(moved["caption"], "x");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_scene_create_with_unknown_project_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/scenes",
        serde_json::json!({
            "project_id": "00000000-0000-0000-0000-000000000000",
            "prompt_text": "orphan",
        }),
    )
    .await;
    // Foreign keys are enforced at the storage layer and surface as 400.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Connection CRUD and validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_self_connection_is_rejected_and_not_persisted(pool: PgPool) {
    let project_id = create_project(&pool, "Loops").await;
    let scene = create_scene(&pool, &project_id, "solo").await;
    let scene_id = scene["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/connections",
        serde_json::json!({
            "project_id": project_id,
            "from_scene_id": scene_id,
            "to_scene_id": scene_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let listed = body_json(
        get(app, &format!("/api/v1/connections?project_id={project_id}")).await,
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_connection_label_update(pool: PgPool) {
    let project_id = create_project(&pool, "Edges").await;
    let a = create_scene(&pool, &project_id, "a").await;
    let b = create_scene(&pool, &project_id, "b").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/connections",
            serde_json::json!({
                "project_id": project_id,
                "from_scene_id": a["id"],
                "to_scene_id": b["id"],
                "label": "cut to",
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["label"], "cut to");

    let app = common::build_test_app(pool);
    let updated = body_json(
        patch_json(
            app,
            &format!("/api/v1/connections/{id}"),
            serde_json::json!({"label": "fade to"}),
        )
        .await,
    )
    .await;
    assert_eq!(updated["label"], "fade to");
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_delete_cascades_scenes_and_connections(pool: PgPool) {
    let project_id = create_project(&pool, "Cascade").await;
    let a = create_scene(&pool, &project_id, "a").await;
    let b = create_scene(&pool, &project_id, "b").await;

    let app = common::build_test_app(pool.clone());
    let connection = body_json(
        post_json(
            app,
            "/api/v1/connections",
            serde_json::json!({
                "project_id": project_id,
                "from_scene_id": a["id"],
                "to_scene_id": b["id"],
            }),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/projects/{project_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let scene_id = a["id"].as_str().unwrap();
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/scenes/{scene_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let connection_id = connection["id"].as_str().unwrap();
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/connections/{connection_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{project_id}/full")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_scene_delete_cascades_its_connections(pool: PgPool) {
    let project_id = create_project(&pool, "Dangling").await;
    let a = create_scene(&pool, &project_id, "a").await;
    let b = create_scene(&pool, &project_id, "b").await;
    let c = create_scene(&pool, &project_id, "c").await;

    for (from, to) in [(&a, &b), (&b, &c), (&c, &a)] {
        let app = common::build_test_app(pool.clone());
        let resp = post_json(
            app,
            "/api/v1/connections",
            serde_json::json!({
                "project_id": project_id,
                "from_scene_id": from["id"],
                "to_scene_id": to["id"],
            }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // Deleting `b` removes both edges touching it, leaving only c -> a.
    let b_id = b["id"].as_str().unwrap();
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/scenes/{b_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let remaining = body_json(
        get(app, &format!("/api/v1/connections?project_id={project_id}")).await,
    )
    .await;
    let remaining = remaining.as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["from_scene_id"], c["id"]);
    assert_eq!(remaining[0]["to_scene_id"], a["id"]);
}

// ---------------------------------------------------------------------------
// Full project view
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_full_returns_scenes_and_connections(pool: PgPool) {
    let project_id = create_project(&pool, "Full").await;
    let a = create_scene(&pool, &project_id, "a").await;
    let b = create_scene(&pool, &project_id, "b").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/connections",
        serde_json::json!({
            "project_id": project_id,
            "from_scene_id": a["id"],
            "to_scene_id": b["id"],
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let full = body_json(get(app, &format!("/api/v1/projects/{project_id}/full")).await).await;
    assert_eq!(full["title"], "Full");
    assert_eq!(full["scenes"].as_array().unwrap().len(), 2);
    assert_eq!(full["connections"].as_array().unwrap().len(), 1);
}
