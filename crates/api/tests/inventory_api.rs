//! HTTP-level integration tests for the `/inventories` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, count_rows, delete, get, post_json, put_empty, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_inventory_defaults_variables(pool: PgPool) {
    let org_id = common::create_org(&pool, "Org").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/inventories",
        json!({"organization_id": org_id, "name": "web"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["organization_id"], org_id);
    assert_eq!(json["name"], "web");
    assert_eq!(json["variables"], json!({}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_inventory_accepts_encoded_variables(pool: PgPool) {
    let org_id = common::create_org(&pool, "Org").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/inventories",
        json!({"organization_id": org_id, "name": "db", "variables": "{\"port\": 5432}"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["variables"], json!({"port": 5432}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_inventory_rejects_non_object_variables(pool: PgPool) {
    let org_id = common::create_org(&pool, "Org").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/inventories",
        json!({"organization_id": org_id, "name": "db", "variables": [1, 2]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "variables must be a JSON object");
    assert_eq!(count_rows(&pool, "inventories").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_inventory_missing_fields_returns_400(pool: PgPool) {
    let org_id = common::create_org(&pool, "Org").await;

    for body in [
        json!({"name": "web"}),
        json!({"organization_id": org_id}),
        json!({}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/inventories", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
    assert_eq!(count_rows(&pool, "inventories").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_inventory_for_missing_org_returns_500(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/inventories",
        json!({"organization_id": 999999, "name": "orphan"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "internal_error");
    assert!(json["details"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_inventory_variables(pool: PgPool) {
    let org_id = common::create_org(&pool, "Org").await;
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/inventories",
            json!({"organization_id": org_id, "name": "web", "variables": {"a": 1}}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Well-formed variables replace the stored map wholesale.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/inventories/{id}"),
        json!({"variables": {"b": 2}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["variables"], json!({"b": 2}));
    assert_eq!(json["name"], "web");

    // Malformed variables leave the stored map alone.
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/inventories/{id}"),
        json!({"name": "web-2", "variables": "not json"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["variables"], json!({"b": 2}));
    assert_eq!(json["name"], "web-2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_inventory_without_body_returns_prior_state(pool: PgPool) {
    let org_id = common::create_org(&pool, "Org").await;
    let id = common::create_inventory(&pool, org_id, "web").await;

    let app = common::build_test_app(pool.clone());
    let before = body_json(get(app, &format!("/inventories/{id}")).await).await;

    let app = common::build_test_app(pool);
    let response = put_empty(app, &format!("/inventories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, before);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inventory_not_found_paths(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    assert_eq!(
        get(app, "/inventories/424242").await.status(),
        StatusCode::NOT_FOUND
    );

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        put_json(app, "/inventories/424242", json!({"name": "x"}))
            .await
            .status(),
        StatusCode::NOT_FOUND
    );

    let app = common::build_test_app(pool);
    assert_eq!(
        delete(app, "/inventories/424242").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_and_delete_inventories(pool: PgPool) {
    let org_id = common::create_org(&pool, "Org").await;
    let first = common::create_inventory(&pool, org_id, "one").await;
    let second = common::create_inventory(&pool, org_id, "two").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/inventories").await).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/inventories/{first}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(count_rows(&pool, "inventories").await, 1);
}
