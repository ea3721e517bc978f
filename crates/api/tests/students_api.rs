//! HTTP-level integration tests for the `/api/students` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

fn ana() -> serde_json::Value {
    serde_json::json!({
        "cpf": "111.111.111-11",
        "name": "Ana",
        "email": "ana@x.com",
        "phone": "1111-1111",
        "birthday": "2000-01-01"
    })
}

// ---------------------------------------------------------------------------
// Test: Create then fetch returns the same payload plus an assigned id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_student_then_get_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/students", ana()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get("location")
        .expect("201 must carry a Location header")
        .to_str()
        .unwrap()
        .to_string();

    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(location, format!("/api/students/{id}"));
    assert_eq!(created["cpf"], "111.111.111-11");
    assert_eq!(created["name"], "Ana");
    assert_eq!(created["email"], "ana@x.com");
    assert_eq!(created["phone"], "1111-1111");
    assert_eq!(created["birthday"], "2000-01-01");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/students/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["cpf"], "111.111.111-11");
    assert_eq!(fetched["name"], "Ana");
    assert_eq!(fetched["email"], "ana@x.com");
    assert_eq!(fetched["phone"], "1111-1111");
    assert_eq!(fetched["birthday"], "2000-01-01");
}

// ---------------------------------------------------------------------------
// Test: List includes the seeded student plus created rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_students_includes_seed(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/students", ana()).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/students").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    // One seeded student plus the one just created.
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["name"], "student1");
    assert_eq!(arr[1]["name"], "Ana");
}

// ---------------------------------------------------------------------------
// Test: List returns 404 once the table is empty
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_students_404_when_empty(pool: PgPool) {
    // Remove the seeded student first.
    let app = common::build_test_app(pool.clone());
    let seeded = body_json(get(app, "/api/students").await).await;
    let seed_id = seeded[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/students/{seed_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/students").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: Update is a full replace and returns 202
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_student_returns_202(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/students", ana()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/students/{id}"),
        serde_json::json!({
            "cpf": "111.111.111-11",
            "name": "Ana Souza",
            "email": "ana.souza@x.com",
            "phone": "2222-2222",
            "birthday": null
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/students/{id}")).await).await;
    assert_eq!(fetched["name"], "Ana Souza");
    assert_eq!(fetched["email"], "ana.souza@x.com");
    // Whole-record replace: birthday was cleared, not preserved.
    assert_eq!(fetched["birthday"], serde_json::Value::Null);
}

// ---------------------------------------------------------------------------
// Test: Update payload missing a required field is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_email_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/students", ana()).await).await;
    let id = created["id"].as_i64().unwrap();

    // No email field at all: the payload never reaches the store.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/students/{id}"),
        serde_json::json!({
            "cpf": "111.111.111-11",
            "name": "Ana",
            "phone": "1111-1111",
            "birthday": "2000-01-01"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // The stored record is untouched.
    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/students/{id}")).await).await;
    assert_eq!(fetched["email"], "ana@x.com");
}

// ---------------------------------------------------------------------------
// Test: Length constraint violations return 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_student_oversized_field_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/students",
        serde_json::json!({
            "cpf": "111.111.111-11-too-long-for-the-column",
            "name": "Ana",
            "email": "ana@x.com",
            "phone": "1111-1111",
            "birthday": "2000-01-01"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: Duplicate cpf surfaces as an opaque 500
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_cpf_returns_500(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/students", ana()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/students", ana()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    // Persistence failures are opaque: no constraint detail leaks out.
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: Delete then 404 on subsequent requests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_student_then_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/students", ana()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/students/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/students/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/students/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
