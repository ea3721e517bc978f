//! HTTP-level integration tests for the instructors and courses resources.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

fn carla() -> serde_json::Value {
    serde_json::json!({
        "name": "Carla",
        "email": "carla@email.com",
        "phone": "2222-2222",
        "hourly_rate": "75.50",
        "certificates": "CCNA"
    })
}

fn databases() -> serde_json::Value {
    serde_json::json!({
        "name": "Databases",
        "requirement": "Logic 101",
        "workload_hours": 40,
        "price": "500.00"
    })
}

// ---------------------------------------------------------------------------
// Instructor CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_instructor_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/instructors", carla()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Carla");
    assert_eq!(json["hourly_rate"], "75.50");
    assert_eq!(json["certificates"], "CCNA");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_instructor_list_empty_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/instructors").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_instructor_list_returns_all_rows(pool: PgPool) {
    for name in ["A", "B", "C"] {
        let app = common::build_test_app(pool.clone());
        let mut body = carla();
        body["name"] = serde_json::json!(name);
        post_json(app, "/api/instructors", body).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/instructors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_instructor_full_replace(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/instructors", carla()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/instructors/{id}"),
        serde_json::json!({
            "name": "Carla Mendes",
            "email": "carla.mendes@email.com",
            "phone": "2222-2222",
            "hourly_rate": null,
            "certificates": null
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/instructors/{id}")).await).await;
    assert_eq!(fetched["name"], "Carla Mendes");
    // Optional columns were replaced with NULL, not preserved.
    assert_eq!(fetched["hourly_rate"], serde_json::Value::Null);
    assert_eq!(fetched["certificates"], serde_json::Value::Null);
}

// ---------------------------------------------------------------------------
// Course CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_course_then_get_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/courses", databases()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Databases");
    assert_eq!(json["requirement"], "Logic 101");
    assert_eq!(json["workload_hours"], 40);
    assert_eq!(json["price"], "500.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_course_missing_price_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/courses",
        serde_json::json!({"name": "No Price", "requirement": null, "workload_hours": 10}),
    )
    .await;
    // Required field missing: rejected at deserialization.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_get_update_delete_nonexistent_return_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/courses/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/api/courses/999999", databases()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, "/api/courses/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_course_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/courses", databases()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
