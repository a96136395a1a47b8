//! Router-level tests driven through `tower::ServiceExt::oneshot`.
//!
//! Requests rejected by validation never reach the store, so those run
//! against a lazily-connected pool. The rest need a real database:
//! DATABASE_URL=postgres://... cargo test -p reservo-server -- --ignored

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use reservo_server::db::{bootstrap_schema, create_lazy_pool, PoolConfig};
use reservo_server::http::{build_router, ServerConfig};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

fn offline_router() -> Router {
    let pool = create_lazy_pool("postgres://localhost/unused", PoolConfig::default())
        .expect("lazy pool");
    build_router(pool, &ServerConfig::default())
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let parsed = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, parsed)
}

// === Validation (no database) ===

#[tokio::test]
async fn health_is_ok() {
    let router = offline_router();
    let (status, body) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn book_rejects_non_positive_party() {
    let router = offline_router();
    for party_count in [0, -2] {
        let (status, body) = send(
            &router,
            Method::POST,
            "/api/customers/Sally/reservations",
            Some(json!({
                "restaurant_name": "Bobs",
                "date": "2024-05-01",
                "party_count": party_count
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }
}

#[tokio::test]
async fn book_rejects_missing_fields() {
    let router = offline_router();
    let (status, body) = send(
        &router,
        Method::POST,
        "/api/customers/Sally/reservations",
        Some(json!({ "date": "2024-05-01", "party_count": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "restaurant_name is required");
}

#[tokio::test]
async fn book_rejects_bad_date() {
    let router = offline_router();
    let (status, _) = send(
        &router,
        Method::POST,
        "/api/customers/Sally/reservations",
        Some(json!({
            "restaurant_name": "Bobs",
            "date": "next tuesday",
            "party_count": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn book_rejects_dates_the_store_cannot_hold() {
    let router = offline_router();
    for date in ["-5000-01-01", "+300000-01-01"] {
        let (status, body) = send(
            &router,
            Method::POST,
            "/api/customers/Sally/reservations",
            Some(json!({
                "restaurant_name": "Bobs",
                "date": date,
                "party_count": 2
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{date}: {body}");
        assert_eq!(body["error"], "validation_error");
    }
}

#[tokio::test]
async fn book_rejects_wrongly_typed_body() {
    let router = offline_router();
    let (status, body) = send(
        &router,
        Method::POST,
        "/api/customers/Sally/reservations",
        Some(json!({
            "restaurant_name": 42,
            "date": "2024-05-01",
            "party_count": "four"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn register_rejects_blank_name() {
    let router = offline_router();
    for uri in ["/api/customers", "/api/restaurants"] {
        let (status, _) = send(&router, Method::POST, uri, Some(json!({ "name": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");

        let (status, body) = send(&router, Method::POST, uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["message"], "name is required");
    }
}

#[tokio::test]
async fn cancel_rejects_malformed_ids() {
    let router = offline_router();
    let uri = format!("/api/customers/not-a-uuid/reservations/{}", Uuid::new_v4());
    let (status, body) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "customer_id: invalid UUID format");

    let uri = format!("/api/customers/{}/reservations/42", Uuid::new_v4());
    let (status, _) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// === Full flow (database) ===

fn live_router(pool: PgPool) -> Router {
    build_router(pool, &ServerConfig::default())
}

async fn register(router: &Router, uri: &str, name: &str) -> Value {
    let (status, body) = send(router, Method::POST, uri, Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

#[sqlx::test]
#[ignore = "requires database"]
async fn duplicate_customer_is_conflict(pool: PgPool) {
    bootstrap_schema(&pool).await.expect("bootstrap");
    let router = live_router(pool);

    let sally = register(&router, "/api/customers", "Sally").await;
    assert_eq!(sally["name"], "Sally");

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/customers",
        Some(json!({ "name": "Sally" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");

    let (_, customers) = send(&router, Method::GET, "/api/customers", None).await;
    assert_eq!(customers, json!([sally]));
}

#[sqlx::test]
#[ignore = "requires database"]
async fn booking_lifecycle(pool: PgPool) {
    bootstrap_schema(&pool).await.expect("bootstrap");
    let router = live_router(pool);

    let sally = register(&router, "/api/customers", "Sally").await;
    let nick = register(&router, "/api/customers", "Nick").await;
    register(&router, "/api/restaurants", "Bobs").await;

    // Book for Sally at Bobs
    let (status, reservation) = send(
        &router,
        Method::POST,
        "/api/customers/Sally/reservations",
        Some(json!({
            "restaurant_name": "Bobs",
            "date": "2024-05-01",
            "party_count": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(reservation["customer_id"], sally["id"]);
    assert_eq!(reservation["party_count"], 4);
    assert_eq!(reservation["date"], "2024-05-01");

    // Unknown restaurant: not found, nothing created
    let (status, body) = send(
        &router,
        Method::POST,
        "/api/customers/Sally/reservations",
        Some(json!({
            "restaurant_name": "Unknown",
            "date": "2024-05-01",
            "party_count": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");

    let (_, listed) = send(&router, Method::GET, "/api/reservations", None).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["customer_name"], "Sally");
    assert_eq!(listed[0]["restaurant_name"], "Bobs");

    let reservation_id = reservation["id"].as_str().unwrap();
    let sally_id = sally["id"].as_str().unwrap();
    let nick_id = nick["id"].as_str().unwrap();

    // Wrong owner: 404, row intact
    let uri = format!("/api/customers/{nick_id}/reservations/{reservation_id}");
    let (status, _) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let uri = format!("/api/customers/{sally_id}/reservations");
    let (_, mine) = send(&router, Method::GET, &uri, None).await;
    assert_eq!(mine.as_array().map(Vec::len), Some(1));

    // Owner cancels: 204, empty body
    let uri = format!("/api/customers/{sally_id}/reservations/{reservation_id}");
    let (status, body) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, listed) = send(&router, Method::GET, "/api/reservations", None).await;
    assert_eq!(listed, json!([]));

    // Second cancel: already gone
    let (status, _) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
#[ignore = "requires database"]
async fn readiness_reaches_database(pool: PgPool) {
    let router = live_router(pool);
    let (status, body) = send(&router, Method::GET, "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
}
