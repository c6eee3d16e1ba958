//! HTTP API tests for the order routes.

mod support;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use support::{app, send};

async fn place_order(app: &axum::Router, user_id: i64) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/v1/order",
        json!({"user_id": user_id, "total_price": 25.5, "status": "pending"}),
    )
    .await
}

#[tokio::test]
async fn test_create_and_get_order() {
    let app = app();

    let (status, body) = place_order(&app, 1).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1}));

    let (status, body) = send(&app, Method::GET, "/api/v1/order", json!({"id": 1})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["total_price"], 25.5);
    assert_eq!(body["status"], "pending");
}

#[tokio::test]
async fn test_orders_by_user() {
    let app = app();
    place_order(&app, 1).await;
    place_order(&app, 2).await;
    place_order(&app, 1).await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/user-order",
        json!({"user_id": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/v1/user-order",
        json!({"user_id": 2000}),
    )
    .await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_status_update_keeps_total() {
    let app = app();
    place_order(&app, 1).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/order/status",
        json!({"id": 1, "status": "shipped"}),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, body) = send(&app, Method::GET, "/api/v1/order", json!({"id": 1})).await;
    assert_eq!(body["status"], "shipped");
    assert_eq!(body["total_price"], 25.5);
}

#[tokio::test]
async fn test_full_update() {
    let app = app();
    place_order(&app, 1).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/order",
        json!({"id": 1, "status": "completed", "total_price": 30.0}),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, "/api/v1/order", json!({"id": 1})).await;
    assert_eq!(body["status"], "completed");
    assert_eq!(body["total_price"], 30.0);
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let app = app();
    place_order(&app, 1).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/order/status",
        json!({"id": 1, "status": "lost"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "error": true,
            "message": "status field must be one of: pending, shipped, completed, cancelled"
        })
    );
}

#[tokio::test]
async fn test_order_for_unknown_user() {
    let app = app();

    let (status, body) = place_order(&app, 99).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "referenced record does not exist");
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/v1/order", json!({"id": 5})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": true, "message": "order not found"}));

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/order/status",
        json!({"id": 5, "status": "cancelled"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
