//! Integration tests for the HTTP API.
//!
//! These tests drive the full order lifecycle through the router:
//! create an order, add lines, pay, and inspect the stored outcome.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use orders_hex::inbound::HttpServer;
use orders_repo::InMemoryOrderRepository;
use orders_types::{CustomerId, ProductId};
use payment_gateways::FakePaymentGateway;

/// Helper to create a test router backed by a fresh repository.
fn test_app(gateway: FakePaymentGateway) -> Router {
    let repo = Arc::new(InMemoryOrderRepository::new());
    HttpServer::new(repo, Arc::new(gateway)).router()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Creates an order and returns its id.
async fn create_order(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/orders",
            serde_json::json!({ "customer_id": CustomerId::new() }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    json["id"].as_str().unwrap().to_string()
}

/// Adds a 2 x $50 line to the given order.
async fn add_standard_line(app: &Router, order_id: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            &format!("/api/orders/{order_id}/lines"),
            serde_json::json!({
                "product_id": ProductId::new(),
                "product_name": "Test Product",
                "quantity": 2,
                "unit_price": "50",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response_json(response).await
}

#[tokio::test]
async fn test_health() {
    let app = test_app(FakePaymentGateway::always_approve());

    let response = app
        .oneshot(empty_request(Method::GET, "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_full_order_lifecycle() {
    let app = test_app(FakePaymentGateway::always_approve());

    let order_id = create_order(&app).await;
    let order = add_standard_line(&app, &order_id).await;
    assert_eq!(order["status"], "pending");
    assert_eq!(order["total"], "$100");

    let response = app
        .clone()
        .oneshot(empty_request(
            Method::POST,
            &format!("/api/orders/{order_id}/pay"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let result = response_json(response).await;
    assert_eq!(result["success"], true);
    assert_eq!(result["amount_paid"], "100");

    let response = app
        .clone()
        .oneshot(empty_request(
            Method::GET,
            &format!("/api/orders/{order_id}"),
        ))
        .await
        .unwrap();
    let order = response_json(response).await;
    assert_eq!(order["status"], "paid");
    assert_eq!(order["version"], 1);
}

#[tokio::test]
async fn test_declined_payment_leaves_stored_order_pending() {
    let app = test_app(FakePaymentGateway::always_decline());

    let order_id = create_order(&app).await;
    add_standard_line(&app, &order_id).await;

    let response = app
        .clone()
        .oneshot(empty_request(
            Method::POST,
            &format!("/api/orders/{order_id}/pay"),
        ))
        .await
        .unwrap();
    let result = response_json(response).await;
    assert_eq!(result["success"], false);
    assert_eq!(result["amount_paid"], "0");
    assert!(result["message"].as_str().unwrap().contains("declined"));

    let response = app
        .clone()
        .oneshot(empty_request(
            Method::GET,
            &format!("/api/orders/{order_id}"),
        ))
        .await
        .unwrap();
    let order = response_json(response).await;
    assert_eq!(order["status"], "pending");
    assert_eq!(order["version"], 0);
}

#[tokio::test]
async fn test_remove_line() {
    let app = test_app(FakePaymentGateway::always_approve());

    let order_id = create_order(&app).await;
    let order = add_standard_line(&app, &order_id).await;
    let product_id = order["lines"][0]["product_id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/orders/{order_id}/lines/{product_id}"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let order = response_json(response).await;
    assert_eq!(order["lines"].as_array().unwrap().len(), 0);
    assert_eq!(order["total"], "$0");
}

#[tokio::test]
async fn test_editing_paid_order_is_rejected() {
    let app = test_app(FakePaymentGateway::always_approve());

    let order_id = create_order(&app).await;
    add_standard_line(&app, &order_id).await;
    app.clone()
        .oneshot(empty_request(
            Method::POST,
            &format!("/api/orders/{order_id}/pay"),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            &format!("/api/orders/{order_id}/lines"),
            serde_json::json!({
                "product_id": ProductId::new(),
                "product_name": "Late Addition",
                "quantity": 1,
                "unit_price": "10",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("Cannot modify order after payment")
    );
}

#[tokio::test]
async fn test_unknown_order_is_404() {
    let app = test_app(FakePaymentGateway::always_approve());

    let response = app
        .clone()
        .oneshot(empty_request(
            Method::GET,
            &format!("/api/orders/{}", orders_types::OrderId::new()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_paying_unknown_order_reports_unexpected_error() {
    let app = test_app(FakePaymentGateway::always_approve());

    let response = app
        .clone()
        .oneshot(empty_request(
            Method::POST,
            &format!("/api/orders/{}/pay", orders_types::OrderId::new()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let result = response_json(response).await;
    assert_eq!(result["success"], false);
    assert!(
        result["message"]
            .as_str()
            .unwrap()
            .contains("Unexpected error")
    );
}

#[tokio::test]
async fn test_invalid_order_id_is_400() {
    let app = test_app(FakePaymentGateway::always_approve());

    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, "/api/orders/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
