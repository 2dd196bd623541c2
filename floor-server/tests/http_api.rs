//! HTTP surface checks against the assembled router
//!
//! Requests go through the real axum router via `tower::ServiceExt`, so
//! routing, extractors, the response envelope, and error status mapping
//! are all covered without binding a port.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use floor_server::{api, Config, ServerState};

fn test_app(work_dir: &std::path::Path) -> Router {
    let config = Config::with_overrides(work_dir.to_str().unwrap(), 0);
    let state = ServerState::initialize(&config).expect("state should initialize");
    api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn draft_body() -> Value {
    json!({
        "table_id": "T1",
        "items": [
            {"menu_item_id": "menu-1", "name": "grill", "unit_price": 10.0, "quantity": 2},
            {"menu_item_id": "menu-2", "name": "juice", "unit_price": 5.0, "quantity": 1}
        ],
        "payment_method": "CASH"
    })
}

#[tokio::test]
async fn test_place_list_and_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let (status, body) = send(&app, "POST", "/api/orders", Some(draft_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["id"], "order-1");
    assert_eq!(body["data"]["status"], "PLACED");
    assert_eq!(body["data"]["total_price"], 25.0);

    let (status, body) = send(&app, "GET", "/api/orders/order-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["table_id"], "T1");

    let (status, body) = send(&app, "GET", "/api/orders?status=PLACED", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, "GET", "/api/orders?status=SERVED", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_error_statuses_and_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    // Unknown order -> 404 with the order error code
    let (status, body) = send(&app, "GET", "/api/orders/order-99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
    assert!(body.get("data").is_none());

    // Stage jump -> 409 conflict
    send(&app, "POST", "/api/orders", Some(draft_body())).await;
    let (status, body) = send(
        &app,
        "PUT",
        "/api/orders/order-1/status",
        Some(json!({"target": "READY"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 4002);

    // Unpriceable order -> 422
    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "table_id": "T2",
            "items": [],
            "payment_method": "CARD"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 4003);
}

#[tokio::test]
async fn test_status_advance_with_estimate() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());
    send(&app, "POST", "/api/orders", Some(draft_body())).await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/orders/order-1/status",
        Some(json!({"target": "RECEIVED"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // PREPARING without an estimate is rejected
    let (status, body) = send(
        &app,
        "PUT",
        "/api/orders/order-1/status",
        Some(json!({"target": "PREPARING"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);

    let (status, body) = send(
        &app,
        "PUT",
        "/api/orders/order-1/status",
        Some(json!({"target": "PREPARING", "estimated_prep_minutes": 20})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["estimated_prep_minutes"], 20);
}

#[tokio::test]
async fn test_assistance_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let (status, body) = send(&app, "POST", "/api/assistance/T5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["table_id"], "T5");

    let (_, body) = send(&app, "GET", "/api/assistance", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, "DELETE", "/api/assistance/T5", None).await;
    assert_eq!(body["data"], true);

    // Second acknowledge reports there was nothing pending
    let (status, body) = send(&app, "DELETE", "/api/assistance/T5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], false);
}

#[tokio::test]
async fn test_tables_queue_feedback_and_issues() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let (status, body) = send(
        &app,
        "PUT",
        "/api/tables/T1/status",
        Some(json!({"status": "OCCUPIED"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "OCCUPIED");

    send(&app, "POST", "/api/orders", Some(draft_body())).await;
    let (_, body) = send(&app, "GET", "/api/queue", None).await;
    let groups = body["data"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["status"], "PLACED");
    assert_eq!(groups[0]["entries"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, "GET", "/api/queue/combined", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        "POST",
        "/api/feedback",
        Some(json!({"order_id": "order-1", "table_id": "T1", "rating": 4})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", "/api/feedback/average", None).await;
    assert_eq!(body["data"], 4.0);

    let (status, body) = send(
        &app,
        "POST",
        "/api/service-issues",
        Some(json!({"kind": "OUT_OF_STOCK", "description": "out of juice"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let issue_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/service-issues/{issue_id}/resolve"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["resolved"], true);

    let (_, body) = send(&app, "GET", "/api/service-issues", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
    let (_, body) = send(&app, "GET", "/api/service-issues?include_resolved=true", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_health_probe() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"]["status"], "ok");
    assert_eq!(body["store"]["orders"], 0);
    assert!(body["poll_seconds"].as_u64().is_some());
    assert!(body["version"].as_str().is_some());
}
