//! API integration tests, run against the router in-process

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use equiptrack_server::{
    config::{AppConfig, LoggingConfig, ServerConfig},
    create_router,
    services::Services,
    store::TrackerStore,
    AppState,
};

/// Build a fresh application with its own seeded store
fn test_app() -> Router {
    let config = AppConfig {
        server: ServerConfig::default(),
        logging: LoggingConfig::default(),
    };
    let services = Services::new(TrackerStore::new());

    create_router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1{}", path))
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };

    (status, body)
}

async fn post(app: &Router, path: &str, payload: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/v1{}", path))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };

    (status, body)
}

fn equipment_payload(asset_tag: &str, serial_number: &str) -> Value {
    json!({
        "asset_tag": asset_tag,
        "serial_number": serial_number,
        "name": "Fluke 87V Multimeter",
        "category": "Instrument",
        "status": "available",
        "location": "Main Lab",
        "current_holder": "Bench Crew"
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_list_equipments_returns_seed_set() {
    let app = test_app();

    let (status, body) = get(&app, "/equipments").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
    assert_eq!(body["items"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_list_equipments_with_filters() {
    let app = test_app();

    let (status, body) = get(&app, "/equipments?status=in_transit").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["asset_tag"], "EQ-4508");

    let (status, body) = get(&app, "/equipments?q=zebra").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);

    let (status, body) = get(&app, "/equipments?category=Network&location=Curitiba%20Warehouse").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_create_equipment() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/equipments",
        equipment_payload("EQ-9999", "SN-TESTE-1"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["asset_tag"], "EQ-9999");
    assert_eq!(body["status"], "available");
    assert_eq!(body["history"].as_array().unwrap().len(), 1);
    assert_eq!(body["history"][0]["kind"], "registration");

    let (_, listing) = get(&app, "/equipments?q=EQ-9999").await;
    assert_eq!(listing["total"], 1);

    let (_, stats) = get(&app, "/stats").await;
    assert_eq!(stats["total"], 5);
}

#[tokio::test]
async fn test_create_equipment_duplicate_asset_tag() {
    let app = test_app();

    post(&app, "/equipments", equipment_payload("EQ-9999", "SN-TESTE-1")).await;
    let (status, body) = post(
        &app,
        "/equipments",
        equipment_payload("EQ-9999", "SN-TESTE-2"),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "DuplicateAssetTag");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_create_equipment_validation_error() {
    let app = test_app();

    let mut payload = equipment_payload("EQ-9999", "SN-TESTE-1");
    payload["name"] = json!("ab"); // below the 3-char minimum

    let (status, body) = post(&app, "/equipments", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_get_equipment_not_found() {
    let app = test_app();

    let (status, body) = get(
        &app,
        "/equipments/00000000-0000-0000-0000-000000000000",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchEquipment");
}

#[tokio::test]
async fn test_movement_workflow_end_to_end() {
    let app = test_app();

    let (_, equipment) = post(
        &app,
        "/equipments",
        equipment_payload("EQ-9999", "SN-TESTE-1"),
    )
    .await;
    let equipment_id = equipment["id"].as_str().unwrap().to_string();

    // Request
    let (status, movement) = post(
        &app,
        "/movements",
        json!({
            "equipment_id": equipment_id,
            "origin_location": "Main Lab",
            "target_location": "North Plant",
            "requested_by": "Joana Prado",
            "reason": "Commissioning support"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(movement["status"], "pending");
    let movement_id = movement["id"].as_str().unwrap().to_string();

    // Equipment is now in transit
    let (_, detail) = get(&app, &format!("/equipments/{}", equipment_id)).await;
    assert_eq!(detail["equipment"]["status"], "in_transit");

    // Approve
    let (status, approved) = post(
        &app,
        &format!("/movements/{}/approve", movement_id),
        json!({
            "approved_by": "Mauro Dias",
            "authorized_by": "Helena Castro"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");
    assert_eq!(approved["approved_by"], "Mauro Dias");

    // Conclude
    let (status, concluded) = post(
        &app,
        &format!("/movements/{}/conclude", movement_id),
        json!({
            "completed_by": "Courier Team",
            "received_by": "Otavio Ramos"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(concluded["status"], "concluded");

    // Equipment delivered: in use at the target, held by the receiver
    let (_, detail) = get(&app, &format!("/equipments/{}", equipment_id)).await;
    assert_eq!(detail["equipment"]["status"], "in_use");
    assert_eq!(detail["equipment"]["location"], "North Plant");
    assert_eq!(detail["equipment"]["current_holder"], "Otavio Ramos");
    assert_eq!(detail["movements"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_approve_movement_twice_fails() {
    let app = test_app();

    let (_, equipment) = post(
        &app,
        "/equipments",
        equipment_payload("EQ-9999", "SN-TESTE-1"),
    )
    .await;
    let (_, movement) = post(
        &app,
        "/movements",
        json!({
            "equipment_id": equipment["id"],
            "origin_location": "Main Lab",
            "target_location": "North Plant",
            "requested_by": "Joana Prado",
            "reason": "Commissioning support"
        }),
    )
    .await;
    let movement_id = movement["id"].as_str().unwrap().to_string();

    let approval = json!({
        "approved_by": "Mauro Dias",
        "authorized_by": "Helena Castro"
    });
    post(&app, &format!("/movements/{}/approve", movement_id), approval.clone()).await;
    let (status, body) = post(
        &app,
        &format!("/movements/{}/approve", movement_id),
        approval,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "MovementNotPending");
}

#[tokio::test]
async fn test_request_movement_for_in_transit_equipment_fails() {
    let app = test_app();

    let (_, listing) = get(&app, "/equipments?status=in_transit").await;
    let equipment_id = listing["items"][0]["id"].as_str().unwrap().to_string();

    let (status, body) = post(
        &app,
        "/movements",
        json!({
            "equipment_id": equipment_id,
            "origin_location": "Curitiba Warehouse",
            "target_location": "North Plant",
            "requested_by": "Joana Prado",
            "reason": "Second transfer attempt"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "EquipmentInTransit");
}

#[tokio::test]
async fn test_request_movement_unknown_equipment() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/movements",
        json!({
            "equipment_id": "00000000-0000-0000-0000-000000000000",
            "origin_location": "Main Lab",
            "target_location": "North Plant",
            "requested_by": "Joana Prado",
            "reason": "Commissioning support"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchEquipment");
}

#[tokio::test]
async fn test_stats_summary_shape() {
    let app = test_app();

    let (status, body) = get(&app, "/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);

    let by_status = &body["by_status"];
    let sum = by_status["available"].as_u64().unwrap()
        + by_status["in_use"].as_u64().unwrap()
        + by_status["in_maintenance"].as_u64().unwrap()
        + by_status["in_transit"].as_u64().unwrap()
        + by_status["decommissioned"].as_u64().unwrap();
    assert_eq!(sum, 4);

    assert!(body["pending_approvals"].as_array().unwrap().is_empty());
    assert!(body["recent_events"].as_array().unwrap().len() <= 12);
}

#[tokio::test]
async fn test_distinct_value_listings() {
    let app = test_app();

    let (status, body) = get(&app, "/equipments/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.as_array().unwrap().len(),
        4,
        "seed has four distinct categories"
    );

    let (status, body) = get(&app, "/equipments/locations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = get(&app, "/equipments/holders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_list_movements_with_limit() {
    let app = test_app();

    let (status, body) = get(&app, "/movements").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, equipment) = post(
        &app,
        "/equipments",
        equipment_payload("EQ-9999", "SN-TESTE-1"),
    )
    .await;
    post(
        &app,
        "/movements",
        json!({
            "equipment_id": equipment["id"],
            "origin_location": "Main Lab",
            "target_location": "North Plant",
            "requested_by": "Joana Prado",
            "reason": "Commissioning support"
        }),
    )
    .await;

    let (_, body) = get(&app, "/movements?limit=1").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = get(&app, "/movements").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}
