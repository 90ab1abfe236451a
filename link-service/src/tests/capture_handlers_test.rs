use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::create_test_app;
use eventlink_shared::models::LocalEventStatus;
use eventlink_shared::store::CaptureStore;
use eventlink_shared::test_utils::fixtures::{
    json_payload, short_yaml_payload, yaml_payload, EVENT_ID, OTHER_EVENT_ID,
};
use eventlink_shared::test_utils::http_test_utils::{json_request, response_to_json};

const CAPTURES: &str = "/devices/device-1/captures";
const SYNC: &str = "/devices/device-1/sync";

#[tokio::test]
async fn test_parse_payload_returns_event_and_display_time() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/offline/parse",
            Some(json!({ "payload": yaml_payload(EVENT_ID, "Launch") })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_to_json(response).await;
    assert_eq!(body["event"]["eventId"], EVENT_ID);
    assert_eq!(body["event"]["title"], "Launch");
    assert_eq!(body["event"]["promoterId"], "promoter-1");
    assert_eq!(body["displayTime"], "Mon, Dec 15, 10:00 AM");
}

#[tokio::test]
async fn test_parse_payload_rejects_foreign_code() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/offline/parse",
            Some(json!({ "payload": "https://example.com/menu" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_add_capture_then_duplicate() {
    let (app, store) = create_test_app();

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            CAPTURES,
            Some(json!({ "payload": short_yaml_payload(EVENT_ID, "Fair") })),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created_body = response_to_json(created).await;
    assert_eq!(created_body["duplicate"], false);
    assert_eq!(created_body["capture"]["status"], "pending");

    let repeated = app
        .oneshot(json_request(
            "POST",
            CAPTURES,
            Some(json!({ "payload": json_payload(EVENT_ID, "Fair") })),
        ))
        .await
        .unwrap();
    assert_eq!(repeated.status(), StatusCode::OK);
    let repeated_body = response_to_json(repeated).await;
    assert_eq!(repeated_body["duplicate"], true);
    assert_eq!(repeated_body["capture"]["id"], created_body["capture"]["id"]);

    assert_eq!(store.list("device-1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_capture_rejects_unparseable_payload() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            CAPTURES,
            Some(json!({ "payload": "v: 1\nevent:\n  id: 'not-a-uuid'\n  title: 'x'\n" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_sync_round_trip() {
    let (app, store) = create_test_app();
    store
        .add_scanned("device-1", &yaml_payload(EVENT_ID, "First"))
        .await
        .unwrap();
    store
        .add_scanned("device-1", &yaml_payload(OTHER_EVENT_ID, "Second"))
        .await
        .unwrap();

    let pending = app
        .clone()
        .oneshot(json_request("GET", SYNC, None))
        .await
        .unwrap();
    assert_eq!(pending.status(), StatusCode::OK);
    let pending_body = response_to_json(pending).await;
    assert_eq!(pending_body["device_id"], "device-1");
    assert_eq!(pending_body["entries"].as_array().unwrap().len(), 2);
    assert_eq!(pending_body["entries"][0]["local_status"], "scanned");

    let applied = app
        .oneshot(json_request(
            "POST",
            SYNC,
            Some(json!({
                "entries": [
                    { "entry_index": 0, "success": true, "event_id": EVENT_ID, "rsvp_id": "r1", "error": null },
                    { "entry_index": 1, "success": false, "error": "Event is full" }
                ]
            })),
        ))
        .await
        .unwrap();
    assert_eq!(applied.status(), StatusCode::OK);
    let captures = response_to_json(applied).await;
    assert_eq!(captures[0]["status"], "synced");
    assert_eq!(captures[1]["status"], "error");
    assert_eq!(captures[1]["errorMessage"], "Event is full");
}

#[tokio::test]
async fn test_sync_marks_server_known_events() {
    let (app, store) = create_test_app();
    store
        .add_scanned("device-1", &yaml_payload(EVENT_ID, "First"))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "POST",
            SYNC,
            Some(json!({ "entries": [], "eventIds": [EVENT_ID] })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let captures = store.list("device-1").await.unwrap();
    assert_eq!(captures[0].status, LocalEventStatus::Synced);
}

#[tokio::test]
async fn test_list_and_clear_captures() {
    let (app, store) = create_test_app();
    store
        .add_scanned("device-1", &yaml_payload(EVENT_ID, "First"))
        .await
        .unwrap();

    let listed = app
        .clone()
        .oneshot(json_request("GET", CAPTURES, None))
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    assert_eq!(response_to_json(listed).await.as_array().unwrap().len(), 1);

    let cleared = app
        .oneshot(json_request("DELETE", CAPTURES, None))
        .await
        .unwrap();
    assert_eq!(cleared.status(), StatusCode::OK);
    assert!(store.list("device-1").await.unwrap().is_empty());
}
