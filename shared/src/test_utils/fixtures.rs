//! Sample QR payloads in the shapes printed codes use.

pub const EVENT_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
pub const OTHER_EVENT_ID: &str = "6f1c2b9e-3d4a-4b5c-8d7e-9f0a1b2c3d4e";

/// Long-key YAML block as produced by the backend
pub fn yaml_payload(event_id: &str, title: &str) -> String {
    format!(
        "v: 1\nevent:\n  id: '{}'\n  title: '{}'\n  start: '2025-12-15T10:00:00Z'\nshare:\n  promoterId: 'promoter-1'\n  shareId: 'share-1'\nsig: 'c2lnbmF0dXJl'\n",
        event_id, title
    )
}

/// Short-key YAML block used on space-constrained codes
pub fn short_yaml_payload(event_id: &str, title: &str) -> String {
    format!("v: 1\ne: {}\nt: {}\ns: 2025-12-15T10:00:00Z\np: promoter-2\ni: share-2\n", event_id, title)
}

/// Nested JSON payload
pub fn json_payload(event_id: &str, title: &str) -> String {
    serde_json::json!({
        "event": { "id": event_id, "title": title, "start": "2025-12-15T10:00:00Z" },
        "share": { "promoterId": "p1", "shareId": "s1" }
    })
    .to_string()
}
