use serde_json::json;

use crate::offline::{format_event_time, is_uuid, parse_qr_bytes, parse_qr_payload, TIME_TBD};
use crate::test_utils::fixtures::{json_payload, short_yaml_payload, yaml_payload, EVENT_ID};
use crate::test_utils::test_logging::init_test_logging;

const SPEC_YAML: &str = "v: 1\nevent:\n  id: '550e8400-e29b-41d4-a716-446655440000'\n  title: 'Test Event'\n  start: '2025-12-15T10:00:00Z'\n";

#[test]
fn test_parse_yaml_payload() {
    init_test_logging();

    let info = parse_qr_payload(SPEC_YAML).expect("yaml payload should parse");

    assert_eq!(info.event_id, EVENT_ID);
    assert_eq!(info.title, "Test Event");
    assert_eq!(info.start_time, "2025-12-15T10:00:00Z");
    assert_eq!(info.promoter_id, None);
    assert_eq!(info.share_id, None);
    // YAML keeps the trimmed text
    assert_eq!(info.raw, SPEC_YAML.trim());
}

#[test]
fn test_parse_yaml_with_share_section() {
    let info = parse_qr_payload(&yaml_payload(EVENT_ID, "Launch Night")).unwrap();

    assert_eq!(info.title, "Launch Night");
    assert_eq!(info.promoter_id.as_deref(), Some("promoter-1"));
    assert_eq!(info.share_id.as_deref(), Some("share-1"));
}

#[test]
fn test_parse_yaml_short_keys_and_bare_values() {
    let info = parse_qr_payload(&short_yaml_payload(EVENT_ID, "Street Fair")).unwrap();

    assert_eq!(info.event_id, EVENT_ID);
    assert_eq!(info.title, "Street Fair");
    assert_eq!(info.start_time, "2025-12-15T10:00:00Z");
    assert_eq!(info.promoter_id.as_deref(), Some("promoter-2"));
    assert_eq!(info.share_id.as_deref(), Some("share-2"));
}

#[test]
fn test_parse_yaml_double_quotes_and_uppercase_uuid() {
    let payload = "v: 1\nevent:\n  id: \"550E8400-E29B-41D4-A716-446655440000\"\n  title: \"Quoted\"\n";

    let info = parse_qr_payload(payload).unwrap();

    assert_eq!(info.event_id, "550E8400-E29B-41D4-A716-446655440000");
    assert_eq!(info.title, "Quoted");
    assert_eq!(info.start_time, "");
}

#[test]
fn test_parse_yaml_start_datetime_alias() {
    let payload = format!(
        "event:\n  id: {}\n  title: Alias\n  start_datetime: 2026-01-02T18:30:00Z\n",
        EVENT_ID
    );

    let info = parse_qr_payload(&payload).unwrap();
    assert_eq!(info.start_time, "2026-01-02T18:30:00Z");
}

#[test]
fn test_parse_json_payload() {
    let payload = r#"{"event":{"id":"550e8400-e29b-41d4-a716-446655440000","title":"Test"},"share":{"promoterId":"p1"}}"#;

    let info = parse_qr_payload(payload).expect("json payload should parse");

    assert_eq!(info.event_id, EVENT_ID);
    assert_eq!(info.title, "Test");
    assert_eq!(info.start_time, "");
    assert_eq!(info.promoter_id.as_deref(), Some("p1"));
    assert_eq!(info.share_id, None);
}

#[test]
fn test_parse_json_keeps_untrimmed_raw() {
    let payload = format!("  {}\n", json_payload(EVENT_ID, "Padded"));

    let info = parse_qr_payload(&payload).unwrap();

    assert_eq!(info.raw, payload);
    assert_eq!(info.share_id.as_deref(), Some("s1"));
}

#[test]
fn test_parse_flat_json_with_short_keys() {
    let payload = json!({
        "e": EVENT_ID,
        "t": "Flat",
        "s": "2025-12-15T10:00:00Z",
        "p": "promoter-9",
        "i": "share-9"
    })
    .to_string();

    let info = parse_qr_payload(&payload).unwrap();

    assert_eq!(info.title, "Flat");
    assert_eq!(info.start_time, "2025-12-15T10:00:00Z");
    assert_eq!(info.promoter_id.as_deref(), Some("promoter-9"));
    assert_eq!(info.share_id.as_deref(), Some("share-9"));
}

#[test]
fn test_parse_json_event_id_alias() {
    let payload = json!({ "eventId": EVENT_ID, "title": "Alias" }).to_string();
    assert_eq!(parse_qr_payload(&payload).unwrap().event_id, EVENT_ID);
}

#[test]
fn test_share_section_wins_over_event_fields() {
    let payload = json!({
        "event": { "id": EVENT_ID, "title": "Both", "p": "from-event" },
        "share": { "promoterId": "from-share" }
    })
    .to_string();

    let info = parse_qr_payload(&payload).unwrap();
    assert_eq!(info.promoter_id.as_deref(), Some("from-share"));
}

#[test]
fn test_invalid_uuid_rejected_in_both_formats() {
    let yaml = "v: 1\nevent:\n  id: 'not-a-uuid'\n  title: 'Test Event'\n";
    let json = r#"{"event":{"id":"not-a-uuid","title":"Test"},"share":{"promoterId":"p1"}}"#;

    assert_eq!(parse_qr_payload(yaml), None);
    assert_eq!(parse_qr_payload(json), None);
}

#[test]
fn test_missing_title_rejected_in_both_formats() {
    let yaml = format!("v: 1\nevent:\n  id: '{}'\n  start: '2025-12-15T10:00:00Z'\n", EVENT_ID);
    let json = json!({ "event": { "id": EVENT_ID } }).to_string();

    assert_eq!(parse_qr_payload(&yaml), None);
    assert_eq!(parse_qr_payload(&json), None);
}

#[test]
fn test_empty_and_foreign_input_yield_none() {
    assert_eq!(parse_qr_payload(""), None);
    assert_eq!(parse_qr_payload("   \n "), None);
    assert_eq!(parse_qr_payload("https://example.com/some/page"), None);
    assert_eq!(parse_qr_payload("WIFI:S:cafe;T:WPA;P:secret;;"), None);
    assert_eq!(parse_qr_payload("{not json at all}"), None);
    assert_eq!(parse_qr_payload("[1, 2, 3]"), None);
}

#[test]
fn test_yaml_without_markers_is_not_sniffed() {
    // Has colons and newlines but none of the v:/event:/e: markers, and is not JSON
    let payload = format!("id: {}\nt: Unmarked\n", EVENT_ID);
    assert_eq!(parse_qr_payload(&payload), None);
}

#[test]
fn test_parse_qr_bytes() {
    assert_eq!(
        parse_qr_bytes(SPEC_YAML.as_bytes()).map(|info| info.title),
        Some("Test Event".to_string())
    );
    assert_eq!(parse_qr_bytes(&[0xff, 0xfe, 0x00]), None);
}

#[test]
fn test_is_uuid() {
    assert!(is_uuid(EVENT_ID));
    assert!(is_uuid("550E8400-E29B-41D4-A716-446655440000"));
    assert!(!is_uuid("550e8400e29b41d4a716446655440000"));
    assert!(!is_uuid("{550e8400-e29b-41d4-a716-446655440000}"));
    assert!(!is_uuid("550e8400-e29b-41d4-a716-44665544000g"));
}

#[test]
fn test_format_event_time() {
    assert_eq!(format_event_time(""), TIME_TBD);
    assert_eq!(format_event_time("not-a-date"), TIME_TBD);
    assert_eq!(format_event_time("2025-13-45T99:00:00Z"), TIME_TBD);

    assert_eq!(format_event_time("2025-12-15T10:00:00Z"), "Mon, Dec 15, 10:00 AM");
    assert_eq!(format_event_time("2025-12-15T18:05:00+01:00"), "Mon, Dec 15, 6:05 PM");
    assert_eq!(format_event_time("2025-12-15T10:00"), "Mon, Dec 15, 10:00 AM");
    assert_eq!(format_event_time("2025-12-15"), "Mon, Dec 15, 12:00 AM");
}

#[test]
fn test_json_non_object_event_section_rejected() {
    let payload = json!({ "event": "x", "id": EVENT_ID, "title": "T" }).to_string();
    assert_eq!(parse_qr_payload(&payload), None);

    let payload = json!({ "event": [1], "id": EVENT_ID, "title": "T" }).to_string();
    assert_eq!(parse_qr_payload(&payload), None);
}

#[test]
fn test_json_falsy_event_section_falls_back_to_root() {
    let payload = json!({ "event": null, "id": EVENT_ID, "title": "Flat" }).to_string();
    let info = parse_qr_payload(&payload).expect("null event should fall back to root");
    assert_eq!(info.title, "Flat");

    let payload = json!({ "event": "", "id": EVENT_ID, "title": "Flat" }).to_string();
    assert_eq!(parse_qr_payload(&payload).map(|info| info.title), Some("Flat".to_string()));
}

#[test]
fn test_json_non_string_title_rejected() {
    let payload = json!({ "event": { "id": EVENT_ID, "title": 5 } }).to_string();
    assert_eq!(parse_qr_payload(&payload), None);
}
