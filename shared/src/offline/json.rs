use serde_json::{Map, Value};

use super::{ExtractedFields, PROMOTER_KEYS, SHARE_KEYS, START_KEYS, TITLE_KEYS};
use crate::models::ParsedEventInfo;

const EVENT_ID_KEYS: &[&str] = &["id", "eventId", "e"];

pub(super) fn looks_like_json(trimmed: &str) -> bool {
    trimmed.starts_with('{') && trimmed.ends_with('}')
}

// First key holding a non-empty string wins
fn field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .filter_map(Value::as_str)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Parses the trimmed text; `raw` is the caller's untouched input.
pub(super) fn parse(trimmed: &str, raw: &str) -> Option<ParsedEventInfo> {
    let parsed: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(err) => {
            log::trace!("QR payload looked like JSON but failed to parse: {}", err);
            return None;
        }
    };
    let root = parsed.as_object()?;

    // Nested `event`/`share` sections, or a flat object when `event` is absent or falsy
    let event = match root.get("event") {
        Some(value) if !is_falsy(value) => value.as_object()?,
        _ => root,
    };
    let empty = Map::new();
    let share = root
        .get("share")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let fields = ExtractedFields {
        event_id: field(event, EVENT_ID_KEYS),
        title: field(event, TITLE_KEYS),
        start_time: field(event, START_KEYS),
        promoter_id: field(share, PROMOTER_KEYS).or_else(|| field(event, PROMOTER_KEYS)),
        share_id: field(share, SHARE_KEYS).or_else(|| field(event, SHARE_KEYS)),
    };
    fields.into_event_info(raw)
}
