use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::{ExtractedFields, PROMOTER_KEYS, SHARE_KEYS, START_KEYS, TITLE_KEYS};
use crate::models::ParsedEventInfo;

const EVENT_ID_KEYS: &[&str] = &["id", "e"];

struct FieldPattern {
    quoted: Regex,
    bare: Regex,
}

impl FieldPattern {
    fn new(key: &str) -> Self {
        let key = regex::escape(key);
        Self {
            quoted: Regex::new(&format!(r#"(?m)^\s*{}:\s*['"]([^'"]+)['"]"#, key))
                .expect("quoted field pattern is valid"),
            bare: Regex::new(&format!(r#"(?m)^\s*{}:\s*([^\n\r'"]+)"#, key))
                .expect("bare field pattern is valid"),
        }
    }

    fn extract(&self, data: &str) -> Option<String> {
        [&self.quoted, &self.bare].iter().find_map(|pattern| {
            pattern
                .captures(data)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
    }
}

static PATTERNS: Lazy<HashMap<&'static str, FieldPattern>> = Lazy::new(|| {
    [EVENT_ID_KEYS, TITLE_KEYS, START_KEYS, PROMOTER_KEYS, SHARE_KEYS]
        .iter()
        .flat_map(|keys| keys.iter())
        .map(|key| (*key, FieldPattern::new(key)))
        .collect()
});

/// Cheap structural check; not a YAML parse.
pub(super) fn looks_like_yaml(data: &str) -> bool {
    data.contains(':')
        && data.contains('\n')
        && (data.contains("v:") || data.contains("event:") || data.contains("e:"))
}

// First key in `keys` with a non-empty value wins
fn field(data: &str, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| PATTERNS.get(*key))
        .filter_map(|pattern| pattern.extract(data))
        .find(|value| !value.is_empty())
}

pub(super) fn parse(data: &str) -> Option<ParsedEventInfo> {
    let fields = ExtractedFields {
        event_id: field(data, EVENT_ID_KEYS),
        title: field(data, TITLE_KEYS),
        start_time: field(data, START_KEYS),
        promoter_id: field(data, PROMOTER_KEYS),
        share_id: field(data, SHARE_KEYS),
    };
    fields.into_event_info(data)
}
