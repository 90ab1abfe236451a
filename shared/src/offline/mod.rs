//! Offline QR payload parsing.
//!
//! Scanned text is sniffed with cheap containment/prefix checks before any real
//! parsing, since this runs on every camera frame. Two shapes are accepted: a
//! compact YAML-like block and a JSON object. Anything else yields `None`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ParsedEventInfo;

mod display;
mod json;
mod yaml;

pub use display::{format_event_time, TIME_TBD};

// Candidate keys per logical field, tried in order. Short aliases keep QR codes
// small and must stay supported for codes already printed.
pub(crate) const TITLE_KEYS: &[&str] = &["title", "t"];
pub(crate) const START_KEYS: &[&str] = &["start", "start_datetime", "s"];
pub(crate) const PROMOTER_KEYS: &[&str] = &["promoterId", "p"];
pub(crate) const SHARE_KEYS: &[&str] = &["shareId", "i"];

static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid pattern is valid")
});

/// True for canonical 8-4-4-4-12 hex UUID text, any case
pub fn is_uuid(value: &str) -> bool {
    UUID_PATTERN.is_match(value)
}

/// Parses scanned QR text into an event reference.
///
/// YAML is tried first, then JSON. Returns `None` for anything that does not
/// carry a UUID event id and a non-empty title; foreign QR content is routine
/// and never an error.
pub fn parse_qr_payload(data: &str) -> Option<ParsedEventInfo> {
    let trimmed = data.trim();
    if trimmed.is_empty() {
        return None;
    }

    if yaml::looks_like_yaml(trimmed) {
        if let Some(info) = yaml::parse(trimmed) {
            return Some(info);
        }
    }

    if json::looks_like_json(trimmed) {
        return json::parse(trimmed, data);
    }

    log::trace!("QR payload matched no known format ({} bytes)", data.len());
    None
}

/// Same as [`parse_qr_payload`] for raw scanner bytes; non UTF-8 input yields `None`.
pub fn parse_qr_bytes(data: &[u8]) -> Option<ParsedEventInfo> {
    std::str::from_utf8(data).ok().and_then(parse_qr_payload)
}

/// Fields pulled out of either format before validation
#[derive(Default)]
pub(crate) struct ExtractedFields {
    pub event_id: Option<String>,
    pub title: Option<String>,
    pub start_time: Option<String>,
    pub promoter_id: Option<String>,
    pub share_id: Option<String>,
}

impl ExtractedFields {
    /// Applies the required-field and UUID gates shared by both formats.
    pub(crate) fn into_event_info(self, raw: &str) -> Option<ParsedEventInfo> {
        let event_id = self.event_id.filter(|id| !id.is_empty())?;
        let title = self.title.filter(|title| !title.is_empty())?;

        if !is_uuid(&event_id) {
            log::debug!("Discarding QR payload with non-UUID event id: {}", event_id);
            return None;
        }

        Some(ParsedEventInfo {
            event_id,
            title,
            start_time: self.start_time.unwrap_or_default(),
            promoter_id: self.promoter_id.filter(|p| !p.is_empty()),
            share_id: self.share_id.filter(|s| !s.is_empty()),
            raw: raw.to_string(),
        })
    }
}
