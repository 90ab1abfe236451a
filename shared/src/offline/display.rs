use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder shown when an event has no usable start time
pub const TIME_TBD: &str = "Time TBD";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

// Wall-clock time as written; offsets are kept rather than converted.
fn parse_event_time(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Formats an ISO-8601 start time for display, e.g. `Mon, Dec 15, 10:00 AM`.
///
/// Empty or unparseable input gives [`TIME_TBD`].
pub fn format_event_time(iso: &str) -> String {
    match parse_event_time(iso.trim()) {
        Some(dt) => dt.format("%a, %b %-d, %-I:%M %p").to_string(),
        None => TIME_TBD.to_string(),
    }
}
