use serde::{Deserialize, Serialize};

use super::ParsedEventInfo;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LocalEventStatus {
    Pending,
    Synced,
    Error,
}

/// A QR scan recorded on a device, waiting to be synced with the backend
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LocalEvent {
    pub id: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub title: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "promoterId", skip_serializing_if = "Option::is_none")]
    pub promoter_id: Option<String>,
    #[serde(rename = "shareId", skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,
    #[serde(rename = "rawPayload")]
    pub raw_payload: String,
    pub status: LocalEventStatus,
    #[serde(rename = "scannedAt")]
    pub scanned_at: i64,
    #[serde(rename = "syncedAt", skip_serializing_if = "Option::is_none")]
    pub synced_at: Option<i64>,
    #[serde(rename = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl LocalEvent {
    /// Builds a pending capture from a parsed payload
    pub fn pending(id: String, parsed: ParsedEventInfo, scanned_at: i64) -> Self {
        Self {
            id,
            event_id: parsed.event_id,
            title: parsed.title,
            start_time: parsed.start_time,
            promoter_id: parsed.promoter_id,
            share_id: parsed.share_id,
            raw_payload: parsed.raw,
            status: LocalEventStatus::Pending,
            scanned_at,
            synced_at: None,
            error_message: None,
        }
    }
}

/// Result of recording a scan
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureOutcome {
    Added(LocalEvent),
    // Event already queued; counts as success for the caller
    Duplicate(LocalEvent),
}

impl CaptureOutcome {
    pub fn event(&self) -> &LocalEvent {
        match self {
            CaptureOutcome::Added(event) | CaptureOutcome::Duplicate(event) => event,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, CaptureOutcome::Duplicate(_))
    }
}

// Backend sync DTOs (snake_case on the wire)

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyncLocalStatus {
    Scanned,
    Rsvp,
    Interested,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SyncEntry {
    pub yaml: String,
    pub local_status: SyncLocalStatus,
    pub scanned_at: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SyncRequest {
    pub device_id: String,
    pub entries: Vec<SyncEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SyncEntryResult {
    pub entry_index: usize,
    pub success: bool,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub rsvp_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
