use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod capture;

pub use capture::{
    CaptureOutcome, LocalEvent, LocalEventStatus, SyncEntry, SyncEntryResult, SyncLocalStatus,
    SyncRequest,
};

/// Role context a share token was issued for.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShareScope {
    Organiser,
    Participant,
}

impl ShareScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareScope::Organiser => "organiser",
            ShareScope::Participant => "participant",
        }
    }
}

impl fmt::Display for ShareScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Organiser -> promoter share payload. The scope tag is added by the codec.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OrganiserSharePayload {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "issuedAt")]
    pub issued_at: i64, // epoch millis
    #[serde(rename = "shareId")]
    pub share_id: String,
}

/// Promoter -> participant share payload. The scope tag is added by the codec.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ParticipantSharePayload {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "issuedAt")]
    pub issued_at: i64, // epoch millis
    #[serde(rename = "shareId")]
    pub share_id: String,
    #[serde(rename = "promoterId", skip_serializing_if = "Option::is_none")]
    pub promoter_id: Option<String>,
}

/// Event reference recovered from a scanned QR payload
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ParsedEventInfo {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub title: String,
    #[serde(rename = "startTime")]
    pub start_time: String, // ISO-8601 or empty
    #[serde(rename = "promoterId", skip_serializing_if = "Option::is_none")]
    pub promoter_id: Option<String>,
    #[serde(rename = "shareId", skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,
    pub raw: String, // kept verbatim for re-transmission during sync
}

// Response DTOs for general use across services
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

// Helper function to get current timestamp in epoch millis
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
