use serde::{Deserialize, Serialize};

use eventlink_shared::models::{LocalEvent, ParsedEventInfo, ShareScope, SyncEntryResult};

// Request DTOs
#[derive(Deserialize, Debug)]
pub struct IssueShareRequest {
    #[serde(rename = "eventId")]
    pub event_id: String,
}

#[derive(Deserialize, Debug)]
pub struct AcceptShareRequest {
    /// Pasted share URL or bare token
    pub link: String,
}

#[derive(Deserialize, Debug)]
pub struct QrPayloadRequest {
    pub payload: String,
}

#[derive(Deserialize, Debug)]
pub struct ApplySyncRequest {
    pub entries: Vec<SyncEntryResult>,
    // Events the backend already lists for this device
    #[serde(rename = "eventIds", default)]
    pub event_ids: Vec<String>,
}

// Response DTOs

#[derive(Serialize, Debug)]
pub struct ShareLinkResponse<T> {
    pub token: String,
    pub url: String,
    pub payload: T,
}

#[derive(Serialize, Debug)]
pub struct AcceptedShareResponse<T> {
    pub scope: ShareScope,
    pub token: String,
    pub payload: T,
}

#[derive(Serialize, Debug)]
pub struct ParsedQrResponse {
    pub event: ParsedEventInfo,
    #[serde(rename = "displayTime")]
    pub display_time: String,
}

#[derive(Serialize, Debug)]
pub struct CaptureResponse {
    pub capture: LocalEvent,
    pub duplicate: bool,
    #[serde(rename = "displayTime")]
    pub display_time: String,
}
