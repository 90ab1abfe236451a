use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use eventlink_shared::models::{LocalEvent, MessageResponse, SyncRequest};
use eventlink_shared::offline::format_event_time;
use eventlink_shared::store::CaptureStore;

use super::SharedState;
use crate::{
    error::Result,
    models::{ApplySyncRequest, CaptureResponse, QrPayloadRequest},
};

// POST /devices/:deviceId/captures - Queue a scanned QR payload
pub async fn add_capture<S: CaptureStore + ?Sized>(
    State(state): State<SharedState<S>>,
    Path(device_id): Path<String>,
    Json(request): Json<QrPayloadRequest>,
) -> Result<(StatusCode, Json<CaptureResponse>)> {
    let outcome = state.store.add_scanned(&device_id, &request.payload).await?;

    // A repeat scan is still a success for the participant
    let status = if outcome.is_duplicate() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    let duplicate = outcome.is_duplicate();
    let capture = outcome.event().clone();
    let display_time = format_event_time(&capture.start_time);

    Ok((
        status,
        Json(CaptureResponse {
            capture,
            duplicate,
            display_time,
        }),
    ))
}

// GET /devices/:deviceId/captures
pub async fn list_captures<S: CaptureStore + ?Sized>(
    State(state): State<SharedState<S>>,
    Path(device_id): Path<String>,
) -> Result<Json<Vec<LocalEvent>>> {
    Ok(Json(state.store.list(&device_id).await?))
}

// DELETE /devices/:deviceId/captures
pub async fn clear_captures<S: CaptureStore + ?Sized>(
    State(state): State<SharedState<S>>,
    Path(device_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.store.clear(&device_id).await?;
    tracing::info!("Cleared captures for device {}", device_id);

    Ok(Json(MessageResponse {
        message: format!("Captures cleared for device {}", device_id),
    }))
}

// GET /devices/:deviceId/sync - Pending captures in backend sync shape
pub async fn get_sync_request<S: CaptureStore + ?Sized>(
    State(state): State<SharedState<S>>,
    Path(device_id): Path<String>,
) -> Result<Json<SyncRequest>> {
    Ok(Json(state.store.sync_request(&device_id).await?))
}

// POST /devices/:deviceId/sync - Record backend sync results
pub async fn apply_sync<S: CaptureStore + ?Sized>(
    State(state): State<SharedState<S>>,
    Path(device_id): Path<String>,
    Json(request): Json<ApplySyncRequest>,
) -> Result<Json<Vec<LocalEvent>>> {
    let mut captures = state
        .store
        .apply_sync_results(&device_id, &request.entries)
        .await?;

    if !request.event_ids.is_empty() {
        captures = state.store.mark_synced(&device_id, &request.event_ids).await?;
    }

    tracing::info!(
        "Applied {} sync results for device {}",
        request.entries.len(),
        device_id
    );
    Ok(Json(captures))
}
