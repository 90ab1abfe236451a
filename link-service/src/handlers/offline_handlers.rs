use axum::Json;

use eventlink_shared::offline::{format_event_time, parse_qr_payload};

use crate::{
    error::{AppError, Result},
    models::{ParsedQrResponse, QrPayloadRequest},
};

// POST /offline/parse - Decode a scanned QR payload without queueing it
pub async fn parse_payload(Json(request): Json<QrPayloadRequest>) -> Result<Json<ParsedQrResponse>> {
    let event = parse_qr_payload(&request.payload).ok_or_else(|| {
        AppError::Unprocessable("QR payload is not a recognised event code".into())
    })?;
    let display_time = format_event_time(&event.start_time);

    Ok(Json(ParsedQrResponse {
        event,
        display_time,
    }))
}
