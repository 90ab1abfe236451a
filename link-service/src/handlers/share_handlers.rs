use axum::{
    extract::{Extension, State},
    Json,
};

use eventlink_shared::auth::AuthenticatedUser;
use eventlink_shared::models::{
    now_millis, OrganiserSharePayload, ParticipantSharePayload, ShareScope,
};
use eventlink_shared::share::{
    build_share_url_for_host, decode_organiser_token, decode_participant_token,
    encode_organiser_token, encode_participant_token, extract_token_from_url,
};
use eventlink_shared::store::CaptureStore;

use super::SharedState;
use crate::{
    error::{AppError, Result},
    models::{AcceptShareRequest, AcceptedShareResponse, IssueShareRequest, ShareLinkResponse},
};

// Share ids only need to be unguessable enough to tell shares apart
const SHARE_ID_LENGTH: usize = 12;

fn new_share_id() -> String {
    nanoid::nanoid!(SHARE_ID_LENGTH)
}

fn token_from_link(link: &str) -> Result<String> {
    extract_token_from_url(link.trim())
        .ok_or_else(|| AppError::BadRequest("Paste a valid share link or token".into()))
}

// POST /share/organiser - Issue an organiser -> promoter link
pub async fn issue_organiser_link<S: CaptureStore + ?Sized>(
    State(state): State<SharedState<S>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<IssueShareRequest>,
) -> Result<Json<ShareLinkResponse<OrganiserSharePayload>>> {
    let payload = OrganiserSharePayload {
        event_id: request.event_id.trim().to_string(),
        issued_at: now_millis(),
        share_id: new_share_id(),
    };

    let token = encode_organiser_token(&payload)?;
    let url = build_share_url_for_host(&state.link_host, &token);
    tracing::info!(
        "User {} issued organiser link {} for event {}",
        user.0,
        payload.share_id,
        payload.event_id
    );

    Ok(Json(ShareLinkResponse {
        token,
        url,
        payload,
    }))
}

// POST /share/participant - Issue a promoter -> participant link
pub async fn issue_participant_link<S: CaptureStore + ?Sized>(
    State(state): State<SharedState<S>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<IssueShareRequest>,
) -> Result<Json<ShareLinkResponse<ParticipantSharePayload>>> {
    // The issuing promoter is always the authenticated caller
    let payload = ParticipantSharePayload {
        event_id: request.event_id.trim().to_string(),
        issued_at: now_millis(),
        share_id: new_share_id(),
        promoter_id: Some(user.0),
    };

    let token = encode_participant_token(&payload)?;
    let url = build_share_url_for_host(&state.link_host, &token);
    tracing::info!(
        "Promoter {:?} issued participant link {} for event {}",
        payload.promoter_id,
        payload.share_id,
        payload.event_id
    );

    Ok(Json(ShareLinkResponse {
        token,
        url,
        payload,
    }))
}

// POST /share/organiser/accept - Promoter pastes an organiser link
pub async fn accept_organiser_link(
    Json(request): Json<AcceptShareRequest>,
) -> Result<Json<AcceptedShareResponse<OrganiserSharePayload>>> {
    let token = token_from_link(&request.link)?;
    let payload = decode_organiser_token(&token)?;
    tracing::debug!("Accepted organiser link for event {}", payload.event_id);

    Ok(Json(AcceptedShareResponse {
        scope: ShareScope::Organiser,
        token,
        payload,
    }))
}

// POST /share/participant/accept - Participant pastes a promoter's link
pub async fn accept_participant_link(
    Json(request): Json<AcceptShareRequest>,
) -> Result<Json<AcceptedShareResponse<ParticipantSharePayload>>> {
    let token = token_from_link(&request.link)?;
    let payload = decode_participant_token(&token)?;
    tracing::debug!("Accepted participant link for event {}", payload.event_id);

    Ok(Json(AcceptedShareResponse {
        scope: ShareScope::Participant,
        token,
        payload,
    }))
}
