//! Share-link tokens.
//!
//! A token is `base64url(JSON(payload))` without padding. The payload carries a
//! `scope` tag that is checked on decode so an organiser link can never be
//! consumed where a participant link is expected, and vice versa. Tokens are not
//! signed; the backend remains the authority on whether a share is valid.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::TokenError;
use crate::models::{OrganiserSharePayload, ParticipantSharePayload, ShareScope};

pub(crate) mod encoding;

use encoding::{from_base64_url, to_base64_url};

/// Host used by [`build_share_url`]
pub const DEFAULT_LINK_HOST: &str = "link.local";

static BARE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("bare token pattern is valid")
});

// Payload as it appears on the wire, scope first
#[derive(Serialize)]
struct Tagged<'a, T: Serialize> {
    scope: ShareScope,
    #[serde(flatten)]
    payload: &'a T,
}

// Untrusted payload read back from a token; every field is validated before use
#[derive(Deserialize)]
struct WirePayload {
    #[serde(default)]
    scope: Option<String>,
    #[serde(rename = "eventId", default)]
    event_id: Option<String>,
    #[serde(rename = "issuedAt", default)]
    issued_at: i64,
    #[serde(rename = "shareId", default)]
    share_id: String,
    #[serde(rename = "promoterId", default)]
    promoter_id: Option<String>,
}

fn encode_tagged<T: Serialize>(scope: ShareScope, payload: &T) -> Result<String, TokenError> {
    let json = serde_json::to_vec(&Tagged { scope, payload })
        .map_err(|e| TokenError::InvalidPayload(e.to_string()))?;
    Ok(to_base64_url(&json))
}

fn decode_checked(token: &str, expected: ShareScope) -> Result<WirePayload, TokenError> {
    let bytes = from_base64_url(token.trim())
        .map_err(|e| TokenError::InvalidEncoding(e.to_string()))?;
    let wire: WirePayload = serde_json::from_slice(&bytes)
        .map_err(|e| TokenError::InvalidPayload(e.to_string()))?;

    if wire.scope.as_deref() != Some(expected.as_str()) {
        log::debug!("Rejecting share token: expected scope {}, got {:?}", expected, wire.scope);
        return Err(TokenError::ScopeMismatch {
            expected,
            found: wire.scope.unwrap_or_else(|| "missing".into()),
        });
    }

    match wire.event_id.as_deref() {
        Some(id) if !id.is_empty() => Ok(wire),
        _ => Err(TokenError::MissingEventId),
    }
}

/// Encodes an organiser (organiser -> promoter) share token.
pub fn encode_organiser_token(payload: &OrganiserSharePayload) -> Result<String, TokenError> {
    if payload.event_id.is_empty() {
        return Err(TokenError::MissingEventId);
    }
    encode_tagged(ShareScope::Organiser, payload)
}

/// Decodes an organiser token, failing on any other scope or a missing event id.
pub fn decode_organiser_token(token: &str) -> Result<OrganiserSharePayload, TokenError> {
    let wire = decode_checked(token, ShareScope::Organiser)?;
    Ok(OrganiserSharePayload {
        event_id: wire.event_id.unwrap_or_default(),
        issued_at: wire.issued_at,
        share_id: wire.share_id,
    })
}

/// Encodes a participant (promoter -> participant) share token.
pub fn encode_participant_token(payload: &ParticipantSharePayload) -> Result<String, TokenError> {
    if payload.event_id.is_empty() {
        return Err(TokenError::MissingEventId);
    }
    encode_tagged(ShareScope::Participant, payload)
}

/// Decodes a participant token, failing on any other scope or a missing event id.
pub fn decode_participant_token(token: &str) -> Result<ParticipantSharePayload, TokenError> {
    let wire = decode_checked(token, ShareScope::Participant)?;
    Ok(ParticipantSharePayload {
        event_id: wire.event_id.unwrap_or_default(),
        issued_at: wire.issued_at,
        share_id: wire.share_id,
        promoter_id: wire.promoter_id,
    })
}

pub fn build_share_url(token: &str) -> String {
    build_share_url_for_host(DEFAULT_LINK_HOST, token)
}

pub fn build_share_url_for_host(host: &str, token: &str) -> String {
    format!("https://{}/?t={}", host, token)
}

/// Pulls a token out of pasted text.
///
/// Full URLs yield their `t` (or `token`) query parameter. Anything that is not
/// a URL is accepted as a bare token only if it is entirely base64url characters.
/// Returns `None` instead of failing since the input is arbitrary user text.
pub fn extract_token_from_url(input: &str) -> Option<String> {
    match Url::parse(input) {
        Ok(url) => {
            let param = |name: &str| {
                url.query_pairs()
                    .find(|(key, value)| key == name && !value.is_empty())
                    .map(|(_, value)| value.into_owned())
            };
            param("t").or_else(|| param("token"))
        }
        Err(_) => {
            let trimmed = input.trim();
            if BARE_TOKEN.is_match(trimmed) {
                Some(trimmed.to_string())
            } else {
                None
            }
        }
    }
}
