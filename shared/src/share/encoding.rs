use base64::{engine::general_purpose::URL_SAFE_NO_PAD, DecodeError, Engine as _};

// Share tokens and JWT payloads both use the unpadded URL-safe alphabet.
const ENGINE: base64::engine::GeneralPurpose = URL_SAFE_NO_PAD;

pub(crate) fn to_base64_url(input: &[u8]) -> String {
    ENGINE.encode(input)
}

/// Decodes base64url text, tolerating trailing `=` padding from other encoders.
pub(crate) fn from_base64_url(input: &str) -> Result<Vec<u8>, DecodeError> {
    ENGINE.decode(input.trim_end_matches('='))
}
