use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::Claims;

/// Builds a signed JWT for tests; the middleware only reads the payload
pub fn create_jwt_token(user_id: &str) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time is before Unix epoch")
        .as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: Some("promoter@example.com".to_string()),
        role: Some("promoter".to_string()),
        exp: now + 3600,
        iat: now - 100,
    };

    let secret = "test_secret_key_for_jwt_encoding_in_tests";
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to create JWT")
}

/// Helper function to create an authorization header with a bearer token for tests
pub fn create_auth_header(user_id: &str) -> (String, String) {
    let token = create_jwt_token(user_id);
    ("authorization".to_string(), format!("Bearer {}", token))
}

/// Helper function to create a test request with authentication headers
pub fn create_test_request(
    method: &str,
    path: &str,
    user_id: &str,
    body: Option<serde_json::Value>,
) -> http::Request<axum::body::Body> {
    let (auth_key, auth_value) = create_auth_header(user_id);
    let builder = http::Request::builder()
        .method(method)
        .uri(path)
        .header(auth_key, auth_value);

    match body {
        Some(json_body) => builder
            .header("content-type", "application/json")
            .body(axum::body::Body::from(json_body.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    }
}
