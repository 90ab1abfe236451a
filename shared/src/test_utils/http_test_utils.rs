use axum::body::to_bytes;
use serde_json::Value;

/// Helper function to extract JSON from an Axum response
///
/// Empty bodies come back as `Value::Null`.
pub async fn response_to_json(response: axum::response::Response) -> Value {
    let body = response.into_body();
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

/// Helper function to build an unauthenticated JSON request
pub fn json_request(
    method: &str,
    path: &str,
    body: Option<serde_json::Value>,
) -> http::Request<axum::body::Body> {
    let builder = http::Request::builder().method(method).uri(path);
    match body {
        Some(json_body) => builder
            .header("content-type", "application/json")
            .body(axum::body::Body::from(json_body.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    }
}
