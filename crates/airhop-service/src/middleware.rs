//! Request correlation ids.
//!
//! The `X-Request-ID` header is used when present, otherwise a new UUID v7
//! (time-sortable) is generated. The id ends up in log entries and in the
//! `instance` field of problem responses.

use axum::http::HeaderMap;
use uuid::Uuid;

/// Header carrying the correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Newtype wrapper for request correlation IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new UUID v7 request ID.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Extract the request ID from headers or generate a new UUID v7.
pub fn extract_or_generate_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(RequestId::from)
        .unwrap_or_else(RequestId::generate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_existing_request_id() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Request-ID", HeaderValue::from_static("req-123"));
        assert_eq!(extract_or_generate_request_id(&headers).as_str(), "req-123");
    }

    #[test]
    fn test_generate_when_missing_or_blank() {
        let generated = extract_or_generate_request_id(&HeaderMap::new());
        assert_eq!(generated.as_str().len(), 36);

        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static("  "));
        assert_ne!(extract_or_generate_request_id(&headers).as_str().trim(), "");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }
}
