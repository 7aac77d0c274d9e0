use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Unauthorized - invalid or expired credentials")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request rejected: {0}")]
    BadRequest(String),

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// JSON error envelope the API uses: `{"message": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    /// Server-provided message from a JSON error body, if present.
    pub fn extract_message(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()?
            .message
            .filter(|m| !m.trim().is_empty())
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = Self::extract_message(body);
        let detail = message
            .clone()
            .unwrap_or_else(|| Self::truncate_body(body));
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(detail),
            404 => ApiError::NotFound(detail),
            429 => ApiError::RateLimited,
            400..=499 => ApiError::BadRequest(detail),
            500..=599 => ApiError::ServerError(detail),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, detail)),
        }
    }

    /// Message suitable for a status line, when the error carries one.
    /// Raw status dumps (`InvalidResponse`) stay out of the UI.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ApiError::AccessDenied(m)
            | ApiError::NotFound(m)
            | ApiError::BadRequest(m)
            | ApiError::ServerError(m)
                if !m.is_empty() =>
            {
                Some(m)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_maps_codes() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, "missing"),
            ApiError::NotFound(m) if m == "missing"
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, ""),
            ApiError::RateLimited
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            ApiError::ServerError(m) if m == "boom"
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_REQUEST, "nope"),
            ApiError::BadRequest(m) if m == "nope"
        ));
    }

    #[test]
    fn test_from_status_prefers_json_message() {
        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message": "Email already registered"}"#,
        );
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "Email already registered"));
        assert_eq!(err.user_message(), Some("Email already registered"));
    }

    #[test]
    fn test_user_message_hides_raw_dumps() {
        let err = ApiError::from_status(StatusCode::from_u16(302).unwrap(), "<html>moved</html>");
        assert!(matches!(err, ApiError::InvalidResponse(_)));
        assert_eq!(err.user_message(), None);
        assert_eq!(ApiError::Unauthorized.user_message(), None);
    }

    #[test]
    fn test_truncate_body_caps_length() {
        let long_body = "x".repeat(2000);
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &long_body);
        match err {
            ApiError::ServerError(m) => {
                assert!(m.len() < 600);
                assert!(m.contains("truncated"));
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
