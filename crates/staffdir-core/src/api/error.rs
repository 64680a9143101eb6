use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The two ways a directory load can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Non-success status or transport-level failure
    Fetch,
    /// Body is not JSON or does not match the expected shape
    Decode,
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let cut: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
            format!("{}... (truncated, {} total bytes)", cut, body.len())
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        ApiError::Status {
            status,
            body: Self::truncate_body(body),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Status { .. } | ApiError::Network(_) => FailureKind::Fetch,
            ApiError::Decode(_) => FailureKind::Decode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_error_is_fetch_failure() {
        let err = ApiError::from_status(StatusCode::SERVICE_UNAVAILABLE, "down");
        assert_eq!(err.kind(), FailureKind::Fetch);
        assert_eq!(
            err.to_string(),
            "Request failed with status 503 Service Unavailable: down"
        );
    }

    #[test]
    fn test_decode_error_is_decode_failure() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json")
            .expect_err("malformed JSON should not parse");
        let err = ApiError::from(json_err);
        assert_eq!(err.kind(), FailureKind::Decode);
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "x".repeat(MAX_ERROR_BODY_LENGTH + 20);
        match ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body) {
            ApiError::Status { body, .. } => {
                assert!(body.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
                assert!(body.ends_with("(truncated, 520 total bytes)"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
