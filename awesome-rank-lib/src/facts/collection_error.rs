use strum::Display;
use thiserror::Error;

/// Distinguishes the ways a call to the hosting API can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionErrorCode {
    /// The caller exceeded its API quota (HTTP 403 or 429).
    RateLimited,

    /// The repository does not resolve, or the credential was rejected (HTTP 404 or 401).
    NotFoundOrUnauthorized,

    /// A success status with a body that could not be decoded.
    MalformedResponse,

    /// Any other non-success status, or a transport-level failure.
    UpstreamFailure,
}

/// Error raised while fetching facts about a repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct CollectionError {
    code: CollectionErrorCode,
    message: String,
}

impl CollectionError {
    #[must_use]
    pub fn new(code: CollectionErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn code(&self) -> CollectionErrorCode {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.code == CollectionErrorCode::RateLimited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display() {
        assert_eq!(CollectionErrorCode::RateLimited.to_string(), "RATE_LIMITED");
        assert_eq!(CollectionErrorCode::NotFoundOrUnauthorized.to_string(), "NOT_FOUND_OR_UNAUTHORIZED");
        assert_eq!(CollectionErrorCode::MalformedResponse.to_string(), "MALFORMED_RESPONSE");
        assert_eq!(CollectionErrorCode::UpstreamFailure.to_string(), "UPSTREAM_FAILURE");
    }

    #[test]
    fn test_accessors() {
        let error = CollectionError::new(CollectionErrorCode::RateLimited, "API rate limit exceeded");
        assert_eq!(error.code(), CollectionErrorCode::RateLimited);
        assert_eq!(error.message(), "API rate limit exceeded");
        assert!(error.is_rate_limited());
        assert_eq!(error.to_string(), "RATE_LIMITED: API rate limit exceeded");
    }
}
