//! Error types and retry classification for the attribution crate.
//!
//! This module provides:
//! - [`AttributionError`]: The main error enum for all partner API operations
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while fetching reports from the attribution partner.
///
/// Each variant is classified into a [`RetryClass`] via the
/// [`retry_class`](Self::retry_class) method, which tells the caller whether
/// the request is worth repeating or should be substituted immediately.
#[derive(Error, Debug)]
pub enum AttributionError {
    /// The partner rejected the API token (HTTP 401).
    /// This is a terminal error - retrying with the same token won't help.
    #[error("Unauthorized: the attribution API token was rejected")]
    Unauthorized,

    /// The partner rate limited the request (HTTP 429).
    /// Should retry with exponential backoff.
    #[error("Rate limited by the attribution API")]
    RateLimited,

    /// The request timed out before the partner responded.
    /// Should retry with exponential backoff.
    #[error("Attribution API request timed out")]
    Timeout,

    /// The partner returned a non-success status outside the dedicated
    /// variants above.
    #[error("Attribution API error: status {status} - {message}")]
    Api {
        /// The HTTP status code returned by the partner
        status: u16,
        /// The response body, when one was readable
        message: String,
    },

    /// The response body could not be decoded as the expected report shape.
    #[error("Failed to decode attribution response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A network error occurred while communicating with the partner.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl AttributionError {
    /// Returns the retry classification for this error.
    ///
    /// - [`RetryClass::Never`]: Don't retry, the error is terminal
    /// - [`RetryClass::WithBackoff`]: Retry with exponential backoff
    ///
    /// # Examples
    ///
    /// ```
    /// use adlytics_attribution::errors::{AttributionError, RetryClass};
    ///
    /// assert_eq!(AttributionError::RateLimited.retry_class(), RetryClass::WithBackoff);
    /// assert_eq!(AttributionError::Unauthorized.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            // Terminal errors - never retry
            Self::Unauthorized | Self::Api { .. } | Self::Decode(_) => RetryClass::Never,

            // Transient errors - retry with backoff
            Self::RateLimited | Self::Timeout | Self::Network(_) => RetryClass::WithBackoff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_never_retries() {
        assert_eq!(AttributionError::Unauthorized.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_api_error_never_retries() {
        let error = AttributionError::Api {
            status: 500,
            message: "Internal server error".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_decode_error_never_retries() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json")
            .expect_err("input is not valid JSON");
        let error = AttributionError::Decode(json_error);
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_rate_limited_retries_with_backoff() {
        assert_eq!(
            AttributionError::RateLimited.retry_class(),
            RetryClass::WithBackoff
        );
    }

    #[test]
    fn test_timeout_retries_with_backoff() {
        assert_eq!(
            AttributionError::Timeout.retry_class(),
            RetryClass::WithBackoff
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", AttributionError::RateLimited),
            "Rate limited by the attribution API"
        );

        let error = AttributionError::Api {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Attribution API error: status 503 - maintenance"
        );
    }
}
