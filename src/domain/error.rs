//! Error types for Cassa API and transaction view operations.
//!
//! Every failure the admin client can surface to the user is one variant of
//! [`CassaError`]. Network, HTTP status and decoding failures are grouped as
//! network failures; a 2xx response carrying an `error` field is reported by
//! the server itself; exceeding the load limit ceiling never touches the
//! network at all.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for Cassa client and view operations.
#[derive(Debug, Error)]
pub enum CassaError {
    /// Transport-level failure from the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Numeric status code.
        status: u16,
        /// Response body text, possibly empty.
        body: String,
    },

    /// The server answered 2xx but reported an error in the payload.
    #[error("Server error: {0}")]
    ServerReported(String),

    /// The response body could not be decoded.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// "Load more" would push the limit past the hard ceiling.
    #[error("Maximum number of transactions to display: {max}")]
    CeilingExceeded {
        /// The ceiling that was hit.
        max: u32,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CassaError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new HTTP status error.
    #[must_use]
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns `true` for failures caused by the request or its transport:
    /// rejected connections, non-2xx statuses and undecodable bodies.
    #[must_use]
    pub const fn is_network_failure(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::HttpStatus { .. } | Self::Parse { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cassa_error_display() {
        assert_eq!(
            CassaError::parse("bad json").to_string(),
            "Parse error: bad json"
        );
        assert_eq!(
            CassaError::http_status(500, "boom").to_string(),
            "HTTP 500: boom"
        );
        assert_eq!(
            CassaError::ServerReported("no access".into()).to_string(),
            "Server error: no access"
        );
        assert_eq!(
            CassaError::CeilingExceeded { max: 4000 }.to_string(),
            "Maximum number of transactions to display: 4000"
        );
        assert_eq!(
            CassaError::invalid_input("empty").to_string(),
            "Invalid input: empty"
        );
    }

    #[test]
    fn test_network_failure_grouping() {
        assert!(CassaError::http_status(404, "").is_network_failure());
        assert!(CassaError::parse("truncated").is_network_failure());
        assert!(!CassaError::ServerReported("x".into()).is_network_failure());
        assert!(!CassaError::CeilingExceeded { max: 4000 }.is_network_failure());
        assert!(!CassaError::invalid_input("x").is_network_failure());
    }
}
