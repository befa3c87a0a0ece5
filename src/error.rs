//! Client error types.

use reqwest::StatusCode;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Client error type.
///
/// HTTP failures map onto a fixed taxonomy by status code; everything
/// transport-level (DNS, TCP, TLS, timeout) surfaces as [`Error::Connection`].
/// Nothing is retried or swallowed internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced an HTTP response.
    #[error("API connection failed")]
    Connection {
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Server returned HTTP 401.
    #[error("Authentication failed (HTTP {status})")]
    Authentication {
        /// HTTP status code.
        status: u16,
    },

    /// Server returned HTTP 404.
    #[error("Resource not found (HTTP {status})")]
    NotFound {
        /// HTTP status code.
        status: u16,
    },

    /// Server returned HTTP 422.
    #[error("Validation error (HTTP {status})")]
    Validation {
        /// HTTP status code.
        status: u16,
    },

    /// Server returned any other non-2xx status, including 5xx.
    #[error("API request failed (HTTP {status})")]
    Api {
        /// HTTP status code.
        status: u16,
    },

    /// Local file precondition failed before any network call.
    #[error("File upload error: {0}")]
    FileUpload(String),

    /// WebSocket transport failure.
    #[error("WebSocket error: {0}")]
    WebSocket(#[source] tungstenite::Error),

    /// Operation attempted on a closed WebSocket session.
    #[error("WebSocket session is closed")]
    WebSocketClosed,

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Map a non-2xx HTTP status onto its error kind.
    pub(crate) fn from_status(status: StatusCode) -> Self {
        let status = status.as_u16();
        match status {
            401 => Error::Authentication { status },
            404 => Error::NotFound { status },
            422 => Error::Validation { status },
            _ => Error::Api { status },
        }
    }

    /// Check if this is a connection-level error (no HTTP response).
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is a validation error.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status } if *status >= 500)
    }

    /// Check if this is a WebSocket error (including closed-session).
    pub fn is_websocket_error(&self) -> bool {
        matches!(self, Error::WebSocket(_) | Error::WebSocketClosed)
    }

    /// HTTP status code attached to the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { status }
            | Error::NotFound { status }
            | Error::Validation { status }
            | Error::Api { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            Error::from_status(StatusCode::UNAUTHORIZED),
            Error::Authentication { status: 401 }
        ));
        assert!(matches!(
            Error::from_status(StatusCode::NOT_FOUND),
            Error::NotFound { status: 404 }
        ));
        assert!(matches!(
            Error::from_status(StatusCode::UNPROCESSABLE_ENTITY),
            Error::Validation { status: 422 }
        ));
        assert!(matches!(
            Error::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            Error::Api { status: 500 }
        ));
        assert!(matches!(
            Error::from_status(StatusCode::BAD_REQUEST),
            Error::Api { status: 400 }
        ));
    }

    #[test]
    fn test_predicates() {
        assert!(Error::from_status(StatusCode::UNAUTHORIZED).is_auth_error());
        assert!(Error::from_status(StatusCode::NOT_FOUND).is_not_found());
        assert!(Error::from_status(StatusCode::UNPROCESSABLE_ENTITY).is_validation_error());
        assert!(Error::from_status(StatusCode::BAD_GATEWAY).is_server_error());
        assert!(Error::WebSocketClosed.is_websocket_error());
        assert_eq!(Error::from_status(StatusCode::NOT_FOUND).status(), Some(404));
        assert_eq!(Error::WebSocketClosed.status(), None);
    }
}
