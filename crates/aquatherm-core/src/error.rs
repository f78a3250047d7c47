//! Error types for AquaThermX

use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AquathermError {
    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Geographic errors
    #[error("Invalid coordinate ({lat}, {lng}): latitude must be within [-90, 90] and longitude within [-180, 180]")]
    InvalidCoordinate { lat: f64, lng: f64 },

    // Client construction errors
    #[error("HTTP client unavailable: {0}")]
    HttpClient(String),
}

pub type Result<T> = std::result::Result<T, AquathermError>;

/// Failure category of a single analysis call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Network unreachable, connection refused or timeout
    Transport,
    /// Non-success status from the analysis service
    ServerRejected,
    /// Success status but the body does not match the result schema
    MalformedResponse,
}

impl ErrorKind {
    /// Whether retrying with the same or corrected input can succeed.
    ///
    /// A malformed response indicates a contract mismatch between this client
    /// and the service, which the operator cannot fix from the console.
    pub fn is_user_recoverable(&self) -> bool {
        !matches!(self, ErrorKind::MalformedResponse)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Transport => "transport",
            ErrorKind::ServerRejected => "server rejected",
            ErrorKind::MalformedResponse => "malformed response",
        };
        f.write_str(name)
    }
}

/// Typed outcome of a failed analysis call
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{kind}: {message}")]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    pub fn server_rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServerRejected, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedResponse, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_info_display() {
        let err = ErrorInfo::server_rejected("bad coordinate");
        assert_eq!(err.to_string(), "server rejected: bad coordinate");
        assert_eq!(err.kind, ErrorKind::ServerRejected);
    }

    #[test]
    fn test_recoverability() {
        assert!(ErrorKind::Transport.is_user_recoverable());
        assert!(ErrorKind::ServerRejected.is_user_recoverable());
        assert!(!ErrorKind::MalformedResponse.is_user_recoverable());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::MalformedResponse).unwrap();
        assert_eq!(json, "\"malformed_response\"");
    }
}
