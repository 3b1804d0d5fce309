use thiserror::Error;

/// Error code the remote uses for a missing object, independent of HTTP status.
pub const RESOURCE_DOES_NOT_EXIST: &str = "RESOURCE_DOES_NOT_EXIST";

/// Top-level error type for the `ipacl-api` crate.
///
/// Covers every failure mode of both API scopes: transport, authentication,
/// structured API errors, and response decoding. `ipacl-core` wraps these
/// with lifecycle context before they reach a caller.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Token rejected (HTTP 401 / 403).
    #[error("Unauthorized (HTTP {status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Token cannot be encoded as a header value.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Structured error returned by the service.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        error_code: Option<String>,
        message: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the remote object does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api {
                status, error_code, ..
            } => *status == 404 || error_code.as_deref() == Some(RESOURCE_DOES_NOT_EXIST),
            _ => false,
        }
    }

    /// Returns `true` if the underlying request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Returns `true` if no connection could be established (or TLS failed).
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect(),
            Self::Tls(_) => true,
            _ => false,
        }
    }

    /// HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The service error code (e.g. `INVALID_PARAMETER_VALUE`), if available.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Api { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, code: Option<&str>) -> Error {
        Error::Api {
            status,
            error_code: code.map(String::from),
            message: "boom".into(),
        }
    }

    #[test]
    fn not_found_by_status() {
        assert!(api(404, None).is_not_found());
    }

    #[test]
    fn not_found_by_error_code() {
        assert!(api(400, Some(RESOURCE_DOES_NOT_EXIST)).is_not_found());
    }

    #[test]
    fn other_api_errors_are_not_not_found() {
        assert!(!api(400, Some("INVALID_PARAMETER_VALUE")).is_not_found());
        assert!(
            !Error::Unauthorized {
                status: 401,
                message: String::new()
            }
            .is_not_found()
        );
    }

    #[test]
    fn error_code_accessor() {
        assert_eq!(
            api(400, Some("INVALID_STATE")).error_code(),
            Some("INVALID_STATE")
        );
        assert_eq!(Error::Tls("x".into()).error_code(), None);
    }
}
