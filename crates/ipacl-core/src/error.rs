// ── Core error types ──
//
// Domain-level errors surfaced by the lifecycle controller. Transport-level
// `ipacl_api::Error`s are wrapped with the lifecycle phase and the scope the
// call was routed to; callers branch on `kind()` rather than on HTTP codes.

use strum::Display;
use thiserror::Error;

use crate::model::ListId;
use crate::scope::Scope;

/// Lifecycle phase an error happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Create,
    Read,
    Update,
    Delete,
}

/// Coarse error classification for the reconciliation framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Configuration,
    NotFound,
    Remote,
    Cancelled,
    InvalidState,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Declared configuration failed schema validation. No remote call was made.
    #[error("Invalid value for {field}: {message}")]
    Validation { field: String, message: String },

    /// Provider configuration does not resolve to a usable scope or client.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The list no longer exists remotely. Read and Delete absorb this as
    /// drift; front ends raise it when a Read they asked for came back gone.
    #[error("IP access list {id} not found in {scope} scope")]
    NotFound { id: ListId, scope: Scope },

    #[error("{phase} failed in {scope} scope: {source}")]
    Remote {
        phase: Phase,
        scope: Scope,
        #[source]
        source: ipacl_api::Error,
    },

    #[error("{phase} cancelled")]
    Cancelled { phase: Phase },

    /// Entry point called while the resource is in the wrong state.
    #[error("Cannot {phase} an IP access list that is {state}")]
    InvalidState { phase: Phase, state: &'static str },
}

impl CoreError {
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Remote { .. } => ErrorKind::Remote,
            Self::Cancelled { .. } => ErrorKind::Cancelled,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
        }
    }

    /// HTTP status of the wrapped remote error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { source, .. } => source.status(),
            _ => None,
        }
    }

    /// The lifecycle phase this error belongs to, when known.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Remote { phase, .. }
            | Self::Cancelled { phase }
            | Self::InvalidState { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}
