//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use ipacl_config::ConfigError;
use ipacl_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFIG: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const CANCELLED: i32 = 130;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach {scope} API")]
    #[diagnostic(
        code(ipacl::connection_failed),
        help(
            "Check the host URL and your network.\n\
             For self-signed certificates use --insecure (-k) or set ca_cert in your profile."
        )
    )]
    ConnectionFailed {
        scope: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out during {phase}")]
    #[diagnostic(
        code(ipacl::timeout),
        help("Increase the timeout with --timeout or check the service status.")
    )]
    Timeout { phase: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(ipacl::auth_failed),
        help(
            "Verify your token has admin rights for this scope.\n\
             Store a new one with: ipacl config set-token"
        )
    )]
    AuthFailed { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(ipacl::no_credentials),
        help(
            "Pass --token, set IPACL_TOKEN, or store one with: ipacl config set-token"
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("IP access list '{identifier}' not found in {scope} scope")]
    #[diagnostic(
        code(ipacl::not_found),
        help("The list may have been deleted outside of ipacl.")
    )]
    NotFound { identifier: String, scope: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("{phase} failed ({code}): {message}")]
    #[diagnostic(code(ipacl::api_error))]
    ApiError {
        phase: String,
        code: String,
        message: String,
    },

    #[error("Cannot {operation}: {reason}")]
    #[diagnostic(code(ipacl::invalid_state))]
    InvalidState { operation: String, reason: String },

    #[error("Operation cancelled during {phase}")]
    #[diagnostic(code(ipacl::cancelled))]
    Cancelled { phase: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(
        code(ipacl::validation),
        help("Run `ipacl schema` to see the accepted fields and values.")
    )]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration error: {message}")]
    #[diagnostic(code(ipacl::config))]
    Configuration { message: String },

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(ipacl::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No host configured")]
    #[diagnostic(
        code(ipacl::no_config),
        help(
            "Pass --host (or IPACL_HOST), or add a profile to the config file.\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(ipacl::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(ipacl::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::Json(_) => exit_code::USAGE,
            Self::Configuration { .. } | Self::ProfileNotFound { .. } | Self::NoConfig { .. } => {
                exit_code::CONFIG
            }
            Self::Cancelled { .. } => exit_code::CANCELLED,
            Self::ApiError { .. } | Self::InvalidState { .. } | Self::Io(_) | Self::Yaml(_) => {
                exit_code::GENERAL
            }
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { field, message } => Self::Validation {
                field,
                reason: message,
            },

            CoreError::Configuration { message } => Self::Configuration { message },

            CoreError::NotFound { id, scope } => Self::NotFound {
                identifier: id.to_string(),
                scope: scope.to_string(),
            },

            CoreError::Remote {
                phase,
                scope,
                source,
            } => {
                if source.is_timeout() {
                    Self::Timeout {
                        phase: phase.to_string(),
                    }
                } else if source.is_connect() {
                    Self::ConnectionFailed {
                        scope: scope.to_string(),
                        source: Box::new(source),
                    }
                } else {
                    match source {
                        ipacl_core::RemoteError::Unauthorized { message, .. } => {
                            Self::AuthFailed { message }
                        }
                        ipacl_core::RemoteError::Api {
                            status,
                            error_code,
                            message,
                        } => Self::ApiError {
                            phase: phase.to_string(),
                            code: error_code.unwrap_or_else(|| format!("HTTP {status}")),
                            message,
                        },
                        other => Self::ApiError {
                            phase: phase.to_string(),
                            code: "remote".into(),
                            message: other.to_string(),
                        },
                    }
                }
            }

            CoreError::Cancelled { phase } => Self::Cancelled {
                phase: phase.to_string(),
            },

            CoreError::InvalidState { phase, state } => Self::InvalidState {
                operation: phase.to_string(),
                reason: format!("the IP access list is {state}"),
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Io(e) => Self::Io(e),
            other => Self::Configuration {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ipacl_core::{ListId, Phase, RemoteError, Scope};

    use super::*;

    #[test]
    fn core_errors_map_to_exit_codes() {
        let cases = [
            (
                CoreError::Validation {
                    field: "ip_addresses[0]".into(),
                    message: "bad".into(),
                },
                exit_code::USAGE,
            ),
            (
                CoreError::Configuration {
                    message: "account_id is required".into(),
                },
                exit_code::CONFIG,
            ),
            (
                CoreError::NotFound {
                    id: ListId::from("abc123"),
                    scope: Scope::Workspace,
                },
                exit_code::NOT_FOUND,
            ),
            (
                CoreError::Cancelled {
                    phase: Phase::Create,
                },
                exit_code::CANCELLED,
            ),
            (
                CoreError::Remote {
                    phase: Phase::Read,
                    scope: Scope::Account,
                    source: RemoteError::Unauthorized {
                        status: 401,
                        message: "Invalid access token.".into(),
                    },
                },
                exit_code::AUTH,
            ),
            (
                CoreError::Remote {
                    phase: Phase::Update,
                    scope: Scope::Workspace,
                    source: RemoteError::Api {
                        status: 400,
                        error_code: Some("INVALID_PARAMETER_VALUE".into()),
                        message: "bad".into(),
                    },
                },
                exit_code::GENERAL,
            ),
        ];

        for (core, expected) in cases {
            let cli = CliError::from(core);
            assert_eq!(cli.exit_code(), expected, "{cli:?}");
        }
    }

    #[test]
    fn api_error_keeps_service_code() {
        let cli = CliError::from(CoreError::Remote {
            phase: Phase::Create,
            scope: Scope::Workspace,
            source: RemoteError::Api {
                status: 400,
                error_code: Some("INVALID_STATE".into()),
                message: "would lock you out".into(),
            },
        });
        assert_eq!(
            cli.to_string(),
            "create failed (INVALID_STATE): would lock you out"
        );
    }

    #[test]
    fn missing_credentials_is_auth_exit() {
        let cli = CliError::from(ConfigError::NoCredentials {
            profile: "prod".into(),
        });
        assert_eq!(cli.exit_code(), exit_code::AUTH);
    }
}
