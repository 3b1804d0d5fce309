// ── Runtime provider configuration ──
//
// Describes *where* and *as whom* the provider talks to the remote API.
// Carries credentials and transport tuning but never touches disk; the
// CLI (or any embedding program) builds a `ProviderConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::scope::Scope;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification.
    DangerAcceptInvalid,
}

/// Process-wide provider configuration, read by the scope router.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Accounts console or workspace URL.
    pub host: Url,
    /// Account identifier, required for account scope.
    pub account_id: Option<String>,
    /// Bearer token.
    pub token: SecretString,
    /// Explicit scope; `None` means detect from `host`.
    pub scope: Option<Scope>,
    pub tls: TlsVerification,
    /// Per-request timeout, enforced by the HTTP client.
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn new(host: Url, token: SecretString) -> Self {
        Self {
            host,
            account_id: None,
            token,
            scope: None,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }
}
