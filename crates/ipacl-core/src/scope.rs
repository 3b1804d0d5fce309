// ── Scope routing ──
//
// A provider session talks to exactly one API family: the account-wide
// endpoints or a single workspace's endpoints. The family is decided once,
// when the session connects, and every lifecycle call is dispatched through
// the resulting `ScopeRouter`.

use std::future::Future;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};
use tracing::debug;

use ipacl_api::{AccountClient, TlsMode, TransportConfig, WorkspaceClient};

use crate::config::{ProviderConfig, TlsVerification};
use crate::error::CoreError;

/// Which API family a session is bound to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Scope {
    Account,
    Workspace,
}

impl Scope {
    /// Resolve the scope for a session.
    ///
    /// An explicit `scope` wins. Otherwise a host whose first DNS label is
    /// `accounts` (or starts with `accounts-`) selects account scope; every
    /// other host selects workspace scope. Account scope always needs a
    /// non-empty account id.
    pub fn resolve(config: &ProviderConfig) -> Result<Self, CoreError> {
        let scope = match config.scope {
            Some(scope) => scope,
            None => {
                let host = config.host.host_str().ok_or_else(|| {
                    CoreError::configuration(format!("host URL {} has no host name", config.host))
                })?;
                if is_accounts_host(host) {
                    Self::Account
                } else {
                    Self::Workspace
                }
            }
        };

        if scope == Self::Account {
            account_id(config)?;
        }
        Ok(scope)
    }
}

fn is_accounts_host(host: &str) -> bool {
    let first = host.split('.').next().unwrap_or_default();
    first.eq_ignore_ascii_case("accounts") || first.to_ascii_lowercase().starts_with("accounts-")
}

fn account_id(config: &ProviderConfig) -> Result<&str, CoreError> {
    config
        .account_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| CoreError::configuration("account_id is required for account scope"))
}

fn transport_config(config: &ProviderConfig) -> TransportConfig {
    let tls = match &config.tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    };
    TransportConfig {
        tls,
        timeout: config.timeout,
    }
}

// ── Router ──────────────────────────────────────────────────────────

/// The client for the session's resolved scope.
///
/// Generic over the two backends so lifecycle logic can be driven with
/// in-memory fakes; the defaults are the real HTTP clients.
#[derive(Debug)]
pub enum ScopeRouter<A = AccountClient, W = WorkspaceClient> {
    Account(A),
    Workspace(W),
}

impl ScopeRouter {
    /// Resolve the scope and build the matching HTTP client.
    ///
    /// Fails with a configuration error before any network traffic when the
    /// scope cannot be resolved or the client cannot be built.
    pub fn connect(config: &ProviderConfig) -> Result<Self, CoreError> {
        let scope = Scope::resolve(config)?;
        let transport = transport_config(config);
        debug!(%scope, host = %config.host, "resolved provider scope");

        match scope {
            Scope::Account => {
                let account_id = account_id(config)?;
                AccountClient::from_token(&config.host, account_id, &config.token, &transport)
                    .map(Self::Account)
                    .map_err(|e| {
                        CoreError::configuration(format!("failed to build account client: {e}"))
                    })
            }
            Scope::Workspace => {
                WorkspaceClient::from_token(&config.host, &config.token, &transport)
                    .map(Self::Workspace)
                    .map_err(|e| {
                        CoreError::configuration(format!("failed to build workspace client: {e}"))
                    })
            }
        }
    }
}

impl<A, W> ScopeRouter<A, W> {
    pub fn scope(&self) -> Scope {
        match self {
            Self::Account(_) => Scope::Account,
            Self::Workspace(_) => Scope::Workspace,
        }
    }

    /// Run exactly one of the two operations, chosen by the bound scope.
    pub async fn route<'a, T, FA, FW>(
        &'a self,
        account: impl FnOnce(&'a A) -> FA,
        workspace: impl FnOnce(&'a W) -> FW,
    ) -> T
    where
        FA: Future<Output = T>,
        FW: Future<Output = T>,
    {
        match self {
            Self::Account(client) => account(client).await,
            Self::Workspace(client) => workspace(client).await,
        }
    }
}
