//! Command handlers.

pub mod config_cmd;
pub mod lists;
pub mod schema;
pub mod util;
pub mod validate;

use ipacl_core::{CancellationToken, IpAccessListResource, ScopeRouter};
use tracing::debug;

use crate::cli::GlobalOpts;
use crate::config;
use crate::error::CliError;

/// A connected lifecycle controller plus the token Ctrl-C cancels.
pub struct Session {
    pub resource: IpAccessListResource,
    pub cancel: CancellationToken,
}

impl Session {
    /// Resolve configuration, bind the scope, and arm Ctrl-C cancellation.
    pub fn connect(global: &GlobalOpts) -> Result<Self, CliError> {
        let provider = config::build_provider_config(global)?;
        let router = ScopeRouter::connect(&provider)?;
        debug!(scope = %router.scope(), "connected");

        let cancel = CancellationToken::new();
        let on_interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                on_interrupt.cancel();
            }
        });

        Ok(Self {
            resource: IpAccessListResource::new(router),
            cancel,
        })
    }
}
