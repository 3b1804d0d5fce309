//! CLI configuration: thin wrapper around `ipacl_config` shared types.
//!
//! Re-exports the shared types and adds resolution that respects
//! `GlobalOpts` flag overrides (--host, --token, etc.).

use clap::ValueEnum;
use secrecy::SecretString;
use tracing::warn;

use ipacl_core::ProviderConfig;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use ipacl_config::{
    Config, Defaults, Profile, config_path, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Output format: `--output` / `IPACL_OUTPUT`, else `defaults.output`.
pub fn output_format(global: &GlobalOpts) -> OutputFormat {
    match global.output_flag {
        Some(ref format) => format.clone(),
        None => configured_output(&load_config_or_default()),
    }
}

fn configured_output(cfg: &Config) -> OutputFormat {
    <OutputFormat as ValueEnum>::from_str(&cfg.defaults.output, true).unwrap_or_else(|_| {
        warn!(value = %cfg.defaults.output, "unknown defaults.output, using table");
        OutputFormat::Table
    })
}

/// Build a `ProviderConfig` from the config file, profile, and CLI overrides.
pub fn build_provider_config(global: &GlobalOpts) -> Result<ProviderConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    // If a profile exists, use it with CLI flag overrides
    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, global, &cfg.defaults);
    }

    // An explicitly requested profile must exist
    if global.profile.is_some() {
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available_profiles(&cfg),
        });
    }

    // No profile -- build from CLI flags / env vars alone
    let host = global.host.clone().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;
    if global.token.is_none() {
        return Err(CliError::NoCredentials {
            profile: profile_name,
        });
    }

    let flags_only = Profile {
        host,
        ..Profile::default()
    };
    resolve_profile(&flags_only, &profile_name, global, &cfg.defaults)
}

/// Layer the global flags over `profile` and translate it.
///
/// CLI flag overrides take priority over profile values, which take
/// priority over `[defaults]`.
fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
    defaults: &Defaults,
) -> Result<ProviderConfig, CliError> {
    let mut merged = profile.clone();
    if let Some(ref host) = global.host {
        merged.host.clone_from(host);
    }
    if global.account_id.is_some() {
        merged.account_id.clone_from(&global.account_id);
    }
    if let Some(scope) = global.scope {
        merged.scope = Some(scope.into());
    }
    if global.insecure {
        merged.insecure = Some(true);
    }
    if global.timeout.is_some() {
        merged.timeout = global.timeout;
    }

    let token = global.token.clone().map(SecretString::from);
    Ok(ipacl_config::profile_to_provider_config(
        &merged,
        profile_name,
        defaults,
        token,
    )?)
}

pub fn available_profiles(cfg: &Config) -> String {
    let names = cfg.profile_names();
    if names.is_empty() {
        "(none)".into()
    } else {
        names.join(", ")
    }
}
