//! Clap derive structures for the `ipacl` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// ipacl -- manage account- and workspace-scoped IP access lists
#[derive(Debug, Parser)]
#[command(
    name = "ipacl",
    version,
    about = "Manage IP access lists from the command line",
    long_about = "Create, read, update and delete IP access lists.\n\n\
        The host decides the scope: an accounts console host talks to the\n\
        account-wide API, any other host to that workspace's API.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "IPACL_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Workspace or accounts console URL (overrides profile)
    #[arg(long, env = "IPACL_HOST", global = true)]
    pub host: Option<String>,

    /// Account ID, required for account scope
    #[arg(long, env = "IPACL_ACCOUNT_ID", global = true)]
    pub account_id: Option<String>,

    /// Force the API scope instead of detecting it from the host
    #[arg(long, env = "IPACL_SCOPE", global = true)]
    pub scope: Option<ScopeArg>,

    /// Bearer token
    #[arg(long, env = "IPACL_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Output format [default: config `defaults.output`, else table]
    #[arg(
        long = "output",
        short = 'o',
        env = "IPACL_OUTPUT",
        value_name = "FORMAT",
        global = true
    )]
    pub output_flag: Option<OutputFormat>,

    /// Effective output format, filled in from `output_flag` or the config.
    #[arg(skip)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Skip TLS certificate verification
    #[arg(long, short = 'k', env = "IPACL_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "IPACL_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Value Enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScopeArg {
    /// Account-wide API
    Account,
    /// Single-workspace API
    Workspace,
}

impl From<ScopeArg> for ipacl_core::Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Account => Self::Account,
            ScopeArg::Workspace => Self::Workspace,
        }
    }
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an IP access list
    Create(ListInput),

    /// Show an IP access list
    Get {
        /// List ID
        id: String,
    },

    /// Update an IP access list (unset flags keep their current values)
    Update {
        /// List ID
        id: String,

        #[command(flatten)]
        input: ListInput,
    },

    /// Delete an IP access list
    #[command(alias = "rm")]
    Delete {
        /// List ID
        id: String,
    },

    /// Print the resource field schema
    Schema,

    /// Validate a declaration file without contacting the server
    Validate {
        /// JSON file with label, list_type, ip_addresses and enabled
        file: PathBuf,
    },

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  LIST INPUT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Declared attributes, from flags or a JSON file.
#[derive(Debug, Args)]
pub struct ListInput {
    /// Read the declaration from a JSON file
    #[arg(long, short = 'F', conflicts_with_all = ["label", "list_type", "ips", "enabled"])]
    pub from_file: Option<PathBuf>,

    /// List label
    #[arg(long)]
    pub label: Option<String>,

    /// ALLOW or BLOCK
    #[arg(long)]
    pub list_type: Option<String>,

    /// IPv4 address or CIDR block (repeatable)
    #[arg(long = "ip", value_name = "ADDR")]
    pub ips: Vec<String>,

    /// Whether the list is enforced
    #[arg(long)]
    pub enabled: Option<bool>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current configuration (secrets masked)
    Show,

    /// Print the config file path
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a token in the system keyring
    SetToken {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
