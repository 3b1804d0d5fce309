mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::Session;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let mut cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Flag or env wins, then the config file default
    cli.global.output = config::output_format(&cli.global);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let global = &cli.global;
    match cli.command {
        // Offline commands don't need a provider session
        Command::Config(args) => commands::config_cmd::handle(args, global),
        Command::Schema => commands::schema::handle(global),
        Command::Validate { file } => commands::validate::handle(&file, global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "ipacl", &mut std::io::stdout());
            Ok(())
        }

        // Lifecycle commands bind a scope first
        Command::Create(input) => {
            let session = Session::connect(global)?;
            commands::lists::create(&session, input, global).await
        }
        Command::Get { id } => {
            let session = Session::connect(global)?;
            commands::lists::get(&session, &id, global).await
        }
        Command::Update { id, input } => {
            let session = Session::connect(global)?;
            commands::lists::update(&session, &id, input, global).await
        }
        Command::Delete { id } => {
            let session = Session::connect(global)?;
            commands::lists::delete(&session, &id, global).await
        }
    }
}
