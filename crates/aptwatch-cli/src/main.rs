//! aptwatch CLI - watch APT repositories for newly published packages

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod error;
mod exit_codes;

#[derive(Parser)]
#[command(name = "aptwatch")]
#[command(author = "aptwatch Contributors")]
#[command(version)]
#[command(about = "Watch APT repositories for newly published packages", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the configuration file
    #[arg(
        short,
        long,
        global = true,
        default_value = aptwatch_repo::DEFAULT_CONFIG_FILE
    )]
    config: PathBuf,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one check cycle over all configured repositories
    Check {
        /// Skip webhook notifications
        #[arg(long)]
        no_notify: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List configured repositories
    Repos,
}

#[tokio::main]
async fn main() {
    miette::set_panic_hook();

    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "info" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check { no_notify, json } => {
            commands::check::run(&cli.config, no_notify, json).await
        }
        Commands::Repos => commands::repos::run(&cli.config),
    };

    if let Err(err) = result {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}
