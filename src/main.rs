use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;
mod cli;

use cli::{Cli, Commands};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries results
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            app::run_interactive(std::io::stdin().lock(), stdout.lock(), cli.chunk_size)
        }
        Commands::Power { base, exponent } => {
            app::run_power(stdout.lock(), &base, exponent, cli.chunk_size)
        }
        Commands::Multiply { lhs, rhs } => {
            app::run_multiply(stdout.lock(), &lhs, &rhs, cli.chunk_size)
        }
    }
}
