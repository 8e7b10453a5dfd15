use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands {
    pub mod get;
}
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("treepath=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Get(args) => commands::get::run(args, cli.format),
    }
}
