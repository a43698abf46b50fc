mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, GenerateArgs};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the notes
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate(args)) => commands::generate::run(&args),
        Some(Commands::Version) => commands::version::run(),
        None => commands::generate::run(&GenerateArgs::default()),
    }
}
