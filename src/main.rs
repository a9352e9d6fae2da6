mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands;

fn main() {
    // Setup tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = cli::Cli::parse();

    if let Err(err) = run_command(cli) {
        pagediff::error::display_error(&err);
        std::process::exit(1);
    }
}

fn run_command(cli: cli::Cli) -> Result<()> {
    use cli::Commands;

    match cli.command {
        Commands::Init { path } => commands::init::handle(&path),
        Commands::Diff {
            new,
            old,
            format,
            no_color,
            compare,
        } => commands::diff::handle(&new, &old, format, no_color, &compare),
        Commands::Stats {
            new,
            old,
            json,
            compare,
        } => commands::stats::handle(&new, &old, json, &compare),
        Commands::Notebook {
            new,
            old,
            verbose,
            compare,
        } => commands::notebook::handle(&new, &old, verbose, &compare),
        Commands::Config { action } => commands::config::handle(action),
    }
}
