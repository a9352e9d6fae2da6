pub mod commands;

use clap::{Args, Parser, Subcommand};
use pagediff::diff::{Alignment, Granularity};
use pagediff::render::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagediff")]
#[command(about = "Sentence-level diffs for notebook pages, posts and versions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Initialize pagediff configuration in a project")]
    Init {
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    #[command(about = "Show the differences between a new and an old version of a page")]
    Diff {
        #[arg(help = "New text (a post or target version), or - for stdin")]
        new: PathBuf,
        #[arg(help = "Old text (the current page content), or - for stdin")]
        old: PathBuf,
        #[arg(short, long, help = "Output format: ansi, markup, html or json")]
        format: Option<OutputFormat>,
        #[arg(long, help = "Disable colored output")]
        no_color: bool,
        #[command(flatten)]
        compare: CompareArgs,
    },

    #[command(about = "Count added, removed and unchanged units")]
    Stats {
        #[arg(help = "New text, or - for stdin")]
        new: PathBuf,
        #[arg(help = "Old text, or - for stdin")]
        old: PathBuf,
        #[arg(long, help = "Print the counts as JSON")]
        json: bool,
        #[command(flatten)]
        compare: CompareArgs,
    },

    #[command(about = "Compare two exported notebook directories page by page")]
    Notebook {
        #[arg(help = "Directory holding the new pages")]
        new: PathBuf,
        #[arg(help = "Directory holding the old pages")]
        old: PathBuf,
        #[arg(short, long, help = "Print the diff of every modified page")]
        verbose: bool,
        #[command(flatten)]
        compare: CompareArgs,
    },

    #[command(about = "Configure pagediff settings")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
pub struct CompareArgs {
    #[arg(short, long, help = "Unit size: sentence or word")]
    pub granularity: Option<Granularity>,
    #[arg(short, long, help = "Matching strategy: sequence or legacy")]
    pub alignment: Option<Alignment>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        key: String,
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}
