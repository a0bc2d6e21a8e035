use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// pyan-maint - Maintenance tasks for the pyan source package
#[derive(Parser, Debug)]
#[command(name = "pyan-maint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Working tree to operate on
    #[arg(short = 'C', long, global = true, default_value = ".", value_name = "PATH")]
    pub directory: PathBuf,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove bytecode caches and packaging metadata
    Clean(CleanArgs),

    /// Count lines of every source file
    #[command(name = "qa_lines_count")]
    LinesCount,

    /// Run the style checker over the package sources
    #[command(name = "qa_check_code")]
    CheckCode,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Show what would be removed without doing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
