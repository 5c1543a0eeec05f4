use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Nestmap - flatten nested-set trees into indented lists
#[derive(Parser, Debug)]
#[command(name = "nestmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Flatten a nested-set tree into indented rows
    Flatten(FlattenArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct FlattenArgs {
    /// JSON file holding an array of tree nodes
    pub path: PathBuf,

    /// Spacer repeated once per nesting level
    #[arg(short, long, value_name = "STR")]
    pub spacer: Option<String>,

    /// Glyph closing every row's padding
    #[arg(short, long, value_name = "STR")]
    pub branch: Option<String>,

    /// Extra node columns to copy onto rows (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "COLS")]
    pub columns: Option<Vec<String>>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Keep HTML entities in text output
    #[arg(long)]
    pub raw: bool,

    /// Hide leaf ids in text output
    #[arg(long)]
    pub no_ids: bool,
}
