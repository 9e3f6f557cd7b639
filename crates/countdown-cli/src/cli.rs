use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use countdown_core::format::UrgencyTier;

/// Annotate notes with countdowns to the dates they mention
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a configuration file (defaults to ./countdown.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the text with a countdown after every date reference
    Annotate(AnnotateCommand),
    /// List the date references found in the text
    List(ListCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AnnotateCommand {
    /// File to read; stdin when omitted or "-"
    pub file: Option<PathBuf>,
    /// Reference date to count from (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub today: Option<String>,
    /// Disable colored labels
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// File to read; stdin when omitted or "-"
    pub file: Option<PathBuf>,
    /// Reference date to count from (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub today: Option<String>,
    /// Only show due dates in this tier (overdue, due, nearly-due, future)
    #[arg(long)]
    pub urgency: Option<UrgencyTier>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
