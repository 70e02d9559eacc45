use cadence_core::models::RepeatType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Expand repeating calendar events into their dated occurrences
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate the occurrences of a repeating event
    Generate(GenerateCommand),
    /// Check a repeat end date before generating
    Validate(ValidateCommand),
    /// Print the human-readable label for a repeat rule
    Label(LabelCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateCommand {
    /// Read the anchor event from a JSON file instead of flags
    #[clap(short, long, conflicts_with_all = ["date", "every", "until"])]
    pub input: Option<PathBuf>,
    /// Date of the first occurrence (e.g., '2025-01-31', 'next monday')
    #[clap(short, long, required_unless_present = "input")]
    pub date: Option<String>,
    /// Repeat type (none, daily, weekly, monthly, yearly)
    #[clap(short, long)]
    pub every: Option<RepeatType>,
    /// Repeat interval; values below 1 count as 1
    #[clap(long, default_value_t = 1, allow_hyphen_values = true)]
    pub interval: i32,
    /// Inclusive end date of the series
    #[clap(short, long)]
    pub until: Option<String>,
    /// Event title
    #[clap(short, long, default_value = "")]
    pub title: String,
    #[clap(long, default_value = "")]
    pub start_time: String,
    #[clap(long, default_value = "")]
    pub end_time: String,
    #[clap(long, default_value = "")]
    pub description: String,
    #[clap(long, default_value = "")]
    pub location: String,
    #[clap(long, default_value = "")]
    pub category: String,
    /// Override the configured occurrence cap
    #[clap(long)]
    pub max_count: Option<usize>,
    /// Emit the occurrences as JSON
    #[clap(long)]
    pub json: bool,
    /// Skip the end date pre-flight check
    #[clap(long)]
    pub no_validate: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ValidateCommand {
    /// Event start date (YYYY-MM-DD)
    #[clap(long)]
    pub start: String,
    /// Repeat end date; empty means unlimited
    #[clap(long, default_value = "")]
    pub until: String,
    /// Latest accepted end date (defaults to the configured maximum)
    #[clap(long)]
    pub max: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct LabelCommand {
    /// Repeat type (none, daily, weekly, monthly, yearly)
    pub every: RepeatType,
    #[clap(short, long, default_value_t = 1, allow_hyphen_values = true)]
    pub interval: i32,
    /// End date appended to the label
    #[clap(short, long)]
    pub until: Option<String>,
}
