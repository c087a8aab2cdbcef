//! CLI argument parsing for the vuelta demo driver

use clap::{Parser, ValueEnum};

/// Output format for the recorded table
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Comma-terminated table (default)
    Table,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "vuelta")]
#[command(version)]
#[command(about = "Trial/lap stopwatch demo: times allocation loops and exports the table", long_about = None)]
pub struct Cli {
    /// Number of laps per trial in the allocation workload
    #[arg(long = "laps", value_name = "N", default_value = "10")]
    pub laps: usize,

    /// Number of trials to run
    #[arg(long = "trials", value_name = "N", default_value = "1")]
    pub trials: usize,

    /// Show per-trial statistics summary on stderr
    #[arg(short = 'c', long = "summary")]
    pub statistics: bool,

    /// Output format (table or json)
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Enable debug tracing output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
