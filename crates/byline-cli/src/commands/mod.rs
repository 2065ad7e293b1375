//! CLI command definitions and dispatch.

pub mod completions;
pub mod report;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use self::report::ReportArgs;

/// Generate contributor reports from git history.
#[derive(Parser)]
#[command(name = "byline", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress status messages
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the contributor report for the checked-out branch
    Report(ReportArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
