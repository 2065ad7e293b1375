//! `byline report` command - generate the contributor report.
//!
//! The command owns the boundary concerns the core stays out of:
//! opening the repository, merging file config with flags, preparing
//! the output sink (stdout or a file), and appending the footer after
//! the core has finished.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use byline_core::report::{self, contributor_list, unescape_newlines};
use byline_core::{Config, ReportConfig};
use byline_git::{HistorySource, Repository};
use clap::Args;

use crate::output;

/// Name of the optional config file at the repository root.
const CONFIG_FILE: &str = "byline.toml";

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Sort order: count, date or name (unknown values behave as count)
    #[arg(long)]
    pub sort: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// List contributor email addresses
    #[arg(long)]
    pub show_email: bool,

    /// Omit contribution counts
    #[arg(long)]
    pub no_counts: bool,

    /// String prepended to every contributor name
    #[arg(long)]
    pub prefix: Option<String>,

    /// Header printed above the report
    #[arg(long)]
    pub header: Option<String>,

    /// Print contributors as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Run the report command.
pub fn run(args: &ReportArgs) -> Result<()> {
    let repo = Repository::open_current().context("not a git repository")?;
    let config = load_config(&repo)?;
    let report_config = merge(config.report, args);
    let options = report_config.options();

    if args.json {
        let head = repo.head()?;
        let commits = repo.history_from(head)?;
        let contributors = contributor_list(&commits, options.sort);
        let json = serde_json::to_string_pretty(&contributors)?;
        println!("{json}");
        return Ok(());
    }

    let text = report::generate(&repo, &options)?;
    let footer = report_config
        .footer
        .as_deref()
        .map(unescape_newlines);

    match &report_config.output_file {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            write_report(&mut file, &text, footer.as_deref())?;
            output::success(&format!("contributor report written to {}", path.display()));
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_report(&mut lock, &text, footer.as_deref())?;
        }
    }

    Ok(())
}

/// Write the rendered report, then the footer the core knows nothing
/// about.
fn write_report<W: Write>(out: &mut W, text: &str, footer: Option<&str>) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    if let Some(footer) = footer {
        writeln!(out, "{footer}")?;
    }
    Ok(())
}

/// Load byline.toml from the repository workdir, if any.
fn load_config(repo: &Repository) -> Result<Config> {
    match repo.workdir() {
        Some(workdir) => Ok(Config::load(workdir.join(CONFIG_FILE))?),
        None => Ok(Config::default()),
    }
}

/// Apply CLI flag overrides on top of the file configuration.
fn merge(mut config: ReportConfig, args: &ReportArgs) -> ReportConfig {
    if let Some(prefix) = &args.prefix {
        config.contributor_prefix = prefix.clone();
    }
    if let Some(header) = &args.header {
        config.header = header.clone();
    }
    if let Some(sort) = &args.sort {
        config.sort = Some(sort.clone());
    }
    if let Some(output) = &args.output {
        config.output_file = Some(output.clone());
    }
    if args.show_email {
        config.show_email = true;
    }
    if args.no_counts {
        config.show_counts = false;
    }
    config
}
