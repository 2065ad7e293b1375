//! Contributor report rendering.
//!
//! The reporter consumes the ordered contributor list and emits plain
//! text: the configured header, then one line per contributor. It
//! writes to whatever sink the caller prepared and never manages that
//! sink's lifecycle.

use std::io::{self, Write};

use byline_git::{CommitRecord, HistorySource};

use crate::contributors::{Contributor, SortMode, aggregate, order_contributors};
use crate::error::Result;

/// Rendering options for a contributor report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// String prepended to every contributor name.
    pub contributor_prefix: String,
    /// Header text printed above the list.
    pub header: String,
    /// Whether to append the contribution count to each line.
    pub show_counts: bool,
    /// Whether to append the email address to each line.
    pub show_email: bool,
    /// Ordering policy for the list.
    pub sort: SortMode,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            contributor_prefix: " * ".to_string(),
            header: "Contributors\n============\n".to_string(),
            show_counts: true,
            show_email: false,
            sort: SortMode::Count,
        }
    }
}

/// Aggregate and order the contributors of a commit sequence.
#[must_use]
pub fn contributor_list(commits: &[CommitRecord], sort: SortMode) -> Vec<Contributor> {
    order_contributors(aggregate(commits), sort, commits)
}

/// Render the contributor report for a commit sequence.
///
/// The header is followed by a blank line, then one line per
/// contributor: the prefix, the display name, optionally
/// ` (<email>)`, optionally ` (<count>)`. The count is the true
/// aggregate regardless of the active sort policy.
#[must_use]
pub fn render(commits: &[CommitRecord], options: &ReportOptions) -> String {
    let mut text = String::new();
    text.push_str(&options.header);
    text.push('\n');

    for contributor in contributor_list(commits, options.sort) {
        text.push_str(&options.contributor_prefix);
        text.push_str(&contributor.name);
        if options.show_email {
            text.push_str(&format!(" ({})", contributor.email));
        }
        if options.show_counts {
            text.push_str(&format!(" ({})", contributor.commits));
        }
        text.push('\n');
    }

    text
}

/// Render the report and write it to a caller-prepared sink.
///
/// Append-only, single pass; the sink is neither opened nor closed
/// here.
///
/// # Errors
/// Returns any error raised by the sink.
pub fn write_to<W: Write>(
    out: &mut W,
    commits: &[CommitRecord],
    options: &ReportOptions,
) -> io::Result<()> {
    out.write_all(render(commits, options).as_bytes())
}

/// Generate the full report for the checked-out branch of a history
/// source: resolve the tip, materialize the history, aggregate, order
/// and render.
///
/// # Errors
/// Returns the underlying history-read error if the tip cannot be
/// resolved or the walk fails; no partial report is produced.
pub fn generate<S: HistorySource>(source: &S, options: &ReportOptions) -> Result<String> {
    let head = source.head()?;
    let commits = source.history_from(head)?;
    Ok(render(&commits, options))
}

/// Replace literal `\n` sequences in a configuration string with real
/// newlines.
///
/// A `\n` is unescaped only when preceded by a character other than a
/// backslash; that character is kept. A string-initial `\n` and a
/// `\\n` are left untouched.
#[must_use]
pub fn unescape_newlines(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len());

    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '\\' && i + 2 < chars.len() && chars[i + 1] == '\\' && chars[i + 2] == 'n' {
            out.push(chars[i]);
            out.push('\n');
            i += 3;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}
