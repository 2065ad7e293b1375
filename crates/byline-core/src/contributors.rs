//! Contributor aggregation and ordering.
//!
//! The commit sequence arrives in the history walker's natural order
//! (newest-first). Aggregation is expressed as pure folds over that
//! sequence; ordering policies only permute the deduplicated keys and
//! never change which name or count a contributor carries.

use std::collections::{HashMap, HashSet};

use byline_git::CommitRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// How the final contributor list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Descending commit count; ties keep first-occurrence order.
    #[default]
    Count,
    /// Ascending position of the first contribution, obtained by
    /// reversing the walk order and taking first occurrence per email.
    Date,
    /// Ascending ordinal comparison of display names.
    Name,
}

impl SortMode {
    /// Parse a configured sort value, case-insensitively.
    ///
    /// Never fails: anything other than `date` or `name` (including an
    /// absent value) resolves to [`SortMode::Count`].
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("date") => Self::Date,
            Some("name") => Self::Name,
            _ => Self::Count,
        }
    }
}

/// One deduplicated contributor.
///
/// Keyed by email address with opaque string equality; the display
/// name is the one on the first commit encountered in walk order for
/// that email, and `commits` counts one unit per commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contributor {
    /// Email address, the deduplication identity.
    pub email: String,
    /// Display name from the first-seen commit for this email.
    pub name: String,
    /// Number of commits authored under this email.
    pub commits: usize,
    /// Author timestamp of this contributor's earliest commit.
    pub first_authored: DateTime<Utc>,
}

/// Fold the commit sequence into a commit count per email address.
///
/// Pure frequency: the result is independent of sequence order.
#[must_use]
pub fn commit_counts(commits: &[CommitRecord]) -> HashMap<String, usize> {
    commits.iter().fold(HashMap::new(), |mut counts, commit| {
        *counts.entry(commit.author_email.clone()).or_insert(0) += 1;
        counts
    })
}

/// Fold the commit sequence into `(email, name)` pairs in order of
/// first occurrence, keeping the name from the first-seen commit per
/// email and ignoring every later one.
#[must_use]
pub fn first_seen_names(commits: &[CommitRecord]) -> Vec<(String, String)> {
    let (ordered, _seen) = commits.iter().fold(
        (Vec::new(), HashSet::new()),
        |(mut ordered, mut seen), commit| {
            if seen.insert(commit.author_email.clone()) {
                ordered.push((commit.author_email.clone(), commit.author_name.clone()));
            }
            (ordered, seen)
        },
    );
    ordered
}

/// Fold the commit sequence into the earliest author timestamp per
/// email address.
fn earliest_times(commits: &[CommitRecord]) -> HashMap<String, i64> {
    commits.iter().fold(HashMap::new(), |mut times, commit| {
        times
            .entry(commit.author_email.clone())
            .and_modify(|t| *t = (*t).min(commit.author_time))
            .or_insert(commit.author_time);
        times
    })
}

/// Build the deduplicated contributor set, in first-occurrence order.
///
/// Exactly one [`Contributor`] exists per distinct email address; the
/// set size never exceeds the sequence length and the counts sum to
/// the sequence length.
#[must_use]
pub fn aggregate(commits: &[CommitRecord]) -> Vec<Contributor> {
    let counts = commit_counts(commits);
    let times = earliest_times(commits);

    first_seen_names(commits)
        .into_iter()
        .map(|(email, name)| {
            let count = counts.get(&email).copied().unwrap_or(0);
            let secs = times.get(&email).copied().unwrap_or(0);
            Contributor {
                name,
                commits: count,
                first_authored: DateTime::from_timestamp(secs, 0).unwrap_or_default(),
                email,
            }
        })
        .collect()
}

/// Apply the ordering policy to an aggregated contributor list.
///
/// `commits` is the original walk-order sequence; the date policy
/// needs it to recover first-contribution positions.
#[must_use]
pub fn order_contributors(
    mut contributors: Vec<Contributor>,
    mode: SortMode,
    commits: &[CommitRecord],
) -> Vec<Contributor> {
    match mode {
        SortMode::Count => {
            // Stable sort keeps first-occurrence order among ties.
            contributors.sort_by(|a, b| b.commits.cmp(&a.commits));
        }
        SortMode::Name => {
            contributors.sort_by(|a, b| a.name.cmp(&b.name));
        }
        SortMode::Date => {
            // Literal semantics: reverse the walk order, then rank each
            // email by its first occurrence in that reversed sequence.
            // Not a timestamp sort; multi-parent histories order exactly
            // as the walker emitted them.
            let mut rank: HashMap<&str, usize> = HashMap::new();
            for (position, commit) in commits.iter().rev().enumerate() {
                rank.entry(commit.author_email.as_str()).or_insert(position);
            }
            contributors.sort_by_key(|c| rank.get(c.email.as_str()).copied().unwrap_or(usize::MAX));
        }
    }

    contributors
}
