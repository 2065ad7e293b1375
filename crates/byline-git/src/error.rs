//! Error types for byline-git.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading repository history.
///
/// All variants are fatal: a run either materializes the full history
/// or fails on the first read error, with no partial output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not inside a git repository.
    #[error("not a git repository")]
    NotARepository,

    /// HEAD does not point at a commit (unborn branch).
    #[error("HEAD does not point at a commit - the branch has no commits yet")]
    UnbornHead,

    /// Underlying repository read or walk failure.
    #[error("failed to read history: {0}")]
    HistoryRead(#[from] git2::Error),
}
