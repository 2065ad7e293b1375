//! Trait abstraction for history access.
//!
//! This module defines the `HistorySource` trait which abstracts the
//! head-resolution and history-walking collaborators, enabling
//! dependency injection and testability.

use git2::Oid;

use crate::repository::{CommitRecord, Repository};
use crate::Result;

/// Trait for reading commit history from a repository.
///
/// Implemented by [`Repository`] for real repositories and by mock
/// sources in tests. Operations are synchronous since git2 is a
/// synchronous library.
#[allow(clippy::missing_errors_doc)]
pub trait HistorySource {
    /// Resolve the tip commit of the currently checked-out branch.
    fn head(&self) -> Result<Oid>;

    /// Materialize every commit reachable from `start`, in the
    /// walker's natural newest-first order.
    fn history_from(&self, start: Oid) -> Result<Vec<CommitRecord>>;
}

impl HistorySource for Repository {
    fn head(&self) -> Result<Oid> {
        self.head_commit()
    }

    fn history_from(&self, start: Oid) -> Result<Vec<CommitRecord>> {
        Self::history_from(self, start)
    }
}
