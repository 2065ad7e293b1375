//! Repository wrapper providing history access.

use std::path::Path;

use git2::Oid;

use crate::error::{Error, Result};

/// Authorship metadata for a single commit.
///
/// Immutable view produced once per commit by the history walk. The
/// position of a record in the materialized sequence is its traversal
/// position; `author_time` is informational and never drives ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Display name recorded on the commit.
    pub author_name: String,
    /// Email address recorded on the commit, used verbatim as the
    /// contributor identity (no normalization or validation).
    pub author_email: String,
    /// Author timestamp in seconds since the epoch.
    pub author_time: i64,
}

/// High-level wrapper around a git repository.
pub struct Repository {
    inner: git2::Repository,
}

impl Repository {
    /// Open a repository at the given path.
    ///
    /// # Errors
    /// Returns `NotARepository` if no repository is found at the path
    /// or any parent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| Error::NotARepository)?;
        Ok(Self { inner })
    }

    /// Open the repository containing the current directory.
    ///
    /// # Errors
    /// Returns `NotARepository` if not inside a git repository.
    pub fn open_current() -> Result<Self> {
        Self::open(".")
    }

    /// Get the path to the repository root (workdir).
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.inner.workdir()
    }

    /// Get the path to the .git directory.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Resolve the tip commit of the currently checked-out branch.
    ///
    /// # Errors
    /// Returns `UnbornHead` if HEAD exists but points at no commit,
    /// or `HistoryRead` for any other repository read failure.
    pub fn head_commit(&self) -> Result<Oid> {
        let head = self.inner.head()?;
        head.target().ok_or(Error::UnbornHead)
    }

    /// Walk the commit graph from `start` and materialize every
    /// reachable commit's authorship metadata, in the walker's natural
    /// visitation order (newest-first, topologically descending).
    ///
    /// The walk is eager: the whole history is loaded before this
    /// returns. A single repository history is assumed to fit in
    /// memory.
    ///
    /// # Errors
    /// Returns `HistoryRead` on any failure during the walk; no
    /// partial sequence is returned.
    pub fn history_from(&self, start: Oid) -> Result<Vec<CommitRecord>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.push(start)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.inner.find_commit(oid?)?;
            let author = commit.author();
            commits.push(CommitRecord {
                author_name: String::from_utf8_lossy(author.name_bytes()).into_owned(),
                author_email: String::from_utf8_lossy(author.email_bytes()).into_owned(),
                author_time: author.when().seconds(),
            });
        }

        Ok(commits)
    }

    /// Get a reference to the underlying git2 repository.
    ///
    /// Use sparingly - prefer high-level methods.
    #[must_use]
    pub fn inner(&self) -> &git2::Repository {
        &self.inner
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.git_dir())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use git2::{Signature, Time};
    use tempfile::TempDir;

    fn init_test_repo() -> (TempDir, Repository) {
        let temp = TempDir::new().unwrap();
        let repo = git2::Repository::init(temp.path()).unwrap();
        let wrapped = Repository { inner: repo };
        (temp, wrapped)
    }

    /// Create a commit on HEAD with a specific author identity.
    fn commit_as(repo: &Repository, name: &str, email: &str, time: i64) -> Oid {
        let repo = repo.inner();
        let sig = Signature::new(name, email, &Time::new(time, 0)).unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, "commit", &tree, &parents)
            .unwrap()
    }

    #[test]
    fn test_open_fails_outside_repository() {
        let temp = TempDir::new().unwrap();
        let result = Repository::open(temp.path());
        assert!(matches!(result, Err(Error::NotARepository)));
    }

    #[test]
    fn test_head_commit_resolves_tip() {
        let (_temp, repo) = init_test_repo();
        let tip = commit_as(&repo, "Alice", "alice@example.com", 1_000);
        assert_eq!(repo.head_commit().unwrap(), tip);
    }

    #[test]
    fn test_head_commit_unborn_branch() {
        let (_temp, repo) = init_test_repo();
        // No commits yet: HEAD exists but the branch is unborn.
        assert!(repo.head_commit().is_err());
    }

    #[test]
    fn test_history_is_newest_first() {
        let (_temp, repo) = init_test_repo();
        commit_as(&repo, "Alice", "alice@example.com", 1_000);
        commit_as(&repo, "Bob", "bob@example.com", 2_000);
        commit_as(&repo, "Carol", "carol@example.com", 3_000);

        let head = repo.head_commit().unwrap();
        let commits = repo.history_from(head).unwrap();

        let names: Vec<_> = commits.iter().map(|c| c.author_name.as_str()).collect();
        assert_eq!(names, ["Carol", "Bob", "Alice"]);
    }

    #[test]
    fn test_history_carries_author_metadata() {
        let (_temp, repo) = init_test_repo();
        commit_as(&repo, "Alice", "alice@example.com", 1_234);

        let head = repo.head_commit().unwrap();
        let commits = repo.history_from(head).unwrap();

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].author_name, "Alice");
        assert_eq!(commits[0].author_email, "alice@example.com");
        assert_eq!(commits[0].author_time, 1_234);
    }

    #[test]
    fn test_history_from_partial_start() {
        let (_temp, repo) = init_test_repo();
        commit_as(&repo, "Alice", "alice@example.com", 1_000);
        let middle = commit_as(&repo, "Bob", "bob@example.com", 2_000);
        commit_as(&repo, "Carol", "carol@example.com", 3_000);

        // Walking from an older commit excludes its descendants.
        let commits = repo.history_from(middle).unwrap();
        let names: Vec<_> = commits.iter().map(|c| c.author_name.as_str()).collect();
        assert_eq!(names, ["Bob", "Alice"]);
    }

}
