//! # byline-git
//!
//! Git history access layer for byline, built on git2-rs.
//! Resolves the checked-out branch tip and materializes commit
//! authorship metadata for aggregation.

mod error;
mod repository;
mod traits;

pub use error::{Error, Result};
pub use git2::Oid;
pub use repository::{CommitRecord, Repository};
pub use traits::HistorySource;
