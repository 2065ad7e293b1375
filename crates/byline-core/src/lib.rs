//! # byline-core
//!
//! Contributor aggregation core for byline: folds an ordered commit
//! sequence into a deduplicated contributor set, orders it under a
//! selectable policy, and renders the result as text.

pub mod config;
pub mod contributors;
pub mod report;

mod error;

pub use config::{Config, ReportConfig};
pub use contributors::{Contributor, SortMode};
pub use error::{Error, Result};
pub use report::ReportOptions;
