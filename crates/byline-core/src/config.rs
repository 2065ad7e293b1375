//! Configuration management for byline.
//!
//! Configuration is read from an optional `byline.toml` at the
//! repository root; a missing file yields the defaults. Unrecognized
//! sort values are deliberately not an error here - they degrade to
//! the default policy when resolved.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::contributors::SortMode;
use crate::error::Result;
use crate::report::{ReportOptions, unescape_newlines};

/// Byline configuration loaded from byline.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Load config from a TOML file.
    ///
    /// A missing file is not an error; defaults are returned.
    ///
    /// # Errors
    /// Returns error if the file exists but can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Settings for the contributor report.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// String prepended to every contributor name.
    #[serde(default = "default_prefix")]
    pub contributor_prefix: String,

    /// Header printed above the report.
    #[serde(default = "default_header")]
    pub header: String,

    /// Whether contribution counts are listed.
    #[serde(default = "default_show_counts")]
    pub show_counts: bool,

    /// Whether contributor email addresses are listed.
    #[serde(default)]
    pub show_email: bool,

    /// Sort order: `count`, `date` or `name`. Absent or unrecognized
    /// values behave as `count`.
    #[serde(default)]
    pub sort: Option<String>,

    /// File to write the report to instead of stdout.
    #[serde(default)]
    pub output_file: Option<PathBuf>,

    /// Text appended after the report.
    #[serde(default)]
    pub footer: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            contributor_prefix: default_prefix(),
            header: default_header(),
            show_counts: default_show_counts(),
            show_email: false,
            sort: None,
            output_file: None,
            footer: None,
        }
    }
}

impl ReportConfig {
    /// Resolve the configured values into rendering options,
    /// unescaping literal `\n` sequences and parsing the sort mode.
    #[must_use]
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            contributor_prefix: unescape_newlines(&self.contributor_prefix),
            header: unescape_newlines(&self.header),
            show_counts: self.show_counts,
            show_email: self.show_email,
            sort: SortMode::parse(self.sort.as_deref()),
        }
    }
}

fn default_prefix() -> String {
    " * ".into()
}

fn default_header() -> String {
    "Contributors\n============\n".into()
}

const fn default_show_counts() -> bool {
    true
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.report.contributor_prefix, " * ");
        assert_eq!(config.report.header, "Contributors\n============\n");
        assert!(config.report.show_counts);
        assert!(!config.report.show_email);
        assert!(config.report.sort.is_none());
        assert!(config.report.output_file.is_none());
        assert!(config.report.footer.is_none());
    }

    #[test]
    fn test_missing_config_returns_default() {
        let config = Config::load("/nonexistent/path/byline.toml").unwrap();
        assert_eq!(config.report.contributor_prefix, " * ");
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("byline.toml");
        std::fs::write(
            &path,
            r#"
[report]
contributor_prefix = " - "
show_email = true
sort = "name"
footer = "Generated by byline"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.report.contributor_prefix, " - ");
        assert!(config.report.show_email);
        // Unset fields keep their defaults.
        assert!(config.report.show_counts);
        assert_eq!(config.report.sort.as_deref(), Some("name"));
        assert_eq!(config.report.footer.as_deref(), Some("Generated by byline"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("byline.toml");
        std::fs::write(&path, "[report\n").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_options_resolve_sort_and_unescape() {
        let config = ReportConfig {
            header: "Authors\\n=======\\n".to_string(),
            sort: Some("DATE".to_string()),
            ..ReportConfig::default()
        };
        let options = config.options();
        assert_eq!(options.header, "Authors\n=======\n");
        assert_eq!(options.sort, SortMode::Date);
    }

    #[test]
    fn test_options_unknown_sort_falls_back() {
        let config = ReportConfig {
            sort: Some("popularity".to_string()),
            ..ReportConfig::default()
        };
        assert_eq!(config.options().sort, SortMode::Count);
    }
}
