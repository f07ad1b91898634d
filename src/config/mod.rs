//! Settings merged into a running logger, usually loaded from a file owned by
//! the embedding application.
//!
//! Only three keys are recognized: `stdout_categories`, `stderr_categories`
//! and `datetime_format`. Anything else in the mapping is ignored, and a key
//! that is absent leaves the logger's current value untouched.

use crate::category::CategoryFilter;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};

/// A partial set of logger settings; `None` means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// A present `null` (JSON) lifts the filter; TOML spells that `"*"`.
    #[serde(alias = "stdoutCategories", deserialize_with = "present_filter")]
    pub stdout_categories: Option<CategoryFilter>,
    #[serde(alias = "stderrCategories", deserialize_with = "present_filter")]
    pub stderr_categories: Option<CategoryFilter>,
    #[serde(alias = "datetimeFormat")]
    pub datetime_format: Option<String>,
}

/// Only runs when the key is present, so absence still falls back to `None`.
fn present_filter<'de, D>(deserializer: D) -> Result<Option<CategoryFilter>, D::Error>
where
    D: Deserializer<'de>,
{
    let filter = Option::<CategoryFilter>::deserialize(deserializer)?;
    Ok(Some(filter.unwrap_or(CategoryFilter::Unrestricted)))
}

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stdout_categories(mut self, filter: CategoryFilter) -> Self {
        self.stdout_categories = Some(filter);
        self
    }

    #[must_use]
    pub fn stderr_categories(mut self, filter: CategoryFilter) -> Self {
        self.stderr_categories = Some(filter);
        self
    }

    #[must_use]
    pub fn datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = Some(format.into());
        self
    }

    /// # Errors
    /// Fails on TOML syntax errors or a category value that is neither a list nor `"*"`.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Fails on JSON syntax errors or a category value that is neither a list, `null`, nor `"*"`.
    pub fn from_json_str(content: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a `.toml` or `.json` settings file; a leading `~` is expanded.
    ///
    /// # Errors
    /// Fails if the file can't be read or parsed, or the extension is not recognized.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let path = expand_tilde(path);
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&fs::read_to_string(&path)?),
            Some("json") => Self::from_json_str(&fs::read_to_string(&path)?),
            _ => Err(crate::Error::UnsupportedSettingsFormat(path)),
        }
    }

    /// True when merging would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stdout_categories.is_none()
            && self.stderr_categories.is_none()
            && self.datetime_format.is_none()
    }
}

/// Paths in settings and builder calls are often written as `~/logs`.
pub(crate) fn expand_tilde(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    if !raw.starts_with('~') {
        return path.to_path_buf();
    }
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}
