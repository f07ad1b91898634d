//! Category labels and the filters that route them to console streams.
//!
//! A category is any string. The built-in severity methods use the constants
//! below, but callers may log under labels of their own through
//! [`Logger::log`](crate::Logger::log).

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub const INFO: &str = "INFO";
pub const WARN: &str = "WARN";
pub const VERBOSE: &str = "VERBOSE";
pub const DEBUG: &str = "DEBUG";
pub const ERROR: &str = "ERROR";
pub const CRITICAL: &str = "CRITICAL";

/// Decides whether a category reaches a console stream.
///
/// `Unrestricted` lets every category through; `Restricted` passes only exact
/// (case-sensitive) members of the set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FilterRepr")]
pub enum CategoryFilter {
    Unrestricted,
    Restricted(BTreeSet<String>),
}

impl CategoryFilter {
    /// Restricts output to exactly the given categories.
    pub fn only<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Restricted(categories.into_iter().map(Into::into).collect())
    }

    /// An empty restricted set silences the stream entirely.
    #[must_use]
    pub const fn none() -> Self {
        Self::Restricted(BTreeSet::new())
    }

    #[must_use]
    pub fn allows(&self, category: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Restricted(set) => set.contains(category),
        }
    }

    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted)
    }

    /// Stdout receives informational chatter only.
    #[must_use]
    pub fn default_stdout() -> Self {
        Self::only([INFO])
    }

    /// Stderr receives everything that signals trouble.
    #[must_use]
    pub fn default_stderr() -> Self {
        Self::only([ERROR, WARN, CRITICAL])
    }
}

impl<S: Into<String>> FromIterator<S> for CategoryFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::only(iter)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrestricted => f.write_str("*"),
            Self::Restricted(set) => {
                let joined: Vec<&str> = set.iter().map(String::as_str).collect();
                f.write_str(&joined.join(","))
            }
        }
    }
}

/// Returned when a settings value is a string other than the wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFilterError(String);

impl fmt::Display for ParseFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid category filter '{}': expected a list of categories, \"*\" or \"all\"",
            self.0
        )
    }
}

impl std::error::Error for ParseFilterError {}

/// Parses `*`/`all` as unrestricted, anything else as a comma-separated list.
impl FromStr for CategoryFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if is_wildcard(trimmed) {
            return Ok(Self::Unrestricted);
        }
        if trimmed.is_empty() {
            return Ok(Self::none());
        }
        Ok(trimmed
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect())
    }
}

fn is_wildcard(s: &str) -> bool {
    s == "*" || s.eq_ignore_ascii_case("all")
}

/// Settings files spell "no filter" as a wildcard string because TOML has no null.
#[derive(Deserialize)]
#[serde(untagged)]
enum FilterRepr {
    Wildcard(String),
    List(Vec<String>),
}

impl TryFrom<FilterRepr> for CategoryFilter {
    type Error = ParseFilterError;

    fn try_from(repr: FilterRepr) -> Result<Self, Self::Error> {
        match repr {
            FilterRepr::List(list) => Ok(Self::only(list)),
            FilterRepr::Wildcard(s) if is_wildcard(s.trim()) => Ok(Self::Unrestricted),
            FilterRepr::Wildcard(s) => Err(ParseFilterError(s)),
        }
    }
}

