//! Unified error type for timberline operations.
//!
//! Logging calls themselves never fail; only loading settings from disk or
//! from a string can surface an error to the caller.

use std::path::PathBuf;

/// Error type for timberline operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML settings parsing error.
    TomlParse(toml::de::Error),
    /// JSON settings parsing error.
    JsonParse(serde_json::Error),
    /// Settings file extension is neither `.toml` nor `.json`.
    UnsupportedSettingsFormat(PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::TomlParse(e) => write!(f, "TOML parse error: {e}"),
            Self::JsonParse(e) => write!(f, "JSON parse error: {e}"),
            Self::UnsupportedSettingsFormat(p) => {
                write!(f, "unsupported settings format: {}", p.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::TomlParse(e) => Some(e),
            Self::JsonParse(e) => Some(e),
            Self::UnsupportedSettingsFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::TomlParse(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::JsonParse(e)
    }
}
