//! Stylist configuration

use serde::{Deserialize, Serialize};

/// Reporting options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Drop warning and info diagnostics (errors are always reported)
    pub suppress_warnings: bool,

    /// Return error diagnostics as `Err(StyleError)` instead of only
    /// logging them. The failing call writes nothing.
    pub throw_errors: bool,
}

impl Options {
    /// Options that turn error diagnostics into `Err`
    pub fn strict() -> Self {
        Self {
            throw_errors: true,
            ..Self::default()
        }
    }

    /// Options that only report errors
    pub fn quiet() -> Self {
        Self {
            suppress_warnings: true,
            ..Self::default()
        }
    }
}
