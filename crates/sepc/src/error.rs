//! Error types

use crate::Diagnostic;

/// Result type for setters
pub type StyleResult<T> = Result<T, StyleError>;

/// Setter errors. Only produced when `Options::throw_errors` is set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("{0}")]
    Rejected(Diagnostic),
}

impl StyleError {
    /// The error diagnostic that aborted the call
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            Self::Rejected(diagnostic) => diagnostic,
        }
    }
}

/// A string that is not one of a property's keywords
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown keyword '{0}'")]
pub struct UnknownKeyword(pub String);
