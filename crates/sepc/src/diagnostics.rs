//! Diagnostics
//!
//! Every problem a setter notices is reported here: logged through
//! `tracing` on the `sepc` target and recorded for the caller to inspect.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Options, StyleError, StyleResult};

/// Prefix on every logged message
pub const PREFIX: &str = "SEPC v2.0";

/// Diagnostic severity. Only chooses the log channel, never control flow,
/// unless `Options::throw_errors` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// The style concern a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Concern {
    /// Selector resolution
    Element,
    BackgroundColor,
    Color,
    Dimension,
    MinMaxSize,
    Margin,
    Padding,
    Border,
    Outline,
    BorderRadius,
    TextAlign,
    BackgroundImage,
    BackgroundRepeat,
    BackgroundAttachment,
    BackgroundPosition,
}

impl Concern {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::BackgroundColor => "backgroundColor",
            Self::Color => "color",
            Self::Dimension => "dimension",
            Self::MinMaxSize => "minMaxSize",
            Self::Margin => "margin",
            Self::Padding => "padding",
            Self::Border => "border",
            Self::Outline => "outline",
            Self::BorderRadius => "borderRadius",
            Self::TextAlign => "textAlign",
            Self::BackgroundImage => "backgroundImage",
            Self::BackgroundRepeat => "backgroundRepeat",
            Self::BackgroundAttachment => "backgroundAttachment",
            Self::BackgroundPosition => "backgroundPosition",
        }
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logged notice about missing, invalid or defaulted input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub concern: Concern,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, concern: Concern, message: impl Into<String>) -> Self {
        Self {
            severity,
            concern,
            message: message.into(),
        }
    }

    pub fn error(concern: Concern, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, concern, message)
    }

    pub fn warning(concern: Concern, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, concern, message)
    }

    pub fn info(concern: Concern, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, concern, message)
    }

    fn emit(&self) {
        match self.severity {
            Severity::Error => tracing::error!(target: "sepc", concern = %self.concern, "{}", self),
            Severity::Warning => tracing::warn!(target: "sepc", concern = %self.concern, "{}", self),
            Severity::Info => tracing::info!(target: "sepc", concern = %self.concern, "{}", self),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX} - {}: {}", self.concern, self.message)
    }
}

/// Applies the reporting options and keeps the record
#[derive(Debug, Default)]
pub(crate) struct Reporter {
    options: Options,
    records: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            records: Vec::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn records(&self) -> &[Diagnostic] {
        &self.records
    }

    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.records)
    }

    /// Log and record a diagnostic. Errors come back as `Err` only when
    /// the caller asked for them with `throw_errors`.
    pub fn report(&mut self, diagnostic: Diagnostic) -> StyleResult<()> {
        if self.options.suppress_warnings && diagnostic.severity < Severity::Error {
            return Ok(());
        }

        diagnostic.emit();
        self.records.push(diagnostic.clone());

        if self.options.throw_errors && diagnostic.severity == Severity::Error {
            return Err(StyleError::Rejected(diagnostic));
        }
        Ok(())
    }
}
