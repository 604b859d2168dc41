//! Stylist - the entry point owning host, options and diagnostics
//!
//! The property setters live in `crate::setters` as further `impl` blocks.

use crate::diagnostics::{Concern, Diagnostic, Reporter, Severity};
use crate::{resolver, Options, StyleHost, StyleProperty, StyleResult};

/// Applies inline styles to the elements of a host document
///
/// Pass the host by value or as `&mut host`.
#[derive(Debug)]
pub struct Stylist<H: StyleHost> {
    host: H,
    reporter: Reporter,
}

impl<H: StyleHost> Stylist<H> {
    /// Create a stylist with default options
    pub fn new(host: H) -> Self {
        Self::with_options(host, Options::default())
    }

    pub fn with_options(host: H, options: Options) -> Self {
        Self {
            host,
            reporter: Reporter::new(options),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn options(&self) -> &Options {
        self.reporter.options()
    }

    /// Diagnostics reported so far, oldest first
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.reporter.records()
    }

    /// Drain the diagnostic record
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.reporter.take()
    }

    pub(crate) fn report(
        &mut self,
        severity: Severity,
        concern: Concern,
        message: impl Into<String>,
    ) -> StyleResult<()> {
        self.reporter.report(Diagnostic::new(severity, concern, message))
    }

    /// Resolve `selector` and write every declaration to each element
    pub(crate) fn apply(
        &mut self,
        selector: &str,
        declarations: &[(StyleProperty, &str)],
    ) -> StyleResult<()> {
        let elements = resolver::resolve(&self.host, selector, &mut self.reporter)?;
        for element in &elements {
            for &(property, value) in declarations {
                self.host.set_style(element, property, value);
            }
        }

        if !elements.is_empty() {
            tracing::debug!(
                "Applied {} to {} element(s) matching \"{}\"",
                declarations
                    .iter()
                    .map(|(property, value)| format!("{property}: {value}"))
                    .collect::<Vec<_>>()
                    .join("; "),
                elements.len(),
                selector
            );
        }
        Ok(())
    }
}
