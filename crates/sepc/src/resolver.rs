//! Selector resolution
//!
//! `"body"` (any ASCII case) targets the document body; anything else is
//! a class name. Nothing is cached, so every call sees the live document.

use crate::diagnostics::{Concern, Diagnostic, Reporter};
use crate::{StyleHost, StyleResult};

const INVALID_SELECTOR: &str = "Invalid element selector";
const NO_ELEMENTS: &str = "No elements found with the specified selector";

/// How a selector string is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Body,
    Class(&'a str),
}

impl<'a> Selector<'a> {
    /// `None` for an empty or blank selector
    pub fn parse(selector: &'a str) -> Option<Self> {
        if selector.trim().is_empty() {
            None
        } else if selector.eq_ignore_ascii_case("body") {
            Some(Self::Body)
        } else {
            Some(Self::Class(selector))
        }
    }
}

/// Resolve a selector to the elements to mutate
pub(crate) fn resolve<H: StyleHost>(
    host: &H,
    selector: &str,
    reporter: &mut Reporter,
) -> StyleResult<Vec<H::Element>> {
    match Selector::parse(selector) {
        None => {
            reporter.report(Diagnostic::error(Concern::Element, INVALID_SELECTOR))?;
            Ok(Vec::new())
        }
        Some(Selector::Body) => Ok(host.body().into_iter().collect()),
        Some(Selector::Class(class_names)) => {
            let elements = host.elements_by_class_name(class_names);
            if elements.is_empty() {
                reporter.report(Diagnostic::warning(
                    Concern::Element,
                    format!("{NO_ELEMENTS}: \"{class_names}\""),
                ))?;
            }
            Ok(elements)
        }
    }
}
