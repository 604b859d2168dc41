//! Text color

use crate::diagnostics::{Concern, Severity};
use crate::validate::{self, Validity};
use crate::{StyleHost, StyleProperty, StyleResult, Stylist};

const NO_COLOR: &str = "No color defined, defaulting to transparent";

impl<H: StyleHost> Stylist<H> {
    /// Set the text `color`. A missing color is an error and falls back
    /// to `transparent`.
    pub fn color(&mut self, selector: &str, text_color: Option<&str>) -> StyleResult<()> {
        let text_color = match validate::check_value(text_color) {
            Validity::Valid(text_color) => text_color,
            Validity::Missing | Validity::Invalid(_) => {
                self.report(Severity::Error, Concern::Color, NO_COLOR)?;
                "transparent"
            }
        };
        self.apply(selector, &[(StyleProperty::Color, text_color)])
    }
}
