//! Width/height and their min/max constraints

use crate::diagnostics::{Concern, Severity};
use crate::keywords::{Axis, Keyword, SizeBound};
use crate::validate::{self, Validity};
use crate::{StyleHost, StyleProperty, StyleResult, Stylist};

const NO_WIDTH: &str = "No width defined";
const NO_HEIGHT: &str = "No height defined";
const NO_DIMENSIONS: &str = "No width or height defined";
const NO_SIZE: &str = "No size value defined for min/max size";

impl<H: StyleHost> Stylist<H> {
    /// Set `width` and/or `height`.
    ///
    /// Each side is optional and written independently; a missing side is
    /// reported and left untouched.
    pub fn dimension(
        &mut self,
        selector: &str,
        width: Option<&str>,
        height: Option<&str>,
    ) -> StyleResult<()> {
        let width = validate::present(width);
        let height = validate::present(height);

        let mut declarations = Vec::with_capacity(2);
        match (width, height) {
            (None, None) => {
                return self.report(Severity::Warning, Concern::Dimension, NO_DIMENSIONS);
            }
            (Some(width), None) => {
                self.report(Severity::Warning, Concern::Dimension, NO_HEIGHT)?;
                declarations.push((StyleProperty::Width, width));
            }
            (None, Some(height)) => {
                self.report(Severity::Warning, Concern::Dimension, NO_WIDTH)?;
                declarations.push((StyleProperty::Height, height));
            }
            (Some(width), Some(height)) => {
                declarations.push((StyleProperty::Width, width));
                declarations.push((StyleProperty::Height, height));
            }
        }
        self.apply(selector, &declarations)
    }

    /// Set one of `min-width`, `max-width`, `min-height`, `max-height`.
    ///
    /// `bound` defaults to `min` and `axis` to `width`. Without a size
    /// nothing is written.
    pub fn min_max_size(
        &mut self,
        selector: &str,
        bound: Option<&str>,
        axis: Option<&str>,
        size: Option<&str>,
    ) -> StyleResult<()> {
        let Some(size) = validate::present(size) else {
            return self.report(Severity::Error, Concern::MinMaxSize, NO_SIZE);
        };

        let bound = match validate::check_keyword::<SizeBound>(bound) {
            Validity::Valid(bound) => bound,
            Validity::Missing => {
                self.report(
                    Severity::Info,
                    Concern::MinMaxSize,
                    "No min or max bound defined, defaulting to 'min'",
                )?;
                SizeBound::Min
            }
            Validity::Invalid(value) => {
                self.report(
                    Severity::Warning,
                    Concern::MinMaxSize,
                    format!(
                        "Invalid bound '{value}', expected one of: {}. Defaulting to 'min'",
                        SizeBound::expected()
                    ),
                )?;
                SizeBound::Min
            }
        };

        let axis = match validate::check_keyword::<Axis>(axis) {
            Validity::Valid(axis) => axis,
            Validity::Missing => {
                self.report(
                    Severity::Info,
                    Concern::MinMaxSize,
                    "No width or height defined, defaulting to 'width'",
                )?;
                Axis::Width
            }
            Validity::Invalid(value) => {
                self.report(
                    Severity::Warning,
                    Concern::MinMaxSize,
                    format!(
                        "Invalid dimension '{value}', expected one of: {}. Defaulting to 'width'",
                        Axis::expected()
                    ),
                )?;
                Axis::Width
            }
        };

        let property = match (bound, axis) {
            (SizeBound::Min, Axis::Width) => StyleProperty::MinWidth,
            (SizeBound::Max, Axis::Width) => StyleProperty::MaxWidth,
            (SizeBound::Min, Axis::Height) => StyleProperty::MinHeight,
            (SizeBound::Max, Axis::Height) => StyleProperty::MaxHeight,
        };
        self.apply(selector, &[(property, size)])
    }
}
