//! Border, outline and border-radius

use crate::diagnostics::{Concern, Severity};
use crate::keywords::{BorderStyle, Keyword, RadiusPreset};
use crate::validate::{self, Validity};
use crate::{StyleHost, StyleProperty, StyleResult, Stylist};

const NO_RADIUS: &str = "Radius is not defined";
const NEGATIVE_RADIUS: &str = "Radius is less than 0px";

impl<H: StyleHost> Stylist<H> {
    /// Set the `border` shorthand to `"{size} {style} {color}"`.
    ///
    /// `color` defaults to `currentColor` and `style` to `solid`.
    pub fn border(
        &mut self,
        selector: &str,
        size: Option<&str>,
        color: Option<&str>,
        style: Option<&str>,
    ) -> StyleResult<()> {
        self.line(Concern::Border, StyleProperty::Border, selector, size, color, style)
    }

    /// Set the `outline` shorthand, with the same defaults as `border`
    pub fn outline(
        &mut self,
        selector: &str,
        size: Option<&str>,
        color: Option<&str>,
        style: Option<&str>,
    ) -> StyleResult<()> {
        self.line(Concern::Outline, StyleProperty::Outline, selector, size, color, style)
    }

    fn line(
        &mut self,
        concern: Concern,
        property: StyleProperty,
        selector: &str,
        size: Option<&str>,
        color: Option<&str>,
        style: Option<&str>,
    ) -> StyleResult<()> {
        let Some(size) = validate::present(size) else {
            return self.report(Severity::Error, concern, format!("No {concern} size defined"));
        };

        let color = match validate::check_value(color) {
            Validity::Valid(color) => color,
            Validity::Missing | Validity::Invalid(_) => {
                self.report(
                    Severity::Warning,
                    concern,
                    format!("No {concern} color defined, defaulting to currentColor"),
                )?;
                "currentColor"
            }
        };

        let style = match validate::check_keyword::<BorderStyle>(style) {
            Validity::Valid(style) => style,
            Validity::Missing => {
                self.report(
                    Severity::Warning,
                    concern,
                    format!("No {concern} type defined, defaulting to solid"),
                )?;
                BorderStyle::Solid
            }
            Validity::Invalid(value) => {
                self.report(
                    Severity::Warning,
                    concern,
                    format!(
                        "Invalid {concern} type '{value}', expected one of: {}. Defaulting to solid",
                        BorderStyle::expected()
                    ),
                )?;
                BorderStyle::Solid
            }
        };

        let value = format!("{size} {style} {color}");
        self.apply(selector, &[(property, value.as_str())])
    }

    /// Set `border-radius` from a literal length or a named preset
    /// (`circle`, `pill`, `rounded`, `rounded-sm` ... `rounded-2xl`).
    ///
    /// A missing or negative radius is reported and nothing is written.
    pub fn border_radius(&mut self, selector: &str, radius: Option<&str>) -> StyleResult<()> {
        let Some(radius) = validate::present(radius) else {
            return self.report(Severity::Warning, Concern::BorderRadius, NO_RADIUS);
        };

        let radius = match RadiusPreset::parse_keyword(radius) {
            Some(preset) => preset.value(),
            None if validate::is_negative_length(radius) => {
                return self.report(Severity::Warning, Concern::BorderRadius, NEGATIVE_RADIUS);
            }
            None => radius,
        };
        self.apply(selector, &[(StyleProperty::BorderRadius, radius)])
    }
}

#[cfg(test)]
mod tests {
    use crate::setters::test_support::{document_with, style_of};
    use crate::{Concern, Severity, Stylist};

    #[test]
    fn test_border_shorthand() {
        let (mut doc, ids) = document_with("b", 2);
        let mut stylist = Stylist::new(&mut doc);
        stylist.border("b", Some("2px"), Some("black"), Some("solid")).unwrap();

        assert!(stylist.diagnostics().is_empty());
        for id in ids {
            assert_eq!(style_of(stylist.host(), id, "border"), Some("2px solid black"));
        }
    }

    #[test]
    fn test_border_defaults() {
        let (mut doc, ids) = document_with("b", 1);
        let mut stylist = Stylist::new(&mut doc);
        stylist.border("b", Some("1px"), None, None).unwrap();

        assert_eq!(style_of(stylist.host(), ids[0], "border"), Some("1px solid currentColor"));
        assert_eq!(stylist.diagnostics().len(), 2);
        assert!(stylist.diagnostics().iter().all(|d| d.severity == Severity::Warning));
    }

    #[test]
    fn test_border_invalid_style() {
        let (mut doc, ids) = document_with("b", 1);
        let mut stylist = Stylist::new(&mut doc);
        stylist.border("b", Some("3px"), Some("red"), Some("wavy")).unwrap();

        assert_eq!(style_of(stylist.host(), ids[0], "border"), Some("3px solid red"));
        assert!(stylist.diagnostics()[0].message.contains("'wavy'"));
    }

    #[test]
    fn test_border_requires_size() {
        let (mut doc, ids) = document_with("b", 1);
        let mut stylist = Stylist::new(&mut doc);
        stylist.border("b", None, Some("red"), Some("dashed")).unwrap();

        assert_eq!(style_of(stylist.host(), ids[0], "border"), None);
        assert_eq!(stylist.diagnostics()[0].severity, Severity::Error);
    }

    #[test]
    fn test_outline() {
        let (mut doc, ids) = document_with("o", 1);
        let mut stylist = Stylist::new(&mut doc);
        stylist.outline("o", Some("4px"), Some("blue"), Some("DOTTED")).unwrap();

        assert_eq!(style_of(stylist.host(), ids[0], "outline"), Some("4px dotted blue"));
        assert_eq!(style_of(stylist.host(), ids[0], "border"), None);

        stylist.outline("o", Some("1px"), None, Some("double")).unwrap();
        assert_eq!(stylist.diagnostics()[0].concern, Concern::Outline);
    }

    #[test]
    fn test_border_radius_presets_and_literals() {
        let (mut doc, ids) = document_with("r", 1);
        let mut stylist = Stylist::new(&mut doc);

        stylist.border_radius("r", Some("circle")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "border-radius"), Some("50%"));

        stylist.border_radius("r", Some("rounded-lg")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "border-radius"), Some("0.5rem"));

        stylist.border_radius("r", Some("12px 4px")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "border-radius"), Some("12px 4px"));
        assert!(stylist.diagnostics().is_empty());
    }

    #[test]
    fn test_border_radius_rejections() {
        let (mut doc, ids) = document_with("r", 1);
        let mut stylist = Stylist::new(&mut doc);
        stylist.border_radius("r", Some("pill")).unwrap();
        stylist.border_radius("r", None).unwrap();
        stylist.border_radius("r", Some("-3px")).unwrap();

        assert_eq!(style_of(stylist.host(), ids[0], "border-radius"), Some("9999px"));
        assert_eq!(stylist.diagnostics().len(), 2);
        assert_eq!(stylist.diagnostics()[1].message, "Radius is less than 0px");
    }
}
