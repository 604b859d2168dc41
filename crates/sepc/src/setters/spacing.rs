//! Margin and padding

use crate::diagnostics::{Concern, Severity};
use crate::keywords::{Keyword, Side};
use crate::validate::{self, Validity};
use crate::{StyleHost, StyleProperty, StyleResult, Stylist};

/// The shorthand and per-side longhands of one box edge property
struct EdgeProperties {
    concern: Concern,
    all: StyleProperty,
    top: StyleProperty,
    right: StyleProperty,
    bottom: StyleProperty,
    left: StyleProperty,
}

impl EdgeProperties {
    fn for_side(&self, side: Side) -> StyleProperty {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::All => self.all,
        }
    }
}

const MARGIN: EdgeProperties = EdgeProperties {
    concern: Concern::Margin,
    all: StyleProperty::Margin,
    top: StyleProperty::MarginTop,
    right: StyleProperty::MarginRight,
    bottom: StyleProperty::MarginBottom,
    left: StyleProperty::MarginLeft,
};

const PADDING: EdgeProperties = EdgeProperties {
    concern: Concern::Padding,
    all: StyleProperty::Padding,
    top: StyleProperty::PaddingTop,
    right: StyleProperty::PaddingRight,
    bottom: StyleProperty::PaddingBottom,
    left: StyleProperty::PaddingLeft,
};

impl<H: StyleHost> Stylist<H> {
    /// Set `margin`, or a single side of it when `side` is given.
    ///
    /// `side` is one of `top`, `right`, `bottom`, `left`, `all` (default).
    pub fn margin(&mut self, selector: &str, size: Option<&str>, side: Option<&str>) -> StyleResult<()> {
        self.edge(&MARGIN, selector, size, side)
    }

    /// Set `padding`, or a single side of it when `side` is given.
    pub fn padding(&mut self, selector: &str, size: Option<&str>, side: Option<&str>) -> StyleResult<()> {
        self.edge(&PADDING, selector, size, side)
    }

    fn edge(
        &mut self,
        edge: &EdgeProperties,
        selector: &str,
        size: Option<&str>,
        side: Option<&str>,
    ) -> StyleResult<()> {
        let concern = edge.concern;
        let Some(size) = validate::present(size) else {
            return self.report(Severity::Error, concern, format!("No {concern} size defined"));
        };

        let side = match validate::check_keyword::<Side>(side) {
            Validity::Valid(side) => side,
            Validity::Missing => Side::All,
            Validity::Invalid(value) => {
                self.report(
                    Severity::Warning,
                    concern,
                    format!(
                        "Invalid {concern} side '{value}', expected one of: {}. Defaulting to 'all'",
                        Side::expected()
                    ),
                )?;
                Side::All
            }
        };

        self.apply(selector, &[(edge.for_side(side), size)])
    }
}

#[cfg(test)]
mod tests {
    use crate::setters::test_support::{document_with, style_of};
    use crate::{Concern, Severity, Stylist};

    #[test]
    fn test_margin_single_side() {
        let (mut doc, ids) = document_with("m", 1);
        Stylist::new(&mut doc).margin("m", Some("15px"), Some("top")).unwrap();

        assert_eq!(style_of(&doc, ids[0], "marginTop"), Some("15px"));
        for side in ["margin", "margin-right", "margin-bottom", "margin-left"] {
            assert_eq!(style_of(&doc, ids[0], side), None, "{side}");
        }
    }

    #[test]
    fn test_margin_sides_accumulate() {
        let (mut doc, ids) = document_with("m", 1);
        let mut stylist = Stylist::new(&mut doc);
        stylist.margin("m", Some("1px"), Some("left")).unwrap();
        stylist.margin("m", Some("2px"), Some("right")).unwrap();

        assert_eq!(style_of(stylist.host(), ids[0], "margin-left"), Some("1px"));
        assert_eq!(style_of(stylist.host(), ids[0], "margin-right"), Some("2px"));
    }

    #[test]
    fn test_margin_shorthand() {
        let (mut doc, ids) = document_with("m", 1);
        Stylist::new(&mut doc).margin("m", Some("50px"), None).unwrap();
        assert_eq!(style_of(&doc, ids[0], "margin"), Some("50px"));
    }

    #[test]
    fn test_margin_last_write_wins_across_shorthand() {
        let (mut doc, ids) = document_with("m", 1);
        let mut stylist = Stylist::new(&mut doc);
        stylist.margin("m", Some("15px"), Some("top")).unwrap();
        stylist.margin("m", Some("50px"), None).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "margin-top"), None);

        stylist.margin("m", Some("20px"), Some("top")).unwrap();
        let style = stylist.host().style(ids[0]).unwrap();
        assert_eq!(style.css_text(), "margin: 50px; margin-top: 20px;");
    }

    #[test]
    fn test_missing_size_writes_nothing() {
        let (mut doc, ids) = document_with("p", 1);
        let mut stylist = Stylist::new(&mut doc);
        stylist.padding("p", None, Some("top")).unwrap();

        assert!(stylist.host().style(ids[0]).unwrap().is_empty());
        let d = &stylist.diagnostics()[0];
        assert_eq!((d.severity, d.concern), (Severity::Error, Concern::Padding));
        assert_eq!(d.message, "No padding size defined");
    }

    #[test]
    fn test_invalid_side_falls_back_to_all() {
        let (mut doc, ids) = document_with("p", 1);
        let mut stylist = Stylist::new(&mut doc);
        stylist.padding("p", Some("4px"), Some("middle")).unwrap();

        assert_eq!(style_of(stylist.host(), ids[0], "padding"), Some("4px"));
        assert_eq!(stylist.diagnostics()[0].severity, Severity::Warning);
    }
}
