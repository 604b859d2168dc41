//! Text alignment

use crate::diagnostics::{Concern, Severity};
use crate::keywords::{Keyword, TextAlign};
use crate::validate::{self, Validity};
use crate::{StyleHost, StyleProperty, StyleResult, Stylist};

const NO_PLACEMENT: &str = "No text align placement defined, defaulting to 'left'";

impl<H: StyleHost> Stylist<H> {
    /// Set `text-align`, defaulting to `left`
    pub fn text_align(&mut self, selector: &str, placement: Option<&str>) -> StyleResult<()> {
        let placement = match validate::check_keyword::<TextAlign>(placement) {
            Validity::Valid(placement) => placement,
            Validity::Missing => {
                self.report(Severity::Warning, Concern::TextAlign, NO_PLACEMENT)?;
                TextAlign::Left
            }
            Validity::Invalid(value) => {
                self.report(
                    Severity::Warning,
                    Concern::TextAlign,
                    format!(
                        "Invalid text align placement '{value}', expected one of: {}. Defaulting to 'left'",
                        TextAlign::expected()
                    ),
                )?;
                TextAlign::Left
            }
        };
        self.apply(selector, &[(StyleProperty::TextAlign, placement.as_str())])
    }
}

#[cfg(test)]
mod tests {
    use crate::setters::test_support::{document_with, style_of};
    use crate::{Severity, Stylist};

    #[test]
    fn test_text_align() {
        let (mut doc, ids) = document_with("t", 1);
        Stylist::new(&mut doc).text_align("t", Some("justify")).unwrap();
        assert_eq!(style_of(&doc, ids[0], "textAlign"), Some("justify"));
    }

    #[test]
    fn test_text_align_defaults_to_left() {
        let (mut doc, ids) = document_with("t", 1);
        let mut stylist = Stylist::new(&mut doc);

        stylist.text_align("t", None).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "text-align"), Some("left"));

        stylist.text_align("t", Some("right")).unwrap();
        stylist.text_align("t", Some("sideways")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "text-align"), Some("left"));

        assert_eq!(stylist.diagnostics().len(), 2);
        assert!(stylist.diagnostics().iter().all(|d| d.severity == Severity::Warning));
    }
}
