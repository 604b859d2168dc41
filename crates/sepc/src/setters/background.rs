//! Background setters: color, image, repeat, attachment, position

use crate::diagnostics::{Concern, Severity};
use crate::keywords::{BackgroundAttachment, BackgroundRepeat, Keyword};
use crate::validate::{self, Validity};
use crate::{StyleHost, StyleProperty, StyleResult, Stylist};

const NO_BACKGROUND_COLOR: &str = "No background color defined, defaulting to transparent";
const NO_IMAGE: &str = "No background image URL defined";
const NO_REPEAT: &str = "No repeat value defined, defaulting to 'no-repeat'";
const NO_ATTACHMENT: &str = "No attachment value defined, defaulting to 'scroll'";
const NO_POSITION: &str = "No position value defined, defaulting to center";

impl<H: StyleHost> Stylist<H> {
    /// Set `background-color`. A missing color is an error and falls back
    /// to `transparent`.
    pub fn background_color(&mut self, selector: &str, color: Option<&str>) -> StyleResult<()> {
        let color = match validate::check_value(color) {
            Validity::Valid(color) => color,
            Validity::Missing | Validity::Invalid(_) => {
                self.report(Severity::Error, Concern::BackgroundColor, NO_BACKGROUND_COLOR)?;
                "transparent"
            }
        };
        self.apply(selector, &[(StyleProperty::BackgroundColor, color)])
    }

    /// Set `background-image`.
    ///
    /// A bare URL is wrapped in `url(...)`; values already starting with
    /// `url(` (any case) and the keyword `none` are written as given. Without a URL
    /// nothing is written, since there is no sensible default image.
    pub fn background_image(&mut self, selector: &str, url: Option<&str>) -> StyleResult<()> {
        let Some(url) = validate::present(url) else {
            return self.report(Severity::Error, Concern::BackgroundImage, NO_IMAGE);
        };

        let value = if url.eq_ignore_ascii_case("none") {
            "none".to_string()
        } else if url.get(..4).is_some_and(|head| head.eq_ignore_ascii_case("url(")) {
            url.to_string()
        } else {
            format!("url({url})")
        };
        self.apply(selector, &[(StyleProperty::BackgroundImage, value.as_str())])
    }

    /// Set `background-repeat`, defaulting to `no-repeat`
    pub fn background_repeat(&mut self, selector: &str, repeat: Option<&str>) -> StyleResult<()> {
        let repeat = match validate::check_keyword::<BackgroundRepeat>(repeat) {
            Validity::Valid(repeat) => repeat,
            Validity::Missing => {
                self.report(Severity::Info, Concern::BackgroundRepeat, NO_REPEAT)?;
                BackgroundRepeat::NoRepeat
            }
            Validity::Invalid(value) => {
                self.report(
                    Severity::Warning,
                    Concern::BackgroundRepeat,
                    format!(
                        "Invalid background repeat value '{value}', expected one of: {}. Defaulting to 'no-repeat'",
                        BackgroundRepeat::expected()
                    ),
                )?;
                BackgroundRepeat::NoRepeat
            }
        };
        self.apply(selector, &[(StyleProperty::BackgroundRepeat, repeat.as_str())])
    }

    /// Set `background-attachment`, defaulting to `scroll`
    pub fn background_attachment(
        &mut self,
        selector: &str,
        attachment: Option<&str>,
    ) -> StyleResult<()> {
        let attachment = match validate::check_keyword::<BackgroundAttachment>(attachment) {
            Validity::Valid(attachment) => attachment,
            Validity::Missing => {
                self.report(Severity::Warning, Concern::BackgroundAttachment, NO_ATTACHMENT)?;
                BackgroundAttachment::Scroll
            }
            Validity::Invalid(value) => {
                self.report(
                    Severity::Warning,
                    Concern::BackgroundAttachment,
                    format!(
                        "Invalid background attachment value '{value}', expected one of: {}. Defaulting to 'scroll'",
                        BackgroundAttachment::expected()
                    ),
                )?;
                BackgroundAttachment::Scroll
            }
        };
        self.apply(
            selector,
            &[(StyleProperty::BackgroundAttachment, attachment.as_str())],
        )
    }

    /// Set `background-position`.
    ///
    /// Accepts single keywords (`top`), compound presets (`topLeft` →
    /// `top left`) and two-component values (`"25% 75%"`). Anything else
    /// falls back to `center`.
    pub fn background_position(
        &mut self,
        selector: &str,
        position: Option<&str>,
    ) -> StyleResult<()> {
        let position = match validate::present(position) {
            None => {
                self.report(Severity::Warning, Concern::BackgroundPosition, NO_POSITION)?;
                "center".to_string()
            }
            Some(raw) => match validate::background_position(raw) {
                Some(position) => position,
                None => {
                    self.report(
                        Severity::Warning,
                        Concern::BackgroundPosition,
                        format!("Invalid position value '{raw}', defaulting to center"),
                    )?;
                    "center".to_string()
                }
            },
        };
        self.apply(selector, &[(StyleProperty::BackgroundPosition, position.as_str())])
    }
}

#[cfg(test)]
mod tests {
    use crate::setters::test_support::{document_with, style_of};
    use crate::{Concern, Severity, Stylist};

    #[test]
    fn test_background_color_sets_all_matches() {
        let (mut doc, ids) = document_with("card", 3);
        Stylist::new(&mut doc).background_color("card", Some("red")).unwrap();

        for id in ids {
            assert_eq!(style_of(&doc, id, "backgroundColor"), Some("red"));
        }
    }

    #[test]
    fn test_background_color_defaults_to_transparent() {
        let (mut doc, ids) = document_with("card", 1);
        let mut stylist = Stylist::new(&mut doc);
        stylist.background_color("card", Some("  ")).unwrap();

        assert_eq!(stylist.diagnostics().len(), 1);
        assert_eq!(stylist.diagnostics()[0].severity, Severity::Error);
        drop(stylist);
        assert_eq!(style_of(&doc, ids[0], "background-color"), Some("transparent"));
    }

    #[test]
    fn test_background_image_wrapping() {
        let (mut doc, ids) = document_with("hero", 1);
        let mut stylist = Stylist::new(&mut doc);

        stylist.background_image("hero", Some("foo.png")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-image"), Some("url(foo.png)"));

        stylist.background_image("hero", Some("url(x.jpg)")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-image"), Some("url(x.jpg)"));

        stylist.background_image("hero", Some("none")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-image"), Some("none"));
    }

    #[test]
    fn test_background_image_url_function_any_case() {
        let (mut doc, ids) = document_with("hero", 1);
        let mut stylist = Stylist::new(&mut doc);

        stylist.background_image("hero", Some("URL(x.jpg)")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-image"), Some("URL(x.jpg)"));

        stylist.background_image("hero", Some("Url(\"y.png\")")).unwrap();
        assert_eq!(
            style_of(stylist.host(), ids[0], "background-image"),
            Some("Url(\"y.png\")")
        );

        // Too short to carry the function name
        stylist.background_image("hero", Some("ur")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-image"), Some("url(ur)"));
    }

    #[test]
    fn test_background_image_missing_keeps_previous() {
        let (mut doc, ids) = document_with("hero", 1);
        let mut stylist = Stylist::new(&mut doc);
        stylist.background_image("hero", Some("a.png")).unwrap();
        stylist.background_image("hero", None).unwrap();

        assert_eq!(style_of(stylist.host(), ids[0], "background-image"), Some("url(a.png)"));
        let d = stylist.diagnostics().last().unwrap();
        assert_eq!((d.severity, d.concern), (Severity::Error, Concern::BackgroundImage));
    }

    #[test]
    fn test_background_repeat() {
        let (mut doc, ids) = document_with("tile", 1);
        let mut stylist = Stylist::new(&mut doc);

        stylist.background_repeat("tile", Some("REPEAT-X")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-repeat"), Some("repeat-x"));

        stylist.background_repeat("tile", None).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-repeat"), Some("no-repeat"));
        assert_eq!(stylist.diagnostics()[0].severity, Severity::Info);

        stylist.background_repeat("tile", Some("sometimes")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-repeat"), Some("no-repeat"));
        assert_eq!(stylist.diagnostics()[1].severity, Severity::Warning);
    }

    #[test]
    fn test_background_attachment() {
        let (mut doc, ids) = document_with("bg", 1);
        let mut stylist = Stylist::new(&mut doc);

        stylist.background_attachment("bg", Some("fixed")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-attachment"), Some("fixed"));

        stylist.background_attachment("bg", Some("glued")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-attachment"), Some("scroll"));

        stylist.background_attachment("bg", Some("local")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-attachment"), Some("local"));

        stylist.background_attachment("bg", None).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-attachment"), Some("scroll"));
        assert_eq!(stylist.diagnostics().len(), 2);
        assert!(stylist.diagnostics().iter().all(|d| d.severity == Severity::Warning));
    }

    #[test]
    fn test_background_position() {
        let (mut doc, ids) = document_with("bg", 1);
        let mut stylist = Stylist::new(&mut doc);

        stylist.background_position("bg", Some("topLeft")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-position"), Some("top left"));

        stylist.background_position("bg", Some("10% 90%")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-position"), Some("10% 90%"));
        assert!(stylist.diagnostics().is_empty());

        stylist.background_position("bg", Some("middle-ish")).unwrap();
        assert_eq!(style_of(stylist.host(), ids[0], "background-position"), Some("center"));
        assert!(stylist.diagnostics()[0].message.contains("middle-ish"));
    }

    #[test]
    fn test_background_position_missing_defaults_to_center() {
        let (mut doc, ids) = document_with("bg", 1);
        let mut stylist = Stylist::new(&mut doc);
        stylist.background_position("bg", Some("bottom")).unwrap();
        stylist.background_position("bg", None).unwrap();

        assert_eq!(style_of(stylist.host(), ids[0], "background-position"), Some("center"));
        assert_eq!(stylist.diagnostics().len(), 1);
        let d = &stylist.diagnostics()[0];
        assert_eq!((d.severity, d.concern), (Severity::Warning, Concern::BackgroundPosition));
    }
}
