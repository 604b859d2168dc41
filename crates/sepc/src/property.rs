//! Inline style properties written by the setters

use std::fmt;

/// Property identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    // Colors & Background
    Color,
    BackgroundColor,
    BackgroundImage,
    BackgroundRepeat,
    BackgroundAttachment,
    BackgroundPosition,

    // Box Model
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,

    // Border & Outline
    Border,
    BorderRadius,
    Outline,

    // Text
    TextAlign,
}

impl StyleProperty {
    pub const ALL: &'static [StyleProperty] = &[
        Self::Color,
        Self::BackgroundColor,
        Self::BackgroundImage,
        Self::BackgroundRepeat,
        Self::BackgroundAttachment,
        Self::BackgroundPosition,
        Self::Width,
        Self::Height,
        Self::MinWidth,
        Self::MinHeight,
        Self::MaxWidth,
        Self::MaxHeight,
        Self::Margin,
        Self::MarginTop,
        Self::MarginRight,
        Self::MarginBottom,
        Self::MarginLeft,
        Self::Padding,
        Self::PaddingTop,
        Self::PaddingRight,
        Self::PaddingBottom,
        Self::PaddingLeft,
        Self::Border,
        Self::BorderRadius,
        Self::Outline,
        Self::TextAlign,
    ];

    /// CSS (kebab-case) property name
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::BackgroundColor => "background-color",
            Self::BackgroundImage => "background-image",
            Self::BackgroundRepeat => "background-repeat",
            Self::BackgroundAttachment => "background-attachment",
            Self::BackgroundPosition => "background-position",
            Self::Width => "width",
            Self::Height => "height",
            Self::MinWidth => "min-width",
            Self::MinHeight => "min-height",
            Self::MaxWidth => "max-width",
            Self::MaxHeight => "max-height",
            Self::Margin => "margin",
            Self::MarginTop => "margin-top",
            Self::MarginRight => "margin-right",
            Self::MarginBottom => "margin-bottom",
            Self::MarginLeft => "margin-left",
            Self::Padding => "padding",
            Self::PaddingTop => "padding-top",
            Self::PaddingRight => "padding-right",
            Self::PaddingBottom => "padding-bottom",
            Self::PaddingLeft => "padding-left",
            Self::Border => "border",
            Self::BorderRadius => "border-radius",
            Self::Outline => "outline",
            Self::TextAlign => "text-align",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_names_are_normalized() {
        for &property in StyleProperty::ALL {
            assert_eq!(
                sepc_dom::css_property_name(property.css_name()),
                property.css_name(),
                "{property:?}"
            );
        }
    }

    #[test]
    fn test_display_uses_css_name() {
        assert_eq!(StyleProperty::MarginTop.to_string(), "margin-top");
        assert_eq!(StyleProperty::BackgroundImage.to_string(), "background-image");
    }
}
