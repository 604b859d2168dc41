//! Keyword and preset tables
//!
//! Each enumerable argument is an enum with a static `ALL` table.
//! Parsing is ASCII case-insensitive; the canonical spelling is written.

use std::fmt;
use std::str::FromStr;

use crate::UnknownKeyword;

/// A fixed CSS keyword vocabulary
pub trait Keyword: Copy + Sized + 'static {
    /// Every keyword, in documentation order
    const ALL: &'static [Self];

    /// Canonical spelling
    fn as_str(self) -> &'static str;

    /// Look up a keyword, ignoring ASCII case and surrounding whitespace
    fn parse_keyword(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str().eq_ignore_ascii_case(value))
    }

    /// Human-readable list of accepted keywords
    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

macro_rules! keywords {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Keyword for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownKeyword;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_keyword(s).ok_or_else(|| UnknownKeyword(s.to_string()))
            }
        }
    };
}

keywords! {
    /// Which side of the box a margin or padding applies to
    Side {
        Top => "top",
        Right => "right",
        Bottom => "bottom",
        Left => "left",
        All => "all",
    }
}

keywords! {
    /// `border-style` / `outline-style` keywords
    BorderStyle {
        None => "none",
        Hidden => "hidden",
        Dotted => "dotted",
        Dashed => "dashed",
        Solid => "solid",
        Double => "double",
        Groove => "groove",
        Ridge => "ridge",
        Inset => "inset",
        Outset => "outset",
    }
}

keywords! {
    TextAlign {
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
        Start => "start",
        End => "end",
        Initial => "initial",
        Inherit => "inherit",
    }
}

keywords! {
    BackgroundRepeat {
        Repeat => "repeat",
        RepeatX => "repeat-x",
        RepeatY => "repeat-y",
        NoRepeat => "no-repeat",
        Space => "space",
        Round => "round",
        Initial => "initial",
        Inherit => "inherit",
    }
}

keywords! {
    BackgroundAttachment {
        Fixed => "fixed",
        Scroll => "scroll",
        Local => "local",
        Initial => "initial",
        Inherit => "inherit",
    }
}

keywords! {
    /// Single-word `background-position` values
    PositionKeyword {
        Left => "left",
        Right => "right",
        Center => "center",
        Top => "top",
        Bottom => "bottom",
        Initial => "initial",
        Inherit => "inherit",
    }
}

keywords! {
    /// Compound `background-position` presets
    PositionPreset {
        TopLeft => "topLeft",
        TopCenter => "topCenter",
        TopRight => "topRight",
        CenterLeft => "centerLeft",
        CenterRight => "centerRight",
        BottomLeft => "bottomLeft",
        BottomCenter => "bottomCenter",
        BottomRight => "bottomRight",
    }
}

impl PositionPreset {
    /// The CSS value the preset expands to
    pub fn value(self) -> &'static str {
        match self {
            Self::TopLeft => "top left",
            Self::TopCenter => "top center",
            Self::TopRight => "top right",
            Self::CenterLeft => "center left",
            Self::CenterRight => "center right",
            Self::BottomLeft => "bottom left",
            Self::BottomCenter => "bottom center",
            Self::BottomRight => "bottom right",
        }
    }
}

keywords! {
    /// Named `border-radius` shapes
    RadiusPreset {
        Circle => "circle",
        Pill => "pill",
        Rounded => "rounded",
        RoundedSm => "rounded-sm",
        RoundedMd => "rounded-md",
        RoundedLg => "rounded-lg",
        RoundedXl => "rounded-xl",
        Rounded2xl => "rounded-2xl",
    }
}

impl RadiusPreset {
    /// The CSS length the preset expands to
    pub fn value(self) -> &'static str {
        match self {
            Self::Circle => "50%",
            Self::Pill => "9999px",
            Self::Rounded => "0.25rem",
            Self::RoundedSm => "0.125rem",
            Self::RoundedMd => "0.375rem",
            Self::RoundedLg => "0.5rem",
            Self::RoundedXl => "0.75rem",
            Self::Rounded2xl => "1rem",
        }
    }
}

keywords! {
    /// Lower or upper size constraint
    SizeBound {
        Min => "min",
        Max => "max",
    }
}

keywords! {
    Axis {
        Width => "width",
        Height => "height",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(TextAlign::parse_keyword("CENTER"), Some(TextAlign::Center));
        assert_eq!(" Repeat-X ".parse::<BackgroundRepeat>(), Ok(BackgroundRepeat::RepeatX));
        assert_eq!(PositionPreset::parse_keyword("topleft"), Some(PositionPreset::TopLeft));
    }

    #[test]
    fn test_unknown_keyword() {
        let err = "wavy".parse::<BorderStyle>().unwrap_err();
        assert_eq!(err, UnknownKeyword("wavy".to_string()));
        assert_eq!(err.to_string(), "unknown keyword 'wavy'");
    }

    #[test]
    fn test_expected_lists_everything() {
        assert_eq!(Side::expected(), "top, right, bottom, left, all");
        assert_eq!(BorderStyle::ALL.len(), 10);
    }

    #[test]
    fn test_radius_table() {
        let table: Vec<_> = RadiusPreset::ALL.iter().map(|p| (p.as_str(), p.value())).collect();
        assert_eq!(
            table,
            vec![
                ("circle", "50%"),
                ("pill", "9999px"),
                ("rounded", "0.25rem"),
                ("rounded-sm", "0.125rem"),
                ("rounded-md", "0.375rem"),
                ("rounded-lg", "0.5rem"),
                ("rounded-xl", "0.75rem"),
                ("rounded-2xl", "1rem"),
            ]
        );
    }
}
