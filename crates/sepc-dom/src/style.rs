//! Inline Style Declaration
//!
//! The element's `style` object: an ordered property → value map.
//! Shorthands are stored as written and are not expanded into longhands.
//! Writing a shorthand drops the longhands it covers, and every write
//! moves the declaration to the end, so later writes win.

use std::collections::HashMap;

/// Inline style declaration (`element.style`)
#[derive(Debug, Clone, Default)]
pub struct CssStyleDeclaration {
    declarations: Vec<(String, String)>,
    by_name: HashMap<String, usize>,
}

/// Vendor prefixes that keep their leading dash (`WebkitX` → `-webkit-x`)
const VENDOR_PREFIXES: &[&str] = &["Webkit", "Moz", "Ms", "O"];

/// Longhands reset by each shorthand the setters write
const SHORTHANDS: &[(&str, &[&str])] = &[
    ("margin", &["margin-top", "margin-right", "margin-bottom", "margin-left"]),
    ("padding", &["padding-top", "padding-right", "padding-bottom", "padding-left"]),
    (
        "border",
        &[
            "border-top",
            "border-right",
            "border-bottom",
            "border-left",
            "border-width",
            "border-style",
            "border-color",
        ],
    ),
    ("outline", &["outline-width", "outline-style", "outline-color"]),
];

/// Normalize a property name to its CSS form.
///
/// Accepts both `marginTop` (DOM) and `margin-top` (CSS) spellings.
pub fn css_property_name(name: &str) -> String {
    let name = name.trim();
    if name.starts_with("--") {
        // Custom properties are case-sensitive
        return name.to_string();
    }

    let vendor = VENDOR_PREFIXES.iter().any(|prefix| {
        name.strip_prefix(prefix)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c.is_ascii_uppercase())
    });

    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 || vendor {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn longhands(shorthand: &str) -> &'static [&'static str] {
    SHORTHANDS
        .iter()
        .find(|(name, _)| *name == shorthand)
        .map(|&(_, longhands)| longhands)
        .unwrap_or(&[])
}

impl CssStyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of declared properties
    pub fn length(&self) -> usize {
        self.declarations.len()
    }

    /// Check if no property is declared
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Property name at index
    pub fn item(&self, index: usize) -> Option<&str> {
        self.declarations.get(index).map(|(name, _)| name.as_str())
    }

    /// Get a property value
    pub fn get_property_value(&self, name: &str) -> Option<&str> {
        let name = css_property_name(name);
        self.by_name
            .get(&name)
            .and_then(|&i| self.declarations.get(i))
            .map(|(_, value)| value.as_str())
    }

    /// Set a property. An empty value removes the declaration.
    ///
    /// The declaration moves to the end; a shorthand also removes its
    /// longhands.
    pub fn set_property(&mut self, name: &str, value: &str) {
        let name = css_property_name(name);
        let value = value.trim();
        if value.is_empty() {
            self.remove_property(&name);
            return;
        }

        self.remove_property(&name);
        for longhand in longhands(&name) {
            self.remove_property(longhand);
        }
        self.by_name.insert(name.clone(), self.declarations.len());
        self.declarations.push((name, value.to_string()));
    }

    /// Remove a property, returning its old value
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let name = css_property_name(name);
        let index = self.by_name.remove(&name)?;
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.declarations.remove(index).1)
    }

    /// Serialize as the `style` attribute would read
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Iterate over (property, value) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
