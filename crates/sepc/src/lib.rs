//! SEPC - Super Easy Programmed CSS
//!
//! Sets inline style properties on every element carrying a class (or on
//! the document body), one method per CSS concern.
//!
//! Arguments that may be missing are `Option<&str>`; `None`, `""` and
//! blank strings all count as missing. Missing or invalid input is never
//! fatal: the setter reports a [`Diagnostic`], substitutes a default where
//! one exists, and carries on.
//!
//! # Example
//! ```
//! use sepc::Stylist;
//! use sepc_dom::Document;
//!
//! let mut doc = Document::default();
//! let body = doc.body().unwrap();
//! let card = doc.create_element("div");
//! doc.set_class_name(card, "card");
//! doc.append_child(body, card).unwrap();
//!
//! let mut stylist = Stylist::new(&mut doc);
//! stylist.border("card", Some("2px"), Some("black"), Some("solid")).unwrap();
//! stylist.border_radius("card", Some("rounded-lg")).unwrap();
//! stylist.text_align("card", None).unwrap(); // warns, defaults to left
//! assert_eq!(stylist.diagnostics().len(), 1);
//!
//! let style = doc.style(card).unwrap();
//! assert_eq!(style.get_property_value("border"), Some("2px solid black"));
//! assert_eq!(style.get_property_value("border-radius"), Some("0.5rem"));
//! assert_eq!(style.get_property_value("text-align"), Some("left"));
//! ```

mod config;
mod diagnostics;
mod error;
mod host;
mod property;
mod resolver;
mod setters;
mod stylist;
pub mod keywords;
pub mod validate;
#[cfg(feature = "web")]
pub mod web;

pub use config::Options;
pub use diagnostics::{Concern, Diagnostic, Severity, PREFIX};
pub use error::{StyleError, StyleResult, UnknownKeyword};
pub use host::StyleHost;
pub use property::StyleProperty;
pub use resolver::Selector;
pub use stylist::Stylist;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
