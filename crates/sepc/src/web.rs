//! Browser backend
//!
//! `StyleHost` over the live page through `web_sys`, for wasm32 builds
//! with the `web` feature.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::{StyleHost, StyleProperty};

/// The page's document
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// `window.document`, if running in a window
    pub fn global() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl StyleHost for WebDocument {
    type Element = HtmlElement;

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    fn elements_by_class_name(&self, class_names: &str) -> Vec<HtmlElement> {
        let collection = self.document.get_elements_by_class_name(class_names);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            // SVG and other non-HTML elements have no inline `style` here
            .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn set_style(&mut self, element: &HtmlElement, property: StyleProperty, value: &str) {
        if let Err(err) = element.style().set_property(property.css_name(), value) {
            tracing::debug!("Browser rejected {}: {} ({:?})", property, value, err);
        }
    }
}
