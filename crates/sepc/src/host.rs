//! Host document abstraction
//!
//! The setters never touch a concrete DOM. They go through `StyleHost`,
//! which `sepc_dom::Document` implements (and `web::WebDocument` with the
//! `web` feature).

use sepc_dom::{Document, NodeId};

use crate::StyleProperty;

/// The document a `Stylist` mutates
pub trait StyleHost {
    /// Handle to one element
    type Element;

    /// The document body, if there is one
    fn body(&self) -> Option<Self::Element>;

    /// Elements carrying all the whitespace-separated classes, in document
    /// order. Queried fresh on every call.
    fn elements_by_class_name(&self, class_names: &str) -> Vec<Self::Element>;

    /// Write one inline style property
    fn set_style(&mut self, element: &Self::Element, property: StyleProperty, value: &str);
}

impl StyleHost for Document {
    type Element = NodeId;

    fn body(&self) -> Option<NodeId> {
        Document::body(self)
    }

    fn elements_by_class_name(&self, class_names: &str) -> Vec<NodeId> {
        self.get_elements_by_class_name(class_names)
    }

    fn set_style(&mut self, element: &NodeId, property: StyleProperty, value: &str) {
        match self.style_mut(*element) {
            Some(style) => style.set_property(property.css_name(), value),
            None => tracing::debug!("Node {:?} has no style, skipping {}", element, property),
        }
    }
}

impl<H: StyleHost + ?Sized> StyleHost for &mut H {
    type Element = H::Element;

    fn body(&self) -> Option<Self::Element> {
        (**self).body()
    }

    fn elements_by_class_name(&self, class_names: &str) -> Vec<Self::Element> {
        (**self).elements_by_class_name(class_names)
    }

    fn set_style(&mut self, element: &Self::Element, property: StyleProperty, value: &str) {
        (**self).set_style(element, property, value)
    }
}
