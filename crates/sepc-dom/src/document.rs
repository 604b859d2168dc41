//! Document - High-level document API

use crate::{CssStyleDeclaration, DomResult, DomTree, Node, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a document with `<html><head></head><body></body></html>`
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Fresh nodes under a fresh root cannot violate the hierarchy
        let linked = tree
            .append_child(tree.root(), html)
            .and_then(|_| tree.append_child(html, head))
            .and_then(|_| tree.append_child(html, body));
        debug_assert!(linked.is_ok());

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            body_element: body,
        }
    }

    /// Create an empty document (no structure, no body yet)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> Option<NodeId> {
        self.html_element.is_valid().then_some(self.html_element)
    }

    /// Get <body> element, if the document has one attached
    pub fn body(&self) -> Option<NodeId> {
        let body = self.body_element;
        (body.is_valid() && self.tree.is_inclusive_ancestor(self.tree.root(), body))
            .then_some(body)
    }

    /// Install `body` as the document body, appending it under <html>
    /// (or the document node when there is no <html>)
    pub fn set_body(&mut self, body: NodeId) -> DomResult<()> {
        let parent = self.document_element().unwrap_or(self.tree.root());
        self.tree.append_child(parent, body)?;
        self.body_element = body;
        Ok(())
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    /// Append a child node
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.tree.append_child(parent, child)
    }

    /// Unlink a node from the document
    pub fn remove(&mut self, id: NodeId) {
        if id == self.body_element {
            tracing::debug!("Removing document body");
        }
        self.tree.detach(id);
    }

    /// Replace an element's classes with the whitespace-separated `class_name`
    pub fn set_class_name(&mut self, id: NodeId, class_name: &str) {
        let classes: Vec<_> = class_name
            .split_whitespace()
            .map(|c| self.tree.interner_mut().intern(c))
            .collect();
        if let Some(elem) = self.tree.get_mut(id).and_then(Node::as_element_mut) {
            elem.classes.clear();
            for class in classes {
                elem.add_class(class);
            }
        }
    }

    /// Add a single class to an element
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        let class = self.tree.interner_mut().intern(class.trim());
        if let Some(elem) = self.tree.get_mut(id).and_then(Node::as_element_mut) {
            elem.add_class(class);
        }
    }

    /// Remove a single class from an element
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        let Some(class) = self.tree.interner().lookup(class.trim()) else {
            return false;
        };
        self.tree
            .get_mut(id)
            .and_then(Node::as_element_mut)
            .is_some_and(|elem| elem.remove_class(class))
    }

    /// The element's `className`
    pub fn class_name(&self, id: NodeId) -> String {
        self.tree
            .get(id)
            .and_then(Node::as_element)
            .map(|elem| {
                elem.classes
                    .iter()
                    .map(|&c| self.tree.resolve(c))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }

    /// Elements in the document carrying all given classes, in document order
    pub fn get_elements_by_class_name(&self, class_names: &str) -> Vec<NodeId> {
        self.tree.elements_by_class_name(self.tree.root(), class_names)
    }

    /// An element's inline style
    pub fn style(&self, id: NodeId) -> Option<&CssStyleDeclaration> {
        self.tree.get(id).and_then(Node::as_element).map(|e| &e.style)
    }

    /// An element's inline style, mutably
    pub fn style_mut(&mut self, id: NodeId) -> Option<&mut CssStyleDeclaration> {
        self.tree
            .get_mut(id)
            .and_then(Node::as_element_mut)
            .map(|e| &mut e.style)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_body() {
        let doc = Document::default();
        let body = doc.body().unwrap();
        assert_eq!(doc.tree().resolve(doc.tree().get(body).unwrap().as_element().unwrap().tag), "body");
        assert_eq!(doc.url(), "about:blank");
    }

    #[test]
    fn test_empty_document_has_no_body() {
        let mut doc = Document::empty("about:blank");
        assert!(doc.body().is_none());

        let body = doc.create_element("body");
        doc.set_body(body).unwrap();
        assert_eq!(doc.body(), Some(body));
    }

    #[test]
    fn test_removed_body_is_gone() {
        let mut doc = Document::default();
        let body = doc.body().unwrap();
        doc.remove(body);
        assert!(doc.body().is_none());
    }

    #[test]
    fn test_class_name_round_trip() {
        let mut doc = Document::default();
        let div = doc.create_element("div");
        doc.set_class_name(div, "  card  card big ");
        assert_eq!(doc.class_name(div), "card big");

        assert!(doc.remove_class(div, "card"));
        assert!(!doc.remove_class(div, "nope"));
        doc.add_class(div, "wide");
        assert_eq!(doc.class_name(div), "big wide");
    }

    #[test]
    fn test_style_access() {
        let mut doc = Document::default();
        let div = doc.create_element("div");
        doc.style_mut(div).unwrap().set_property("color", "red");
        assert_eq!(doc.style(div).unwrap().get_property_value("color"), Some("red"));

        let text = doc.tree_mut().create_text("x");
        assert!(doc.style(text).is_none());
    }
}
