//! Property setters, one per CSS concern

mod background;
mod border;
mod color;
mod sizing;
mod spacing;
mod text;

#[cfg(test)]
pub(crate) mod test_support {
    use sepc_dom::{Document, NodeId};

    /// A document whose body holds `count` divs with class `class`
    pub fn document_with(class: &str, count: usize) -> (Document, Vec<NodeId>) {
        let mut doc = Document::default();
        let body = doc.body().expect("default document has a body");
        let ids = (0..count)
            .map(|_| {
                let div = doc.create_element("div");
                doc.set_class_name(div, class);
                doc.append_child(body, div).unwrap();
                div
            })
            .collect();
        (doc, ids)
    }

    /// Inline style value of one property
    pub fn style_of<'a>(doc: &'a Document, id: NodeId, property: &str) -> Option<&'a str> {
        doc.style(id).and_then(|s| s.get_property_value(property))
    }
}
