//! The injected document model.
//!
//! The styler does not talk to a real browser. The hosting environment
//! hands it a [`Document`]: the body-level inline style plus the set of
//! elements the page exposes, each with an optional id, a class list, and
//! its own inline style. The styler mutates styles in place and nothing
//! else — no elements are added or removed.

use std::collections::BTreeMap;

/// An ordered set of inline style properties (`property -> value`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    props: BTreeMap<String, String>,
}

impl InlineStyle {
    /// Creates an empty style set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, overwriting any previous value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.props.insert(property.into(), value.into());
    }

    /// Returns the value of a property, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.props.get(property).map(String::as_str)
    }

    /// Returns true if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Returns the number of properties set.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Iterates over `(property, value)` pairs in property order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A page element: optional id, class list, inline style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    id: Option<String>,
    classes: Vec<String>,
    style: InlineStyle,
}

impl Element {
    /// Creates an element with no id, classes, or styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element id, returning `self` for chaining.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a class, returning `self` for chaining.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Returns the element id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns true if the element carries the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns the element's inline style.
    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    /// Returns the element's inline style for mutation.
    pub fn style_mut(&mut self) -> &mut InlineStyle {
        &mut self.style
    }
}

/// The mutable element set of a loaded page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    body: InlineStyle,
    elements: Vec<Element>,
}

impl Document {
    /// Creates a document with an empty body style and no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element, returning `self` for chaining.
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Returns the body-level inline style.
    pub fn body_style(&self) -> &InlineStyle {
        &self.body
    }

    /// Returns the body-level inline style for mutation.
    pub fn body_style_mut(&mut self) -> &mut InlineStyle {
        &mut self.body
    }

    /// Iterates over all elements.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Returns the first element with the given id.
    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == Some(id))
    }

    /// Returns the first element with the given id, for mutation.
    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == Some(id))
    }

    /// Iterates over elements carrying the given class, for mutation.
    pub fn by_class_mut<'a>(
        &'a mut self,
        class: &'a str,
    ) -> impl Iterator<Item = &'a mut Element> {
        self.elements.iter_mut().filter(move |e| e.has_class(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_style_set_get() {
        let mut style = InlineStyle::new();
        assert!(style.is_empty());

        style.set("color", "#cfcfcf");
        style.set("background", "#111111");
        assert_eq!(style.get("color"), Some("#cfcfcf"));
        assert_eq!(style.get("margin"), None);
        assert_eq!(style.len(), 2);

        style.set("color", "#ffffff");
        assert_eq!(style.get("color"), Some("#ffffff"));
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn test_element_classes_and_id() {
        let el = Element::new()
            .with_id("name-box-shadow")
            .with_class("project-title")
            .with_class("wide");

        assert_eq!(el.id(), Some("name-box-shadow"));
        assert!(el.has_class("project-title"));
        assert!(el.has_class("wide"));
        assert!(!el.has_class("narrow"));
    }

    #[test]
    fn test_document_lookup() {
        let mut doc = Document::new()
            .with_element(Element::new().with_class("project-title"))
            .with_element(Element::new().with_id("name-box-opague"))
            .with_element(Element::new().with_class("project-title"));

        assert!(doc.by_id("name-box-opague").is_some());
        assert!(doc.by_id("missing").is_none());
        assert_eq!(doc.by_class_mut("project-title").count(), 2);
    }

    #[test]
    fn test_document_mutation_sticks() {
        let mut doc = Document::new().with_element(Element::new().with_id("box"));

        doc.by_id_mut("box")
            .unwrap()
            .style_mut()
            .set("background", "#111111");
        doc.body_style_mut().set("color", "#cfcfcf");

        assert_eq!(
            doc.by_id("box").unwrap().style().get("background"),
            Some("#111111")
        );
        assert_eq!(doc.body_style().get("color"), Some("#cfcfcf"));
    }
}
