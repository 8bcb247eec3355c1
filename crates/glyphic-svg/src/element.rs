//! A minimal mutable model of an SVG element.

/// The root element of an icon document.
///
/// Attribute values are kept in their escaped markup form, and child content
/// is the verbatim source text between the opening and closing tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SvgElement {
    /// Qualified tag name as written in the source (usually "svg")
    pub name: String,

    /// Attributes in source order
    attributes: Vec<(String, String)>,

    /// Raw inner markup
    children: String,
}

impl SvgElement {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Get an attribute value by exact name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Names of all attributes in order.
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Set an attribute, replacing an existing value in place or appending.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(n, _)| n == name)?;
        Some(self.attributes.remove(index).1)
    }

    /// Keep only the attributes matching the predicate.
    pub fn retain_attributes<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &str) -> bool,
    {
        self.attributes.retain(|(n, v)| keep(n, v));
    }

    /// Raw inner markup.
    pub fn children(&self) -> &str {
        &self.children
    }

    /// Replace the raw inner markup.
    pub fn set_children(&mut self, children: impl Into<String>) {
        self.children = children.into();
    }

    /// Serialize the element with its attributes and children.
    pub fn outer_html(&self) -> String {
        let mut out = String::with_capacity(self.children.len() + 64);
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push('>');
        out.push_str(&self.children);
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attribute_replaces_in_place() {
        let mut el = SvgElement::new("svg");
        el.set_attribute("width", "24");
        el.set_attribute("fill", "none");
        el.set_attribute("width", "1em");

        assert_eq!(el.attribute_names(), vec!["width", "fill"]);
        assert_eq!(el.attribute("width"), Some("1em"));
    }

    #[test]
    fn remove_attribute_returns_value() {
        let mut el = SvgElement::new("svg");
        el.set_attribute("stroke", "red");

        assert_eq!(el.remove_attribute("stroke"), Some("red".to_string()));
        assert_eq!(el.remove_attribute("stroke"), None);
        assert!(el.attributes().is_empty());
    }

    #[test]
    fn serializes_outer_html() {
        let mut el = SvgElement::new("svg");
        el.set_attribute("viewBox", "0 0 24 24");
        el.set_children("<path d=\"M1 1\"/>");

        assert_eq!(
            el.outer_html(),
            "<svg viewBox=\"0 0 24 24\"><path d=\"M1 1\"/></svg>"
        );
    }
}
