//! Generic element tree for parsed catalog documents.

/// Read-only view of a parsed element.
///
/// Conversion code is written against this trait rather than a concrete
/// parser type.
pub trait ElementLike {
    /// Element name.
    fn tag(&self) -> &str;

    /// Value of the named attribute, if present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Child elements in document order. Text children are skipped.
    fn child_elements(&self) -> impl Iterator<Item = &Self>;

    /// Concatenated text of all descendants in document order.
    fn text(&self) -> String;

    /// Child elements with the given tag, in document order.
    fn children_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Self>
    where
        Self: 'a,
    {
        self.child_elements().filter(move |child| child.tag() == tag)
    }
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An owned element with attributes and children in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.push_child(XmlNode::Element(child));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(&text.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute, replacing an existing value with the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    pub fn push_child(&mut self, child: XmlNode) {
        match child {
            XmlNode::Text(text) => self.push_text(&text),
            element => self.children.push(element),
        }
    }

    /// Append text, merging with a preceding text child.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(XmlNode::Text(text.to_string()));
        }
    }

    /// Number of elements in this subtree, including this one.
    pub fn element_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| match child {
                XmlNode::Element(element) => element.element_count(),
                XmlNode::Text(_) => 0,
            })
            .sum::<usize>()
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(element) => element.collect_text(out),
            }
        }
    }
}

impl ElementLike for XmlElement {
    fn tag(&self) -> &str {
        &self.name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|child| match child {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }
}
