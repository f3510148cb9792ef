//! XML Node representation
//!
//! Each node owns its children outright. There is no parent link.

use std::borrow::Cow;

/// Name marker for comment pseudo-nodes
pub const COMMENT_NAME: &str = "!";

/// An element or comment in the parsed tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Local tag name, or [`COMMENT_NAME`] for a comment
    pub name: String,
    /// Prefix before the first colon of the tag name, empty if absent
    pub namespace_prefix: String,
    /// Attributes in document order
    pub attributes: Vec<Attribute>,
    /// Structural children, empty once content was demoted to text
    pub children: Vec<Node>,
    /// Raw text content (untrimmed)
    pub text: String,
    /// Text came from a CDATA section and is written back wrapped in one
    pub is_cdata: bool,
}

/// A `name="value"` pair with the value exactly as it appeared between the quotes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Node {
    /// Create an empty element node
    pub fn new(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            ..Node::default()
        }
    }

    /// Create an element node with a namespace prefix
    pub fn with_prefix(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            namespace_prefix: prefix.into(),
            ..Node::default()
        }
    }

    /// Create a comment pseudo-node
    pub fn comment(text: impl Into<String>) -> Self {
        Node {
            name: COMMENT_NAME.to_string(),
            text: text.into(),
            ..Node::default()
        }
    }

    /// Check if this is a comment pseudo-node
    #[inline]
    pub fn is_comment(&self) -> bool {
        self.name == COMMENT_NAME
    }

    /// Check if this node has structural children
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Prefix and local name joined by `:`
    pub fn qualified_name(&self) -> Cow<'_, str> {
        if self.namespace_prefix.is_empty() {
            Cow::Borrowed(&self.name)
        } else {
            Cow::Owned(format!("{}:{}", self.namespace_prefix, self.name))
        }
    }

    /// First direct child with a matching local name
    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|n| n.name == name)
    }

    /// All direct children with a matching local name
    pub fn children_named<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s Node> + 's {
        self.children.iter().filter(move |n| n.name == name)
    }

    /// Value of the first attribute with a matching name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Append an attribute; existing attributes with the same name are kept
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push(Attribute::new(name, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new("root");
        assert_eq!(node.name, "root");
        assert!(node.namespace_prefix.is_empty());
        assert!(!node.has_children());
        assert!(!node.is_comment());
        assert!(Node::comment(" note ").is_comment());
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(Node::new("tag").qualified_name(), "tag");
        assert_eq!(Node::with_prefix("ns", "tag").qualified_name(), "ns:tag");
    }

    #[test]
    fn test_find_child() {
        let mut root = Node::new("root");
        let mut first = Node::new("item");
        first.add_attribute("id", "1");
        let mut second = Node::new("item");
        second.add_attribute("id", "2");
        root.children.push(Node::new("other"));
        root.children.push(first);
        root.children.push(second);

        let found = root.find_child("item").unwrap();
        assert_eq!(found.attribute("id"), Some("1"));
        assert_eq!(root.children_named("item").count(), 2);
        assert!(root.find_child("missing").is_none());
    }

    #[test]
    fn test_attribute_first_match_wins() {
        let mut node = Node::new("a");
        node.add_attribute("x", "1");
        node.add_attribute("x", "2");
        assert_eq!(node.attributes.len(), 2);
        assert_eq!(node.attribute("x"), Some("1"));
        assert_eq!(node.attribute("y"), None);
    }
}
