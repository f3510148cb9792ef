//! xmlnode - byte-level XML scanner and owned node tree
//!
//! Parses an in-memory byte buffer into a tree of [`Node`]s, writes trees back
//! out in compact or pretty form, and compares trees structurally.
//!
//! Mixed content is not kept as interleaved nodes: once a text byte appears
//! among an element's children, the children parsed so far and every later one
//! are folded into the element's `text` in compact form.
//!
//! ```
//! let root = xmlnode::parse(b"<list><item id=\"1\"/><item id=\"2\"/></list>").unwrap();
//! assert_eq!(root.children.len(), 2);
//! assert_eq!(root.find_child("item").and_then(|n| n.attribute("id")), Some("1"));
//! assert_eq!(root.to_inline_string(), "<list><item id=\"1\"/><item id=\"2\"/></list>");
//! ```

pub mod core;
pub mod dom;
pub mod error;
pub mod options;
pub mod strategy;

pub use crate::core::Parser;
pub use dom::{Attribute, Mismatch, Node};
pub use error::{Construct, ParseError, Result};
pub use options::ParseOptions;
pub use strategy::{parse_parallel, parse_parallel_with_options};

/// Parse a document (lenient mode)
///
/// Names, attribute values and text must be UTF-8. Documents in other
/// encodings, such as Latin-1 text with bare `0xE9` bytes, fail with
/// [`ParseError::InvalidUtf8`].
pub fn parse(input: &[u8]) -> Result<Node> {
    Parser::new(input).parse()
}

/// Parse a document in strict mode
pub fn parse_strict(input: &[u8]) -> Result<Node> {
    Parser::new_strict(input).parse()
}

/// Parse a document with explicit options
pub fn parse_with_options(input: &[u8], options: ParseOptions) -> Result<Node> {
    Parser::with_options(input, options).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing_equivalence() {
        let a = parse(b"<a/>").unwrap();
        let b = parse(b"<a></a>").unwrap();
        assert_eq!(a, b);
        assert!(a.matches(&b).0);
        assert!(a.attributes.is_empty() && a.children.is_empty() && a.text.is_empty());
    }

    #[test]
    fn test_namespace_split() {
        let node = parse(b"<ns:tag/>").unwrap();
        assert_eq!(node.name, "tag");
        assert_eq!(node.namespace_prefix, "ns");

        let node = parse(b"<tag xmlns:ns=\"x\"/>").unwrap();
        assert_eq!(node.attributes, vec![Attribute::new("xmlns:ns", "x")]);
    }

    #[test]
    fn test_depth_limit() {
        let deep = format!("{}{}", "<a>".repeat(20), "</a>".repeat(20));
        let err = parse_with_options(deep.as_bytes(), ParseOptions::default().with_max_depth(10))
            .unwrap_err();
        assert!(matches!(err, ParseError::DepthLimitExceeded { limit: 10, .. }));
        assert!(parse_with_options(deep.as_bytes(), ParseOptions::default().with_max_depth(20)).is_ok());
    }

    #[test]
    fn test_pretty_output() {
        let root = parse(b"<root><a x=\"1\">text</a><b><c/></b></root>").unwrap();
        assert_eq!(
            root.to_string(),
            "<root>\n  <a x=\"1\">text</a>\n  <b>\n   <c/>\n  </b>\n</root>"
        );
    }

    #[test]
    fn test_latin1_text_rejected() {
        assert_eq!(
            parse(b"<a>\xe9t\xe9</a>").unwrap_err(),
            ParseError::InvalidUtf8 { what: "text", position: 3 }
        );
    }

    #[test]
    fn test_strict_entry_point() {
        assert!(parse_strict(b"<a/>").is_ok());
        assert!(matches!(
            parse_strict(b"x<a/>"),
            Err(ParseError::LeadingContent { position: 0 })
        ));
    }
}
