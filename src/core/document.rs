//! Document driver
//!
//! Finds the first tag, accepts an optional `<?xml ...?>` declaration and
//! parses the root element.

use super::cursor::{fragment, is_whitespace, Cursor};
use crate::dom::Node;
use crate::error::{Construct, ParseError, Result};
use crate::options::ParseOptions;
use log::debug;

/// Recursive-descent parser over one input buffer
pub struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input (lenient mode)
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    /// Create a new parser in strict mode
    pub fn new_strict(input: &'a [u8]) -> Self {
        Self::with_options(input, ParseOptions::strict())
    }

    /// Create a parser with explicit options
    pub fn with_options(input: &'a [u8], options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(input),
            options,
        }
    }

    /// Get the current position in the input
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parse the whole document and return its root element
    pub fn parse(mut self) -> Result<Node> {
        debug!(
            "parsing {} bytes (strict: {})",
            self.cursor.remaining().len(),
            self.options.strict
        );
        let result = self.parse_document();
        match &result {
            Ok(root) => debug!(
                "parsed root <{}> with {} children",
                root.qualified_name(),
                root.children.len()
            ),
            Err(e) => debug!("parse failed: {}", e),
        }
        result
    }

    fn parse_document(&mut self) -> Result<Node> {
        if let Some(tag_start) = self.cursor.skip_to(b'<') {
            if self.options.strict {
                let leading = self.cursor.slice(0, tag_start);
                if let Some(i) = leading.iter().position(|&b| !is_whitespace(b)) {
                    return Err(ParseError::LeadingContent { position: i });
                }
            }
        }

        let c = self.cursor.skip_whitespace()?;
        if c != b'<' {
            return Err(self.unexpected(b'<', c));
        }

        let c = self.cursor.skip_whitespace()?;
        if c == b'?' {
            self.parse_declaration()?;
        } else {
            self.cursor.unread_byte()?;
        }

        let root = self.parse_element(1)?;

        if self.options.strict {
            self.check_trailing()?;
        }
        Ok(root)
    }

    /// `<?xml ... ?>`; cursor is past `<?`. Leaves the cursor past the `<` of
    /// the next tag.
    fn parse_declaration(&mut self) -> Result<()> {
        let open = self.cursor.position().saturating_sub(2);

        match self.cursor.skip_literal(b"xml ") {
            Ok(_) => self.cursor.unread_byte()?,
            Err(ParseError::UnexpectedEof { .. }) => return Err(self.unterminated_declaration(open)),
            Err(e) => return Err(e),
        }

        // Independent searches: the '?' and '>' need not be adjacent
        if !self.cursor.find(b'?') || !self.cursor.find(b'>') {
            return Err(self.unterminated_declaration(open));
        }

        let c = self.cursor.skip_whitespace()?;
        if c != b'<' {
            return Err(self.unexpected(b'<', c));
        }
        Ok(())
    }

    fn unterminated_declaration(&self, open: usize) -> ParseError {
        ParseError::Unterminated {
            construct: Construct::Declaration,
            fragment: fragment(self.cursor.slice(open, self.cursor.position())),
            position: open,
        }
    }

    /// Strict mode: only whitespace and comments may follow the root
    fn check_trailing(&mut self) -> Result<()> {
        loop {
            let c = match self.cursor.skip_whitespace() {
                Ok(c) => c,
                Err(ParseError::UnexpectedEof { .. }) => return Ok(()),
                Err(e) => return Err(e),
            };
            let start = self.cursor.position() - 1;
            if c == b'<' && self.cursor.remaining().starts_with(b"!--") {
                self.cursor.read_byte()?;
                self.parse_comment()?;
                continue;
            }
            return Err(ParseError::TrailingContent { position: start });
        }
    }

    /// Mismatch error for the byte just read
    pub(crate) fn unexpected(&self, expected: u8, found: u8) -> ParseError {
        ParseError::UnexpectedByte {
            expected: char::from(expected),
            found: char::from(found),
            position: self.cursor.position().saturating_sub(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_garbage_discarded() {
        let root = Parser::new(b"garbage here <root/>").parse().unwrap();
        assert_eq!(root.name, "root");
    }

    #[test]
    fn test_leading_garbage_rejected_in_strict_mode() {
        let err = Parser::new_strict(b"  junk<root/>").parse().unwrap_err();
        assert_eq!(err, ParseError::LeadingContent { position: 2 });

        let root = Parser::new_strict(b" \n <root/>").parse().unwrap();
        assert_eq!(root.name, "root");
    }

    #[test]
    fn test_declaration() {
        let xml = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root a=\"1\"/>";
        let root = Parser::new(xml).parse().unwrap();
        assert_eq!(root.name, "root");
        assert_eq!(root.attribute("a"), Some("1"));
    }

    #[test]
    fn test_declaration_requires_xml_literal() {
        let err = Parser::new(b"<?xmx version=\"1.0\"?><root/>").parse().unwrap_err();
        assert_eq!(err, ParseError::UnexpectedByte { expected: 'l', found: 'x', position: 4 });
    }

    #[test]
    fn test_declaration_unterminated() {
        let err = Parser::new(b"<?xml version=\"1.0\"").parse().unwrap_err();
        assert!(matches!(
            err,
            ParseError::Unterminated { construct: Construct::Declaration, .. }
        ));
    }

    #[test]
    fn test_declaration_must_precede_tag() {
        let err = Parser::new(b"<?xml version=\"1.0\"?> x <root/>").parse().unwrap_err();
        assert_eq!(err, ParseError::UnexpectedByte { expected: '<', found: 'x', position: 22 });
    }

    #[test]
    fn test_comment_before_root() {
        let xml = b"<?xml version=\"1.0\"?>\n<!-- prolog -->\n<root/>";
        let root = Parser::new(xml).parse().unwrap();
        assert_eq!(root.name, "root");
    }

    #[test]
    fn test_no_tag() {
        assert_eq!(
            Parser::new(b"").parse().unwrap_err(),
            ParseError::UnexpectedEof { position: 0 }
        );
        assert_eq!(
            Parser::new(b"  text").parse().unwrap_err(),
            ParseError::UnexpectedByte { expected: '<', found: 't', position: 2 }
        );
    }

    #[test]
    fn test_trailing_content() {
        let root = Parser::new(b"<root/> trailing").parse().unwrap();
        assert_eq!(root.name, "root");

        let err = Parser::new_strict(b"<root/> trailing").parse().unwrap_err();
        assert_eq!(err, ParseError::TrailingContent { position: 8 });

        let root = Parser::new_strict(b"<root/>\n<!-- done -->\n").parse().unwrap();
        assert_eq!(root.name, "root");
    }
}
