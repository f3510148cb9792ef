//! Start tag parsing
//!
//! Reads `name`, `prefix:name` and the attribute list of a start tag, and
//! reports whether the tag closed itself with `/>`.

use super::cursor::{is_attribute_char, is_name_char, is_name_start_char, is_whitespace, utf8};
use super::document::Parser;
use crate::dom::Node;
use crate::error::{ParseError, Result};

impl<'a> Parser<'a> {
    /// Parse one element; `depth` is 1 for the root
    pub(crate) fn parse_element(&mut self, depth: usize) -> Result<Node> {
        if depth > self.options.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                limit: self.options.max_depth,
                position: self.cursor.position(),
            });
        }

        let (mut node, self_closing) = self.parse_start_tag()?;
        if !self_closing {
            self.parse_content(&mut node, depth)?;
        }
        Ok(node)
    }

    /// Parse a start tag; cursor is just past `<`.
    /// Returns the node and whether the tag was self-closing.
    pub(crate) fn parse_start_tag(&mut self) -> Result<(Node, bool)> {
        let mut c = self.cursor.skip_whitespace()?;

        // Comments ahead of an element are skipped
        while c == b'!' {
            self.parse_comment()?;
            c = self.cursor.skip_whitespace()?;
            if c != b'<' {
                return Err(self.unexpected(b'<', c));
            }
            c = self.cursor.skip_whitespace()?;
        }

        let name_start = self.cursor.position() - 1;
        if c == b'>' || c == b'/' {
            return Err(ParseError::MissingName { position: name_start });
        }
        if !is_name_start_char(c) {
            return Err(ParseError::ExpectedNameStart {
                found: char::from(c),
                position: name_start,
            });
        }

        let mut prefix_end = None;
        let mut local_start = name_start;
        let terminator = loop {
            let b = self.cursor.read_byte()?;
            match b {
                b'>' | b'/' => break b,
                b':' if prefix_end.is_none() => {
                    prefix_end = Some(self.cursor.position() - 1);
                    local_start = self.cursor.position();
                }
                b if is_whitespace(b) => break b,
                b if is_name_char(b) => {}
                _ => {
                    return Err(ParseError::ExpectedNameStart {
                        found: char::from(b),
                        position: self.cursor.position() - 1,
                    })
                }
            }
        };

        let name_end = self.cursor.position() - 1;
        if local_start == name_end {
            return Err(ParseError::MissingName { position: local_start });
        }

        let mut node = match prefix_end {
            Some(end) => Node::with_prefix(
                utf8(self.cursor.slice(name_start, end), "name", name_start)?,
                utf8(self.cursor.slice(local_start, name_end), "name", local_start)?,
            ),
            None => Node::new(utf8(self.cursor.slice(name_start, name_end), "name", name_start)?),
        };

        let self_closing = match terminator {
            b'>' => false,
            b'/' => {
                self.expect_tag_close()?;
                true
            }
            _ => self.parse_attributes(&mut node)?,
        };
        Ok((node, self_closing))
    }

    /// Parse `name="value"` pairs up to `>` or `/>`; returns true for `/>`
    fn parse_attributes(&mut self, node: &mut Node) -> Result<bool> {
        let mut c = self.cursor.skip_whitespace()?;
        loop {
            match c {
                b'>' => return Ok(false),
                b'/' => {
                    self.expect_tag_close()?;
                    return Ok(true);
                }
                _ => {}
            }

            let name_start = self.cursor.position() - 1;
            if !is_attribute_char(c) {
                return Err(ParseError::InvalidAttributeName {
                    found: char::from(c),
                    position: name_start,
                });
            }

            let mut b = self.cursor.read_byte()?;
            while is_attribute_char(b) {
                b = self.cursor.read_byte()?;
            }
            let name_end = self.cursor.position() - 1;

            if is_whitespace(b) {
                b = self.cursor.skip_whitespace()?;
            }
            if b != b'=' {
                return Err(self.unexpected(b'=', b));
            }

            let quote = self.cursor.skip_whitespace()?;
            if quote != b'"' {
                return Err(self.unexpected(b'"', quote));
            }

            let value_start = self.cursor.position();
            let value = self.cursor.read_quoted()?;
            node.add_attribute(
                utf8(self.cursor.slice(name_start, name_end), "attribute name", name_start)?,
                utf8(value, "attribute value", value_start)?,
            );

            c = self.cursor.skip_whitespace()?;
        }
    }

    /// After `/` in a tag: optional whitespace, then `>`
    fn expect_tag_close(&mut self) -> Result<()> {
        let c = self.cursor.skip_whitespace()?;
        if c != b'>' {
            return Err(self.unexpected(b'>', c));
        }
        Ok(())
    }
}
