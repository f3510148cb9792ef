//! Comment and CDATA recognition
//!
//! Both are entered with the cursor just past `<!`. The body is returned as
//! the raw bytes between introducer and terminator.

use super::cursor::fragment;
use super::document::Parser;
use crate::error::{Construct, ParseError, Result};

/// A `<!...>` construct found in element content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup<'a> {
    /// `<!-- body -->`
    Comment(&'a [u8]),
    /// `<![CDATA[ body ]]>`
    CData(&'a [u8]),
}

impl<'a> Markup<'a> {
    /// Raw body bytes
    pub fn body(&self) -> &'a [u8] {
        match self {
            Markup::Comment(body) | Markup::CData(body) => body,
        }
    }
}

impl<'a> Parser<'a> {
    /// Parse markup after `<!` (comment or CDATA)
    pub(crate) fn parse_bang_markup(&mut self) -> Result<Markup<'a>> {
        let start = self.cursor.position();
        match self.cursor.peek() {
            Some(b'-') => self.parse_comment().map(Markup::Comment),
            Some(b'[') => self.parse_cdata().map(Markup::CData),
            Some(_) => {
                let open = start.saturating_sub(2);
                Err(ParseError::InvalidMarkup {
                    fragment: fragment(self.cursor.slice(open, start + 1)),
                    position: open,
                })
            }
            None => Err(ParseError::UnexpectedEof { position: start }),
        }
    }

    /// Parse a comment; cursor is past `<!`
    pub(crate) fn parse_comment(&mut self) -> Result<&'a [u8]> {
        self.parse_delimited(b"--", b"-->", Construct::Comment)
    }

    /// Parse a CDATA section; cursor is past `<!`
    pub(crate) fn parse_cdata(&mut self) -> Result<&'a [u8]> {
        self.parse_delimited(b"[CDATA[", b"]]>", Construct::CData)
    }

    fn parse_delimited(
        &mut self,
        introducer: &[u8],
        terminator: &[u8],
        construct: Construct,
    ) -> Result<&'a [u8]> {
        let open = self.cursor.position().saturating_sub(2);

        // Every byte of the introducer must match
        for &expected in introducer {
            let found = self.cursor.read_byte().map_err(|_| ParseError::Unterminated {
                construct,
                fragment: fragment(self.cursor.slice(open, self.cursor.position())),
                position: open,
            })?;
            if found != expected {
                return Err(ParseError::UnexpectedByte {
                    expected: char::from(expected),
                    found: char::from(found),
                    position: self.cursor.position() - 1,
                });
            }
        }

        let content_start = self.cursor.position();
        match self.cursor.find_literal(terminator) {
            Some(end) => {
                self.cursor.set_position(end + terminator.len());
                Ok(self.cursor.slice(content_start, end))
            }
            None => {
                let tail = self.cursor.remaining();
                self.cursor.set_position(usize::MAX);
                Err(ParseError::Unterminated {
                    construct,
                    fragment: fragment(tail),
                    position: open,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bang(input: &[u8]) -> Result<Markup<'_>> {
        let mut parser = Parser::new(input);
        parser.cursor.set_position(2);
        parser.parse_bang_markup()
    }

    #[test]
    fn test_comment() {
        let markup = bang(b"<!-- a - b -->rest").unwrap();
        assert_eq!(markup, Markup::Comment(b" a - b "));
    }

    #[test]
    fn test_cdata() {
        let markup = bang(b"<![CDATA[<script>x]]</script>]]>").unwrap();
        assert_eq!(markup, Markup::CData(b"<script>x]]</script>"));
        assert_eq!(markup.body(), b"<script>x]]</script>");
    }

    #[test]
    fn test_empty_bodies() {
        assert_eq!(bang(b"<!---->").unwrap(), Markup::Comment(b""));
        assert_eq!(bang(b"<![CDATA[]]>").unwrap(), Markup::CData(b""));
    }

    #[test]
    fn test_cdata_introducer_checks_every_byte() {
        // Only the first byte is correct
        let err = bang(b"<![CXXXX[x]]>").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedByte { expected: 'D', found: 'X', position: 4 });
    }

    #[test]
    fn test_unterminated() {
        let err = bang(b"<!-- no end</a>").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Unterminated { construct: Construct::Comment, position: 0, .. }
        ));

        let err = bang(b"<![CDATA[ open").unwrap_err();
        assert!(matches!(err, ParseError::Unterminated { construct: Construct::CData, .. }));

        let err = bang(b"<![CDA").unwrap_err();
        assert!(matches!(err, ParseError::Unterminated { construct: Construct::CData, .. }));
    }

    #[test]
    fn test_invalid_markup() {
        let err = bang(b"<!DOCTYPE x>").unwrap_err();
        assert!(matches!(err, ParseError::InvalidMarkup { position: 0, .. }));
    }
}
