//! Byte cursor over the input buffer
//!
//! Byte-at-a-time reads with one step of rewind. Forward searches use the
//! memchr crate (SSE2/AVX2/NEON where available).

use crate::error::{Construct, ParseError, Result};
use memchr::{memchr, memmem};

/// Read position over a borrowed input buffer
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the input
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Cursor { input, pos: 0 }
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the current position
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.input.len());
    }

    /// Get remaining bytes
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Get a slice from start to end positions
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.input[start..end]
    }

    /// Peek at current byte without advancing
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Read the next byte and advance
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8> {
        match self.input.get(self.pos) {
            Some(&b) => {
                self.pos += 1;
                Ok(b)
            }
            None => Err(ParseError::UnexpectedEof { position: self.pos }),
        }
    }

    /// Step back over the byte just read
    #[inline]
    pub fn unread_byte(&mut self) -> Result<()> {
        if self.pos == 0 {
            return Err(ParseError::UnreadAtStart);
        }
        self.pos -= 1;
        Ok(())
    }

    /// Skip whitespace and return the first significant byte (consumed)
    pub fn skip_whitespace(&mut self) -> Result<u8> {
        loop {
            let b = self.read_byte()?;
            if !is_whitespace(b) {
                return Ok(b);
            }
        }
    }

    /// Like [`skip_whitespace`](Cursor::skip_whitespace), also returning the
    /// whitespace that was skipped
    pub fn check_whitespace(&mut self) -> Result<(u8, &'a [u8])> {
        let start = self.pos;
        let b = self.skip_whitespace()?;
        Ok((b, &self.input[start..self.pos - 1]))
    }

    /// Consume exactly `literal`, then skip whitespace and return the next byte
    pub fn skip_literal(&mut self, literal: &[u8]) -> Result<u8> {
        for &expected in literal {
            let b = self.read_byte()?;
            if b != expected {
                return Err(ParseError::UnexpectedByte {
                    expected: char::from(expected),
                    found: char::from(b),
                    position: self.pos - 1,
                });
            }
        }
        self.skip_whitespace()
    }

    /// Read a double-quoted value; the opening quote has already been consumed
    pub fn read_quoted(&mut self) -> Result<&'a [u8]> {
        let start = self.pos;
        match memchr(b'"', &self.input[start..]) {
            Some(len) => {
                self.pos = start + len + 1;
                Ok(&self.input[start..start + len])
            }
            None => {
                self.pos = self.input.len();
                Err(ParseError::Unterminated {
                    construct: Construct::AttributeValue,
                    fragment: fragment(&self.input[start..]),
                    position: start,
                })
            }
        }
    }

    /// Advance past the next `target`; returns false (at end of input) if absent
    pub fn find(&mut self, target: u8) -> bool {
        match memchr(target, &self.input[self.pos..]) {
            Some(i) => {
                self.pos += i + 1;
                true
            }
            None => {
                self.pos = self.input.len();
                false
            }
        }
    }

    /// Move onto (not past) the next `target`
    pub fn skip_to(&mut self, target: u8) -> Option<usize> {
        let i = memchr(target, &self.input[self.pos..])?;
        self.pos += i;
        Some(self.pos)
    }

    /// Read bytes up to (not including) the next `delimiter`
    pub fn read_until(&mut self, delimiter: u8) -> Result<&'a [u8]> {
        let start = self.pos;
        match memchr(delimiter, &self.input[start..]) {
            Some(len) => {
                self.pos = start + len;
                Ok(&self.input[start..start + len])
            }
            None => {
                self.pos = self.input.len();
                Err(ParseError::UnexpectedEof { position: self.pos })
            }
        }
    }

    /// Offset of the next `needle` at or after the current position
    #[inline]
    pub fn find_literal(&self, needle: &[u8]) -> Option<usize> {
        memmem::find(&self.input[self.pos..], needle).map(|i| self.pos + i)
    }
}

/// Lossy text of a byte run for error messages
pub(crate) fn fragment(bytes: &[u8]) -> String {
    const LIMIT: usize = 32;
    let bytes = &bytes[..bytes.len().min(LIMIT)];
    String::from_utf8_lossy(bytes).into_owned()
}

/// View a byte run as UTF-8; `position` is the offset of the run in the input
pub(crate) fn utf8<'b>(bytes: &'b [u8], what: &'static str, position: usize) -> Result<&'b str> {
    std::str::from_utf8(bytes).map_err(|e| ParseError::InvalidUtf8 {
        what,
        position: position + e.valid_up_to(),
    })
}

/// Space, tab, newline, carriage return, vertical tab, form feed
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// First byte of an element name
#[inline]
pub fn is_name_start_char(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Element name byte (colon handled separately by the element parser)
#[inline]
pub fn is_name_char(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'_' | b'-')
}

/// Attribute name byte; the colon stays part of the name
#[inline]
pub fn is_attribute_char(b: u8) -> bool {
    is_name_char(b) || b == b':'
}
