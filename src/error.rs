//! Parse errors
//!
//! Flat error enum. Every variant carries the byte offset where scanning stopped.

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Multi-byte construct that can run off the end of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Comment,
    CData,
    AttributeValue,
    ClosingTag,
    Declaration,
}

impl Construct {
    /// Terminator the scanner was looking for
    pub fn terminator(&self) -> &'static str {
        match self {
            Construct::Comment => "-->",
            Construct::CData => "]]>",
            Construct::AttributeValue => "\"",
            Construct::ClosingTag => ">",
            Construct::Declaration => "?>",
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Construct::Comment => "comment",
            Construct::CData => "CDATA section",
            Construct::AttributeValue => "attribute value",
            Construct::ClosingTag => "closing tag",
            Construct::Declaration => "XML declaration",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input at offset {position}")]
    UnexpectedEof { position: usize },

    #[error("expected {expected:?}, found {found:?} at offset {position}")]
    UnexpectedByte { expected: char, found: char, position: usize },

    #[error("expected alpha character, found {found:?} at offset {position}")]
    ExpectedNameStart { found: char, position: usize },

    #[error("missing node name at offset {position}")]
    MissingName { position: usize },

    #[error("invalid attribute name character {found:?} at offset {position}")]
    InvalidAttributeName { found: char, position: usize },

    #[error(
        "unterminated {}: expected '{}', found '{}' at offset {}",
        .construct,
        .construct.terminator(),
        .fragment,
        .position
    )]
    Unterminated { construct: Construct, fragment: String, position: usize },

    #[error("expected '<![CDATA[' or '<!--', found '{fragment}' at offset {position}")]
    InvalidMarkup { fragment: String, position: usize },

    #[error("cannot unread at beginning of input")]
    UnreadAtStart,

    #[error("invalid UTF-8 in {what} at offset {position}")]
    InvalidUtf8 { what: &'static str, position: usize },

    #[error("nesting depth exceeds limit of {limit} at offset {position}")]
    DepthLimitExceeded { limit: usize, position: usize },

    #[error("unexpected content before root element at offset {position}")]
    LeadingContent { position: usize },

    #[error("unexpected content after root element at offset {position}")]
    TrailingContent { position: usize },
}

impl ParseError {
    /// Byte offset of the failure, if known
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedEof { position }
            | ParseError::UnexpectedByte { position, .. }
            | ParseError::ExpectedNameStart { position, .. }
            | ParseError::MissingName { position }
            | ParseError::InvalidAttributeName { position, .. }
            | ParseError::Unterminated { position, .. }
            | ParseError::InvalidMarkup { position, .. }
            | ParseError::InvalidUtf8 { position, .. }
            | ParseError::DepthLimitExceeded { position, .. }
            | ParseError::LeadingContent { position }
            | ParseError::TrailingContent { position } => Some(*position),
            ParseError::UnreadAtStart => None,
        }
    }

    /// True for any failure caused by running out of input
    pub fn is_eof(&self) -> bool {
        matches!(
            self,
            ParseError::UnexpectedEof { .. } | ParseError::Unterminated { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unexpected_byte() {
        let err = ParseError::UnexpectedByte { expected: '=', found: 'x', position: 7 };
        assert_eq!(err.to_string(), "expected '=', found 'x' at offset 7");
        assert_eq!(err.position(), Some(7));
    }

    #[test]
    fn test_display_unterminated() {
        let err = ParseError::Unterminated {
            construct: Construct::Comment,
            fragment: "<!-- no end</a>".to_string(),
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "unterminated comment: expected '-->', found '<!-- no end</a>' at offset 3"
        );
        assert!(err.is_eof());
    }
}
