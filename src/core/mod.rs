//! Core XML parsing primitives
//!
//! - Cursor: byte reads, whitespace skipping, memchr-backed forward search
//! - Element: start tags, namespace prefix split, attributes
//! - Content: element bodies and the mixed-content demotion rule
//! - Markup: comments and CDATA sections
//! - Document: `Parser`, XML declaration and root driver

pub mod content;
pub mod cursor;
pub mod document;
pub mod element;
pub mod markup;

pub use document::Parser;
