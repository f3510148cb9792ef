//! DOM Module - owned XML tree
//!
//! - `node`: `Node` and `Attribute`, lookup helpers
//! - `serialize`: compact and pretty writers
//! - `compare`: positional structural comparison

pub mod compare;
pub mod node;
pub mod serialize;

pub use compare::Mismatch;
pub use node::{Attribute, Node, COMMENT_NAME};
