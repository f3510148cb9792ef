//! Structural comparison of two trees
//!
//! Children are compared positionally. The first difference found wins.

use super::node::Node;
use thiserror::Error;

/// First difference between two trees
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mismatch {
    #[error("Name mismatch: [ {left} ] vs [ {right} ]")]
    Name { left: String, right: String },

    #[error("Text mismatch [ {name} ]: {text}")]
    Text { name: String, text: String },

    #[error("Attribute count mismatch: [ {left} ] vs [ {right} ]")]
    AttributeCount { left: usize, right: usize },

    #[error("Attribute names mismatch: [ {left} ] vs [ {right} ]")]
    AttributeName { left: String, right: String },

    #[error("Attribute mismatch: [ {left} ] vs [ {right} ]")]
    AttributeValue { left: String, right: String },

    #[error("Node count mismatch: [ {left} ] vs [ {right} ]")]
    ChildCount { left: usize, right: usize },
}

impl Node {
    /// Deep comparison; `Err` describes the first difference
    pub fn compare(&self, other: &Node) -> Result<(), Mismatch> {
        // The prefix is part of the name: `x:a` and `y:a` differ
        if self.name != other.name || self.namespace_prefix != other.namespace_prefix {
            return Err(Mismatch::Name {
                left: self.qualified_name().into_owned(),
                right: other.qualified_name().into_owned(),
            });
        }

        if self.text != other.text {
            return Err(Mismatch::Text {
                name: self.name.clone(),
                text: self.text.clone(),
            });
        }

        if self.attributes.len() != other.attributes.len() {
            return Err(Mismatch::AttributeCount {
                left: self.attributes.len(),
                right: other.attributes.len(),
            });
        }
        for (l, r) in self.attributes.iter().zip(&other.attributes) {
            if l.name != r.name {
                return Err(Mismatch::AttributeName {
                    left: l.name.clone(),
                    right: r.name.clone(),
                });
            }
            if l.value != r.value {
                return Err(Mismatch::AttributeValue {
                    left: l.value.clone(),
                    right: r.value.clone(),
                });
            }
        }

        if self.children.len() != other.children.len() {
            return Err(Mismatch::ChildCount {
                left: self.children.len(),
                right: other.children.len(),
            });
        }
        self.children
            .iter()
            .zip(&other.children)
            .try_for_each(|(l, r)| l.compare(r))
    }

    /// Deep comparison returning a match flag and, on mismatch, a description
    pub fn matches(&self, other: &Node) -> (bool, String) {
        match self.compare(other) {
            Ok(()) => (true, String::new()),
            Err(mismatch) => (false, mismatch.to_string()),
        }
    }
}
