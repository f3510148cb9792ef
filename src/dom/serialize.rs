//! Node serializers
//!
//! Compact form (`to_inline_string`) is what demoted children are written as
//! during parsing. Pretty form backs `Display`.

use super::node::Node;
use std::fmt::{self, Write};

impl Node {
    /// Serialize into a single-line XML string
    pub fn to_inline_string(&self) -> String {
        let mut out = String::new();
        self.write_inline(&mut out);
        out
    }

    pub(crate) fn write_inline(&self, out: &mut String) {
        if self.is_comment() {
            write_comment(out, &self.text);
            return;
        }

        if self.write_start_tag(out) {
            return;
        }
        for child in &self.children {
            child.write_inline(out);
        }
        if !self.text.is_empty() {
            write_text(out, self.text.trim(), self.is_cdata);
        }
        self.write_end_tag(out);
    }

    fn write_pretty(&self, out: &mut String, level: usize) {
        indent(out, level);
        if self.is_comment() {
            write_comment(out, &self.text);
            return;
        }

        if self.write_start_tag(out) {
            return;
        }
        if self.has_children() {
            for child in &self.children {
                out.push('\n');
                child.write_pretty(out, level + 1);
            }
            out.push('\n');
            indent(out, level);
        }
        if !self.text.is_empty() {
            if self.is_cdata {
                write_text(out, &self.text, true);
            } else {
                write_text(out, self.text.trim(), false);
            }
        }
        self.write_end_tag(out);
    }

    /// Writes `<name attrs>`, or `<name attrs/>` for a node with no content.
    /// Returns true when the tag was self-closed.
    ///
    /// Empty nodes are always self-closed, never written as `<name></name>`.
    /// Both spellings parse to the same node, and demoted children such as
    /// `<b/>text<c/>` then read back exactly as they were written.
    fn write_start_tag(&self, out: &mut String) -> bool {
        out.push('<');
        out.push_str(&self.qualified_name());
        for attr in &self.attributes {
            // Writing into a String cannot fail
            let _ = write!(out, " {}=\"{}\"", attr.name, attr.value);
        }
        if self.children.is_empty() && self.text.is_empty() {
            out.push_str("/>");
            true
        } else {
            out.push('>');
            false
        }
    }

    fn write_end_tag(&self, out: &mut String) {
        out.push_str("</");
        out.push_str(&self.qualified_name());
        out.push('>');
    }
}

/// Pretty multi-line form
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_pretty(&mut out, 0);
        f.write_str(&out)
    }
}

fn write_comment(out: &mut String, text: &str) {
    out.push_str("<!--");
    out.push_str(text);
    out.push_str("-->");
}

fn write_text(out: &mut String, text: &str, cdata: bool) {
    if cdata {
        out.push_str("<![CDATA[");
        out.push_str(text);
        out.push_str("]]>");
    } else {
        out.push_str(text);
    }
}

/// Nested lines are indented by level + 1 spaces; the root line is not
fn indent(out: &mut String, level: usize) {
    if level > 0 {
        out.extend(std::iter::repeat(' ').take(level + 1));
    }
}
