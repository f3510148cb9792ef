//! Element content parsing
//!
//! Children are kept as structured nodes only while no text byte has appeared
//! at this level. The first text byte demotes every pending child into the
//! text accumulator, followed by the whitespace captured after the last of
//! them, and every later child is written straight into the accumulator.

use super::cursor::{fragment, utf8};
use super::document::Parser;
use crate::dom::Node;
use crate::error::{Construct, ParseError, Result};
use log::trace;

impl<'a> Parser<'a> {
    /// Parse the body of `node` up to and including its end tag
    pub(crate) fn parse_content(&mut self, node: &mut Node, depth: usize) -> Result<()> {
        let mut text = String::new();
        let mut text_seen = false;
        let mut pending: Vec<Node> = Vec::new();
        // Whitespace after the most recent pending child
        let mut spaces: &'a [u8] = &[];

        let mut c = self.cursor.skip_whitespace()?;
        loop {
            if c != b'<' {
                demote(&mut text, &mut pending, &mut spaces);
                let run_start = self.cursor.position() - 1;
                self.cursor.read_until(b'<')?;
                let run = self.cursor.slice(run_start, self.cursor.position());
                text.push_str(utf8(run, "text", run_start)?);
                text_seen = true;
                c = self.cursor.read_byte()?;
                continue;
            }

            c = self.cursor.read_byte()?;
            match c {
                b'/' => {
                    self.parse_end_tag(node)?;
                    break;
                }
                b'!' => {
                    let body_start = self.cursor.position();
                    let body = self.parse_bang_markup()?.body();
                    if !body.is_empty() {
                        demote(&mut text, &mut pending, &mut spaces);
                        text.push_str(utf8(body, "character data", body_start)?);
                        text_seen = true;
                        node.is_cdata = true;
                    }
                    c = self.cursor.skip_whitespace()?;
                }
                _ => {
                    self.cursor.unread_byte()?;
                    let child = self.parse_element(depth + 1)?;
                    if text_seen {
                        child.write_inline(&mut text);
                        c = self.cursor.read_byte()?;
                    } else {
                        let (next, gap) = self.cursor.check_whitespace()?;
                        pending.push(child);
                        spaces = gap;
                        c = next;
                    }
                }
            }
        }

        if text_seen {
            node.text = text;
        } else {
            node.children = pending;
        }
        Ok(())
    }

    /// Match `</` + qualified name + optional whitespace + `>`; cursor is past `</`
    fn parse_end_tag(&mut self, node: &Node) -> Result<()> {
        let open = self.cursor.position().saturating_sub(2);
        let name = node.qualified_name();
        let c = match self.cursor.skip_literal(name.as_bytes()) {
            Ok(c) => c,
            Err(ParseError::UnexpectedEof { .. }) => {
                return Err(ParseError::Unterminated {
                    construct: Construct::ClosingTag,
                    fragment: fragment(self.cursor.slice(open, self.cursor.position())),
                    position: open,
                })
            }
            Err(e) => return Err(e),
        };
        if c != b'>' {
            return Err(self.unexpected(b'>', c));
        }
        Ok(())
    }
}

/// Flatten pending children into the accumulator, then the held whitespace.
/// Gaps between earlier pending children are not kept.
fn demote(text: &mut String, pending: &mut Vec<Node>, spaces: &mut &[u8]) {
    if pending.is_empty() {
        return;
    }
    trace!("demoting {} pending children to text", pending.len());
    for child in pending.drain(..) {
        child.write_inline(text);
    }
    text.extend(spaces.iter().map(|&b| char::from(b)));
    *spaces = &[];
}
