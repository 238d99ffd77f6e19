//! Recursive tree parsing.
//!
//! A tree region turns a run of headings and content lines into nested
//! `{title, content}` nodes. Heading levels in real documents are not
//! guaranteed to nest correctly, so every paragraph is classified against the
//! schema for the current nesting level *and* the ancestor levels above it,
//! never by lookahead. A heading that belongs to an ancestor level closes
//! every open node below it and is re-offered, unconsumed, to each enclosing
//! call on the way back up until one frame recognizes it as its own title.

use super::{parse_line, Cursor};
use crate::model::{LineValue, Node, NodeContent, StyleTag};
use crate::schema::{ContentSchema, NodeSchema};
use std::collections::BTreeSet;

/// Parse a tree region rooted at the given node schema.
///
/// Scans forward for the first paragraph styled as the root level's title;
/// anything before it is orphaned content and is discarded. The scan gives
/// up without producing nodes when it reaches the end of the document, a
/// section boundary, or a heading styled outside the tree entirely (that
/// paragraph is left for the caller).
pub fn parse_tree(cursor: &mut Cursor, root: &NodeSchema) -> Vec<Node> {
    let styles = root.style_set();
    while !cursor.at_end() {
        if cursor.at_section_boundary() {
            return Vec::new();
        }
        match cursor.current().and_then(|p| p.style) {
            Some(style) if style == root.title.style => {
                return parse_level(cursor, root, &[], &styles);
            }
            Some(style) if !styles.contains(&style) => {
                log::debug!("tree ends before any root heading at {}", cursor.position());
                return Vec::new();
            }
            // Orphan text, empty paragraphs, and stray in-tree headings
            // before the first root heading are all skipped.
            _ => cursor.advance(),
        }
    }
    Vec::new()
}

/// Parse all sibling nodes at one nesting level.
///
/// `ancestors` holds the schemas of every enclosing level, nearest first.
/// Returns without consuming the paragraph that terminates the level, so
/// enclosing frames can re-examine it. Termination is guaranteed: each
/// return pops one frame, and the ancestor stack is finite.
fn parse_level(
    cursor: &mut Cursor,
    level: &NodeSchema,
    ancestors: &[&NodeSchema],
    styles: &BTreeSet<StyleTag>,
) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::new();
    let child = level.child();
    let tree_typed = matches!(level.content, Some(ContentSchema::Tree { .. }));

    while !cursor.at_end() {
        if cursor.at_section_boundary() {
            break;
        }
        let Some(paragraph) = cursor.current() else {
            cursor.advance();
            continue;
        };

        let Some(style) = paragraph.style else {
            // Ordinary text line. A level that expects structured children
            // never accumulates loose text; otherwise the line joins the
            // open sibling. With no sibling open the line is dropped.
            if !tree_typed {
                if let Some(open) = nodes.last_mut() {
                    open.content
                        .push(NodeContent::Text(paragraph.text.trim().to_string()));
                }
            }
            cursor.advance();
            continue;
        };

        if !styles.contains(&style) {
            // A heading from outside the tree ends it; the paragraph stays
            // for the document driver.
            break;
        }

        if style == level.title.style {
            // New sibling at this level.
            let title = match &level.title.line {
                Some(line) => parse_line(paragraph.text.trim(), line),
                None => LineValue::Text(paragraph.text.trim().to_string()),
            };
            log::trace!("sibling node at {}: {:?}", cursor.position(), title);
            nodes.push(Node::new(title));
            cursor.advance();
        } else if let Some(child_level) = child.filter(|c| c.title.style == style) {
            // Child heading: descend one level and splice the children into
            // the open sibling. A child heading with no open sibling has
            // nothing to attach to and is skipped.
            if nodes.is_empty() {
                cursor.advance();
                continue;
            }
            let mut enclosing = Vec::with_capacity(ancestors.len() + 1);
            enclosing.push(level);
            enclosing.extend_from_slice(ancestors);
            let children = parse_level(cursor, child_level, &enclosing, styles);
            if let Some(open) = nodes.last_mut() {
                open.content
                    .extend(children.into_iter().map(NodeContent::Node));
            }
        } else if ancestors.iter().any(|a| a.title.style == style) {
            // The heading belongs to an enclosing level. Close this one and
            // leave the paragraph for the frame that owns it.
            break;
        } else {
            // In the tree's style set but placeable nowhere from here; only
            // overlapping schema levels produce this. Treated as a boundary.
            log::debug!(
                "unplaceable {} heading at {} ends level",
                style.as_name(),
                cursor.position()
            );
            break;
        }
    }
    nodes
}
