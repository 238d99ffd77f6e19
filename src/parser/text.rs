//! Text block accumulation.

use super::Cursor;

/// Accumulate paragraphs into one space-joined string.
///
/// Consumes paragraphs until the end of the document, a section boundary, or
/// any recognized heading. Empty paragraphs are stepped over without
/// contributing. The boundary paragraph itself is left unconsumed for the
/// caller.
pub fn parse_text_block(cursor: &mut Cursor) -> String {
    let mut parts: Vec<&str> = Vec::new();
    while !cursor.at_end() && !cursor.at_section_boundary() && !cursor.at_heading() {
        if let Some(paragraph) = cursor.current() {
            parts.push(paragraph.text.as_str());
        }
        cursor.advance();
    }
    parts.join(" ")
}
