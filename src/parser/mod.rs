//! The segmentation engine: cursor, line parser, strategies, and driver.

mod cursor;
mod line;
mod list;
mod text;
mod tree;

pub use cursor::Cursor;
pub use line::parse_line;
pub use list::parse_list;
pub use text::parse_text_block;
pub use tree::parse_tree;

use crate::model::{Paragraph, ParsedDocument, SectionValue};
use crate::schema::{ContentSchema, ParseSchema, SectionSchema};

/// Parse a whole document against a schema.
///
/// Walks the paragraph sequence once. Every paragraph that opens a
/// schema-declared section hands the cursor to the matching content
/// strategy; everything between sections (including headings the schema does
/// not mention) is skipped. The parse is a pure function of its inputs and
/// never fails; see the crate docs for the permissiveness rules.
///
/// If two headings resolve to the same section name, the later one's content
/// replaces the earlier result.
pub fn parse_document(paragraphs: &[Paragraph], schema: &ParseSchema) -> ParsedDocument {
    let mut cursor = Cursor::new(paragraphs, schema);
    let mut document = ParsedDocument::new();

    while !cursor.at_end() {
        let Some(section) = cursor.current_section() else {
            cursor.advance();
            continue;
        };
        // Matching guarantees the section carries a name.
        let Some(name) = section.name() else {
            cursor.advance();
            continue;
        };
        log::debug!("section '{}' opens at {}", name, cursor.position());
        let name = name.to_string();
        cursor.advance();
        let value = parse_section(&mut cursor, section);
        document.insert(name, value);
    }
    document
}

/// Route a matched section to its content strategy.
///
/// No content descriptor means a text block; so does an unrecognized
/// descriptor kind. A tree descriptor without a node schema yields an empty
/// tree rather than an error.
pub fn parse_section(cursor: &mut Cursor, section: &SectionSchema) -> SectionValue {
    match &section.content {
        None | Some(ContentSchema::Other) => SectionValue::Text(parse_text_block(cursor)),
        Some(ContentSchema::List { line }) => SectionValue::List(parse_list(cursor, line)),
        Some(ContentSchema::Tree { node: None }) => SectionValue::Tree(Vec::new()),
        Some(ContentSchema::Tree { node: Some(node) }) => {
            SectionValue::Tree(parse_tree(cursor, node))
        }
    }
}
