//! List parsing: one parsed item per paragraph.

use super::{parse_line, Cursor};
use crate::model::LineValue;
use crate::schema::LineSchema;

/// Parse consecutive paragraphs into list items.
///
/// Each paragraph runs through [`parse_line`] with the section's line schema.
/// With `flatten` set, array-valued lines are spliced element by element into
/// the result instead of nesting; keyed pairs and records are never
/// flattened. Stops before the first section boundary or recognized heading,
/// leaving it for the caller.
pub fn parse_list(cursor: &mut Cursor, schema: &LineSchema) -> Vec<LineValue> {
    let mut items = Vec::new();
    while !cursor.at_end() && !cursor.at_section_boundary() && !cursor.at_heading() {
        if let Some(paragraph) = cursor.current() {
            match parse_line(&paragraph.text, schema) {
                LineValue::List(elements) if schema.flatten => {
                    items.extend(elements.into_iter().map(LineValue::Text));
                }
                item => items.push(item),
            }
        }
        cursor.advance();
    }
    items
}
