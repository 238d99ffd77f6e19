//! Forward-only traversal over a paragraph sequence.

use crate::model::Paragraph;
use crate::schema::{ParseSchema, SectionSchema};

/// A single forward-only pointer over a normalized paragraph sequence.
///
/// The cursor never rewinds: it starts at position 0 and only moves forward,
/// one paragraph at a time. It does not skip empty paragraphs on its own;
/// callers see `None` from [`current`](Cursor::current) at an empty position
/// and are expected to advance past it themselves, so an empty paragraph can
/// never be mistaken for a heading or a section boundary.
#[derive(Debug)]
pub struct Cursor<'a> {
    paragraphs: &'a [Paragraph],
    schema: &'a ParseSchema,
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the paragraph sequence.
    pub fn new(paragraphs: &'a [Paragraph], schema: &'a ParseSchema) -> Self {
        Self {
            paragraphs,
            schema,
            position: 0,
        }
    }

    /// The paragraph under the cursor.
    ///
    /// Returns `None` past the end of the sequence, and also when the
    /// paragraph at this position carries no visible text.
    pub fn current(&self) -> Option<&'a Paragraph> {
        self.paragraphs
            .get(self.position)
            .filter(|p| !p.is_empty())
    }

    /// Move forward by one paragraph. A no-op once past the end.
    pub fn advance(&mut self) {
        if self.position < self.paragraphs.len() {
            self.position += 1;
        }
    }

    /// Check if the cursor has consumed the whole sequence.
    pub fn at_end(&self) -> bool {
        self.position >= self.paragraphs.len()
    }

    /// Current position in the sequence, for diagnostics.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The first schema section whose title matches the current paragraph.
    ///
    /// Matching requires both the style tag and the case-insensitive,
    /// whitespace-trimmed title text; an empty current paragraph matches
    /// nothing.
    pub fn current_section(&self) -> Option<&'a SectionSchema> {
        self.current()
            .and_then(|p| self.schema.match_paragraph(p))
    }

    /// The name of the matching section, if the cursor sits on one.
    pub fn current_section_name(&self) -> Option<&'a str> {
        self.current_section().and_then(SectionSchema::name)
    }

    /// Check if the current paragraph begins a schema-declared section.
    pub fn at_section_boundary(&self) -> bool {
        self.current_section().is_some()
    }

    /// Check if the current paragraph carries a recognized heading style.
    pub fn at_heading(&self) -> bool {
        self.current().is_some_and(Paragraph::is_heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StyleTag;
    use crate::schema::SectionSchema;

    fn schema() -> ParseSchema {
        ParseSchema::new().with_section(SectionSchema::new("Skills", StyleTag::Heading2))
    }

    #[test]
    fn test_advance_and_end() {
        let paragraphs = vec![Paragraph::with_text("a"), Paragraph::with_text("b")];
        let schema = schema();
        let mut cursor = Cursor::new(&paragraphs, &schema);

        assert!(!cursor.at_end());
        assert_eq!(cursor.current().unwrap().text, "a");

        cursor.advance();
        assert_eq!(cursor.current().unwrap().text, "b");

        cursor.advance();
        assert!(cursor.at_end());
        assert!(cursor.current().is_none());

        // Advancing past the end stays put
        cursor.advance();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_empty_paragraph_is_invisible() {
        let paragraphs = vec![Paragraph::with_text("  ")];
        let schema = schema();
        let cursor = Cursor::new(&paragraphs, &schema);

        assert!(!cursor.at_end());
        assert!(cursor.current().is_none());
        assert!(!cursor.at_heading());
        assert!(!cursor.at_section_boundary());
    }

    #[test]
    fn test_section_boundary_requires_style_and_text() {
        let schema = schema();

        let paragraphs = vec![Paragraph::heading("SKILLS", StyleTag::Heading2)];
        let cursor = Cursor::new(&paragraphs, &schema);
        assert!(cursor.at_section_boundary());
        assert_eq!(cursor.current_section_name(), Some("Skills"));

        let text_only = vec![Paragraph::with_text("Skills")];
        let cursor = Cursor::new(&text_only, &schema);
        assert!(!cursor.at_section_boundary());
        assert_eq!(cursor.current_section_name(), None);

        let style_only = vec![Paragraph::heading("Hobbies", StyleTag::Heading2)];
        let cursor = Cursor::new(&style_only, &schema);
        assert!(!cursor.at_section_boundary());
        assert!(cursor.at_heading());
    }
}
