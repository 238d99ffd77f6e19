//! # docshape
//!
//! Schema-driven segmentation of styled rich-text documents into structured
//! JSON values.
//!
//! A rich document arrives as a flat, ordered sequence of styled paragraphs.
//! Its structure is only implicit: heading styles mark where sections and
//! nested regions begin, but nothing in the sequence is actually nested. A
//! [`ParseSchema`] makes the expected structure explicit — which sections to
//! look for, and whether the content under each is a text block, a list of
//! parsed lines, or a recursive tree of titled nodes — and
//! [`parse_document`] segments the sequence accordingly in a single forward
//! pass.
//!
//! ## Quick Start
//!
//! ```
//! use docshape::{
//!     parse_document, ContentSchema, LineSchema, Paragraph, ParseSchema, SectionSchema,
//!     SectionValue, StyleTag,
//! };
//!
//! let schema = ParseSchema::new()
//!     .with_section(SectionSchema::new("Summary", StyleTag::Heading1))
//!     .with_section(
//!         SectionSchema::new("Skills", StyleTag::Heading2)
//!             .with_content(ContentSchema::list(LineSchema::new().flattened())),
//!     );
//!
//! let paragraphs = vec![
//!     Paragraph::heading("Summary", StyleTag::Heading1),
//!     Paragraph::with_text("Systems engineer."),
//!     Paragraph::heading("Skills", StyleTag::Heading2),
//!     Paragraph::with_text("Rust, Go"),
//! ];
//!
//! let doc = parse_document(&paragraphs, &schema);
//! assert_eq!(doc.get("Summary"), Some(&SectionValue::Text("Systems engineer.".into())));
//! ```
//!
//! ## Design
//!
//! The segmentation pass is a pure, single-threaded function of its two
//! inputs and never fails. Malformed schema pieces degrade instead of
//! erroring: a tree descriptor without a node schema yields an empty tree,
//! an unrecognized content kind is read as a text block, and a line that
//! does not fit its line schema comes back as a bare string. Errors exist
//! only at the boundary — loading documents and schemas, writing output.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod schema;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{LineValue, Node, NodeContent, Paragraph, ParsedDocument, SectionValue, StyleTag};
pub use parser::{parse_document, parse_line, parse_section, Cursor};
pub use render::{to_json, JsonFormat};
pub use schema::{
    ContentSchema, LineSchema, NodeSchema, ParseSchema, SectionSchema, TitleSchema,
};
pub use source::{normalize, DocumentSource, RawBlock, StaticSource};

/// Normalize raw blocks and parse them in one step.
pub fn parse_blocks(blocks: &[RawBlock], schema: &ParseSchema) -> ParsedDocument {
    parse_document(&normalize(blocks), schema)
}

/// Fetch a document from a source, normalize it, and parse it.
pub fn parse_source(
    source: &dyn DocumentSource,
    document_id: &str,
    schema: &ParseSchema,
) -> Result<ParsedDocument> {
    let blocks = source.fetch(document_id)?;
    Ok(parse_blocks(&blocks, schema))
}

/// Parse serialized inputs: a JSON array of raw blocks plus a JSON schema.
pub fn parse_json_str(blocks_json: &str, schema_json: &str) -> Result<ParsedDocument> {
    let schema = ParseSchema::from_json_str(schema_json)?;
    let blocks: Vec<RawBlock> =
        serde_json::from_str(blocks_json).map_err(|e| Error::Blocks(e.to_string()))?;
    Ok(parse_blocks(&blocks, &schema))
}

/// A reusable parser owning its schema.
///
/// Useful when the same schema is applied to many documents.
///
/// # Example
///
/// ```
/// use docshape::{Extractor, ParseSchema, Paragraph, SectionSchema, StyleTag};
///
/// let extractor = Extractor::new(
///     ParseSchema::new().with_section(SectionSchema::new("Summary", StyleTag::Heading1)),
/// );
/// let doc = extractor.parse(&[Paragraph::heading("Summary", StyleTag::Heading1)]);
/// assert_eq!(doc.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    schema: ParseSchema,
}

impl Extractor {
    /// Create an extractor for the given schema.
    pub fn new(schema: ParseSchema) -> Self {
        Self { schema }
    }

    /// The schema this extractor applies.
    pub fn schema(&self) -> &ParseSchema {
        &self.schema
    }

    /// Parse a normalized paragraph sequence.
    pub fn parse(&self, paragraphs: &[Paragraph]) -> ParsedDocument {
        parse_document(paragraphs, &self.schema)
    }

    /// Normalize and parse raw blocks.
    pub fn parse_blocks(&self, blocks: &[RawBlock]) -> ParsedDocument {
        parse_blocks(blocks, &self.schema)
    }

    /// Fetch, normalize, and parse a document from a source.
    pub fn parse_source(
        &self,
        source: &dyn DocumentSource,
        document_id: &str,
    ) -> Result<ParsedDocument> {
        parse_source(source, document_id, &self.schema)
    }
}
