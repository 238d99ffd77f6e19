//! Data model: input paragraphs and output values.

mod paragraph;
mod value;

pub use paragraph::{Paragraph, StyleTag};
pub use value::{LineValue, Node, NodeContent, ParsedDocument, SectionValue};
