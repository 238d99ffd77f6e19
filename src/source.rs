//! Document sources and raw-block normalization.
//!
//! A [`DocumentSource`] produces the raw styled blocks of a document; how it
//! does that (files, remote APIs, fixtures) is its own concern, including any
//! authentication or retries. Failures are wrapped into
//! [`Error::Source`](crate::Error::Source) with the attempted document
//! identity so callers can diagnose them, and propagated unchanged from
//! there on.

use crate::error::{Error, Result};
use crate::model::{Paragraph, StyleTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use unicode_normalization::UnicodeNormalization;

/// A raw styled block as produced by an upstream source, before
/// normalization. Both fields are optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBlock {
    /// Block text, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Source style name ("NORMAL", "HEADING_1", ...), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl RawBlock {
    /// A plain text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            style: None,
        }
    }

    /// A styled text block.
    pub fn styled(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            style: Some(style.into()),
        }
    }
}

/// Reduce raw blocks to normalized paragraphs.
///
/// Blocks without text are dropped. Text is NFC-normalized so heading
/// matching is stable across composed and decomposed input; style names are
/// mapped through [`StyleTag::from_name`], with unrecognized names (and
/// "NORMAL") becoming `None`.
pub fn normalize(blocks: &[RawBlock]) -> Vec<Paragraph> {
    blocks
        .iter()
        .filter_map(|block| {
            let text = block.text.as_deref()?;
            if text.is_empty() {
                return None;
            }
            Some(Paragraph {
                text: text.nfc().collect(),
                style: block.style.as_deref().and_then(StyleTag::from_name),
            })
        })
        .collect()
}

/// Anything that can produce the raw blocks of a document.
pub trait DocumentSource {
    /// Fetch the raw blocks of the identified document.
    fn fetch(&self, document_id: &str) -> Result<Vec<RawBlock>>;
}

/// An in-memory document source, useful for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: BTreeMap<String, Vec<RawBlock>>,
}

impl StaticSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document under an identifier.
    pub fn with_document(mut self, id: impl Into<String>, blocks: Vec<RawBlock>) -> Self {
        self.documents.insert(id.into(), blocks);
        self
    }
}

impl DocumentSource for StaticSource {
    fn fetch(&self, document_id: &str) -> Result<Vec<RawBlock>> {
        self.documents
            .get(document_id)
            .cloned()
            .ok_or_else(|| Error::source(document_id, "document not found"))
    }
}
