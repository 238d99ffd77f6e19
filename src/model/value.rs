//! Output value types.
//!
//! These are the JSON-like values the segmentation pass produces. All enums
//! serialize untagged so the output mirrors the natural JSON shapes: strings,
//! arrays, `{key, value}` pairs, and plain objects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The result of parsing a single line of text against a line schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineValue {
    /// A keyed pair: a key and its delimited values
    Keyed {
        /// The text before the key delimiter, trimmed
        key: String,
        /// The remainder, split on the line delimiter
        value: Vec<String>,
    },

    /// A fixed-field record zipped from schema keys
    Record(BTreeMap<String, String>),

    /// A plain delimited list
    List(Vec<String>),

    /// A bare string (no structure applied, or a parse fallback)
    Text(String),
}

impl LineValue {
    /// Create a bare string value.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// The string content if this is a bare string value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// One element of a tree node's content: either a plain text line or a
/// nested child node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeContent {
    /// A nested child node
    Node(Node),

    /// A plain content line
    Text(String),
}

/// A node of a parsed tree region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// The node title, parsed from its heading text
    pub title: LineValue,

    /// Content lines or child nodes under this heading
    pub content: Vec<NodeContent>,
}

impl Node {
    /// Create a node with the given title and no content.
    pub fn new(title: LineValue) -> Self {
        Self {
            title,
            content: Vec::new(),
        }
    }

    /// Create a node with a plain string title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new(LineValue::Text(title.into()))
    }

    /// Child nodes in this node's content.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.content.iter().filter_map(|c| match c {
            NodeContent::Node(n) => Some(n),
            NodeContent::Text(_) => None,
        })
    }
}

/// The parsed value of one document section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionValue {
    /// A joined text block
    Text(String),

    /// A flat or grouped list of parsed lines
    List(Vec<LineValue>),

    /// A nested tree of titled nodes
    Tree(Vec<Node>),
}

/// The full output of a document parse: section name to parsed value.
///
/// Backed by a `BTreeMap` so serialized output is deterministic. Duplicate
/// section names are last-write-wins: if the same section heading occurs
/// twice, the later occurrence's content replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedDocument {
    sections: BTreeMap<String, SectionValue>,
}

impl ParsedDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a section result, replacing any earlier value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: SectionValue) {
        self.sections.insert(name.into(), value);
    }

    /// Get a section result by name.
    pub fn get(&self, name: &str) -> Option<&SectionValue> {
        self.sections.get(name)
    }

    /// Number of parsed sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if no section was parsed.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over (name, value) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &SectionValue)> {
        self.sections.iter()
    }
}
