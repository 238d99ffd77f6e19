//! Declarative parse schemas.
//!
//! A [`ParseSchema`] describes the expected shape of a styled document: which
//! top-level sections exist (matched by heading style plus title text), and
//! how the content under each section is interpreted (a joined text block, a
//! list of parsed lines, or a recursive tree of titled nodes).
//!
//! Schemas are plain data and deserialize from JSON, so they can live in
//! configuration files next to the documents they describe.

use crate::error::{Error, Result};
use crate::model::{Paragraph, StyleTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

fn default_delimiter() -> String {
    ",".to_string()
}

fn is_default_delimiter(d: &str) -> bool {
    d == ","
}

/// How a single line of text is turned into structured data.
///
/// Parsing priority is fixed: a `key_delimiter` wins over `keys`, which wins
/// over plain delimited splitting. See [`crate::parse_line`] for the exact
/// rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSchema {
    /// Token delimiter within the line (default ",")
    #[serde(default = "default_delimiter", skip_serializing_if = "is_default_delimiter")]
    pub delimiter: String,

    /// Field names for positional record parsing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,

    /// Delimiter separating a leading key from its values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_delimiter: Option<String>,

    /// Splice array-valued parsed lines into the surrounding list
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub flatten: bool,
}

impl LineSchema {
    /// Create a line schema with the default "," delimiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the field names for positional record parsing.
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the key delimiter for keyed-pair parsing.
    pub fn with_key_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.key_delimiter = Some(delimiter.into());
        self
    }

    /// Enable flattening of array-valued lines.
    pub fn flattened(mut self) -> Self {
        self.flatten = true;
        self
    }
}

impl Default for LineSchema {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            keys: Vec::new(),
            key_delimiter: None,
            flatten: false,
        }
    }
}

/// The heading of a section or tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSchema {
    /// Output key, and for top-level sections the expected heading text.
    /// Optional inside tree nodes, whose headings are free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Heading style this title matches on
    pub style: StyleTag,

    /// Optional structured parse of the heading text itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineSchema>,
}

impl TitleSchema {
    /// Create an anonymous title matching the given style.
    pub fn new(style: StyleTag) -> Self {
        Self {
            name: None,
            style,
            line: None,
        }
    }

    /// Create a named title matching the given style.
    pub fn named(name: impl Into<String>, style: StyleTag) -> Self {
        Self {
            name: Some(name.into()),
            style,
            line: None,
        }
    }

    /// Parse the heading text through the given line schema.
    pub fn with_line(mut self, line: LineSchema) -> Self {
        self.line = Some(line);
        self
    }
}

/// How the content under a heading is interpreted.
///
/// Absence of a `ContentSchema` means "accumulate a text block". The
/// `Other` variant absorbs unrecognized `kind` values from schema files;
/// the dispatcher treats it as a text block rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentSchema {
    /// Each line becomes a list item
    List {
        /// Per-line parse settings
        #[serde(flatten)]
        line: LineSchema,
    },

    /// Lines form a recursive tree of titled nodes
    Tree {
        /// Schema of the tree's root nesting level
        #[serde(default, skip_serializing_if = "Option::is_none")]
        node: Option<Box<NodeSchema>>,
    },

    /// Unrecognized kind, parsed as a text block
    #[serde(other)]
    Other,
}

impl ContentSchema {
    /// A list content descriptor with the given line schema.
    pub fn list(line: LineSchema) -> Self {
        Self::List { line }
    }

    /// A tree content descriptor rooted at the given node schema.
    pub fn tree(node: NodeSchema) -> Self {
        Self::Tree {
            node: Some(Box::new(node)),
        }
    }
}

/// One nesting level of a tree region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSchema {
    /// Heading that opens a node at this level
    pub title: TitleSchema,

    /// Content expected under each node, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentSchema>,
}

impl NodeSchema {
    /// Create a node level whose headings use the given style.
    pub fn new(style: StyleTag) -> Self {
        Self {
            title: TitleSchema::new(style),
            content: None,
        }
    }

    /// Set the title schema.
    pub fn with_title(mut self, title: TitleSchema) -> Self {
        self.title = title;
        self
    }

    /// Set the content descriptor.
    pub fn with_content(mut self, content: ContentSchema) -> Self {
        self.content = Some(content);
        self
    }

    /// Nest a child level under this one.
    pub fn with_child(self, child: NodeSchema) -> Self {
        self.with_content(ContentSchema::tree(child))
    }

    /// The immediate child level, if this level's content is a tree.
    pub fn child(&self) -> Option<&NodeSchema> {
        match &self.content {
            Some(ContentSchema::Tree { node: Some(child) }) => Some(child),
            _ => None,
        }
    }

    /// Every heading style appearing at this level or below.
    pub fn style_set(&self) -> BTreeSet<StyleTag> {
        let mut styles = BTreeSet::new();
        self.collect_styles(&mut styles);
        styles
    }

    fn collect_styles(&self, styles: &mut BTreeSet<StyleTag>) {
        styles.insert(self.title.style);
        if let Some(child) = self.child() {
            child.collect_styles(styles);
        }
    }
}

/// A top-level document section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSchema {
    /// Section heading; `title.name` is both the match text and the output key
    pub title: TitleSchema,

    /// Content descriptor; absent means text block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentSchema>,
}

impl SectionSchema {
    /// Create a text-block section.
    pub fn new(name: impl Into<String>, style: StyleTag) -> Self {
        Self {
            title: TitleSchema::named(name, style),
            content: None,
        }
    }

    /// Set the content descriptor.
    pub fn with_content(mut self, content: ContentSchema) -> Self {
        self.content = Some(content);
        self
    }

    /// The section's output key.
    pub fn name(&self) -> Option<&str> {
        self.title.name.as_deref()
    }

    /// Check whether a paragraph opens this section.
    ///
    /// Both the style tag and the title text must match; the text comparison
    /// is whitespace-trimmed and case-insensitive. A section without a name
    /// never matches.
    pub fn matches(&self, paragraph: &Paragraph) -> bool {
        let Some(name) = self.name() else {
            return false;
        };
        paragraph.style == Some(self.title.style)
            && paragraph.text.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

/// An ordered list of section schemas describing a whole document.
///
/// Section names are expected to be unique. The driver does not deduplicate:
/// if two sections (or two document headings) resolve to the same name, the
/// later parse overwrites the earlier result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParseSchema {
    sections: Vec<SectionSchema>,
}

impl ParseSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section.
    pub fn with_section(mut self, section: SectionSchema) -> Self {
        self.sections.push(section);
        self
    }

    /// The declared sections, in document order.
    pub fn sections(&self) -> &[SectionSchema] {
        &self.sections
    }

    /// Find the first section whose title matches the paragraph.
    pub fn match_paragraph(&self, paragraph: &Paragraph) -> Option<&SectionSchema> {
        self.sections.iter().find(|s| s.matches(paragraph))
    }

    /// Load a schema from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Schema(e.to_string()))
    }
}

impl From<Vec<SectionSchema>> for ParseSchema {
    fn from(sections: Vec<SectionSchema>) -> Self {
        Self { sections }
    }
}
