//! Paragraph-level types.

use serde::{Deserialize, Serialize};

/// A recognized heading-like paragraph style.
///
/// This is a closed set: any style name outside it (including "NORMAL") is
/// not a heading and maps to `None` at the paragraph level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StyleTag {
    /// Document title
    #[serde(rename = "TITLE")]
    Title,

    /// Document subtitle
    #[serde(rename = "SUBTITLE")]
    Subtitle,

    /// Heading level 1
    #[serde(rename = "HEADING_1")]
    Heading1,

    /// Heading level 2
    #[serde(rename = "HEADING_2")]
    Heading2,

    /// Heading level 3
    #[serde(rename = "HEADING_3")]
    Heading3,

    /// Heading level 4
    #[serde(rename = "HEADING_4")]
    Heading4,

    /// Heading level 5
    #[serde(rename = "HEADING_5")]
    Heading5,

    /// Heading level 6
    #[serde(rename = "HEADING_6")]
    Heading6,
}

impl StyleTag {
    /// Look up a style by its wire name ("TITLE", "HEADING_1", ...).
    ///
    /// Returns `None` for "NORMAL" and any other unrecognized name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "TITLE" => Some(Self::Title),
            "SUBTITLE" => Some(Self::Subtitle),
            "HEADING_1" => Some(Self::Heading1),
            "HEADING_2" => Some(Self::Heading2),
            "HEADING_3" => Some(Self::Heading3),
            "HEADING_4" => Some(Self::Heading4),
            "HEADING_5" => Some(Self::Heading5),
            "HEADING_6" => Some(Self::Heading6),
            _ => None,
        }
    }

    /// The wire name of this style.
    pub fn as_name(&self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Subtitle => "SUBTITLE",
            Self::Heading1 => "HEADING_1",
            Self::Heading2 => "HEADING_2",
            Self::Heading3 => "HEADING_3",
            Self::Heading4 => "HEADING_4",
            Self::Heading5 => "HEADING_5",
            Self::Heading6 => "HEADING_6",
        }
    }

    /// Heading rank (1-6) for the numbered heading styles.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Self::Heading1 => Some(1),
            Self::Heading2 => Some(2),
            Self::Heading3 => Some(3),
            Self::Heading4 => Some(4),
            Self::Heading5 => Some(5),
            Self::Heading6 => Some(6),
            _ => None,
        }
    }
}

/// A normalized paragraph: its text plus an optional recognized style.
///
/// `style: None` covers both unstyled ("NORMAL") paragraphs and paragraphs
/// whose source style is not in the [`StyleTag`] set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text
    pub text: String,

    /// Recognized heading style, if any
    #[serde(default)]
    pub style: Option<StyleTag>,
}

impl Paragraph {
    /// Create an unstyled paragraph.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// Create a heading paragraph.
    pub fn heading(text: impl Into<String>, style: StyleTag) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }

    /// Check if this paragraph carries a recognized heading style.
    pub fn is_heading(&self) -> bool {
        self.style.is_some()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
