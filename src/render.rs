//! JSON rendering of parse output.

use crate::error::{Error, Result};
use crate::model::ParsedDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a parsed document to JSON.
pub fn to_json(document: &ParsedDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(document),
        JsonFormat::Compact => serde_json::to_string(document),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionValue;

    #[test]
    fn test_to_json_pretty() {
        let mut doc = ParsedDocument::new();
        doc.insert("summary", SectionValue::Text("Hello".into()));

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"summary\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let mut doc = ParsedDocument::new();
        doc.insert("summary", SectionValue::Text("Hello".into()));

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert_eq!(json, "{\"summary\":\"Hello\"}");
    }
}
