//! Structured parsing of a single line of text.

use crate::model::LineValue;
use crate::schema::LineSchema;
use std::collections::BTreeMap;

/// Parse one line of text according to a line schema.
///
/// Three parsing rules are tried in a fixed priority order; the first
/// applicable rule wins:
///
/// 1. `key_delimiter` set: split the line at the first occurrence into a
///    trimmed key and delimiter-separated values (empty tokens dropped).
///    If the delimiter is missing, or appears at position 0 so the key would
///    be empty, the whole line is returned as a bare string instead.
/// 2. `keys` non-empty: split on the delimiter and zip tokens with the keys
///    positionally. Empty tokens are kept so positions stay aligned; missing
///    trailing values become `""`, extra values are discarded.
/// 3. Otherwise: split on the delimiter into a plain list, dropping empty
///    tokens.
///
/// The differing empty-token policy between rules 2 and 3 is deliberate:
/// records need positional alignment, lists do not.
pub fn parse_line(text: &str, schema: &LineSchema) -> LineValue {
    if let Some(key_delimiter) = &schema.key_delimiter {
        return match text.find(key_delimiter.as_str()) {
            Some(at) if at > 0 => {
                let key = text[..at].trim().to_string();
                let rest = &text[at + key_delimiter.len()..];
                LineValue::Keyed {
                    key,
                    value: split_dropping_empties(rest, &schema.delimiter),
                }
            }
            _ => LineValue::Text(text.to_string()),
        };
    }

    if !schema.keys.is_empty() {
        let tokens: Vec<&str> = text
            .split(schema.delimiter.as_str())
            .map(str::trim)
            .collect();
        let record: BTreeMap<String, String> = schema
            .keys
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let value = tokens.get(i).copied().unwrap_or_default();
                (key.clone(), value.to_string())
            })
            .collect();
        return LineValue::Record(record);
    }

    LineValue::List(split_dropping_empties(text, &schema.delimiter))
}

fn split_dropping_empties(text: &str, delimiter: &str) -> Vec<String> {
    text.split(delimiter)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
