//! JSON validation and pretty-printing.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::config::FormatOptions;
use crate::error::{TextFormat, ToolkitError};

/// Pretty-print a JSON document with two-space indentation.
///
/// Object keys keep their original order. Blank input yields an empty string.
///
/// # Examples
///
/// ```
/// use devtoolkit::format_json;
///
/// let pretty = format_json(r#"{"b":1,"a":[true,null]}"#).unwrap();
/// assert_eq!(pretty, "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}");
/// ```
pub fn format_json(raw: &str) -> Result<String, ToolkitError> {
    format_json_with(raw, FormatOptions::default())
}

/// Pretty-print a JSON document with explicit layout options.
pub fn format_json_with(raw: &str, options: FormatOptions) -> Result<String, ToolkitError> {
    if raw.trim().is_empty() {
        return Ok(String::new());
    }

    let value = parse_json(raw)?;
    to_pretty_string(&value, options)
}

/// Parse a JSON document, reporting the parser's message on failure.
pub fn parse_json(raw: &str) -> Result<Value, ToolkitError> {
    serde_json::from_str(raw).map_err(|e| ToolkitError::format(TextFormat::Json, e.to_string()))
}

/// Serialize any value as indented JSON.
pub(crate) fn to_pretty_string<T: Serialize + ?Sized>(
    value: &T,
    options: FormatOptions,
) -> Result<String, ToolkitError> {
    let indent = options.indent();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, formatter);

    value
        .serialize(&mut serializer)
        .map_err(|e| ToolkitError::format(TextFormat::Json, e.to_string()))?;

    String::from_utf8(out).map_err(|e| ToolkitError::format(TextFormat::Json, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_order_is_preserved() {
        let pretty = format_json(r#"{"zeta":1,"alpha":2,"mid":3}"#).unwrap();
        let zeta = pretty.find("zeta").unwrap();
        let alpha = pretty.find("alpha").unwrap();
        let mid = pretty.find("mid").unwrap();
        assert!(zeta < alpha && alpha < mid, "keys reordered: {}", pretty);
    }

    #[test]
    fn test_nested_indentation() {
        let pretty = format_json(r#"{"a":{"b":[1]}}"#).unwrap();
        assert_eq!(pretty, "{\n  \"a\": {\n    \"b\": [\n      1\n    ]\n  }\n}");
    }

    #[test]
    fn test_custom_indent() {
        let pretty = format_json_with("[1]", FormatOptions::with_indent(4)).unwrap();
        assert_eq!(pretty, "[\n    1\n]");
    }

    #[test]
    fn test_scalar_document() {
        assert_eq!(format_json("  42 ").unwrap(), "42");
        assert_eq!(format_json("\"text\"").unwrap(), "\"text\"");
    }

    #[test]
    fn test_error_reports_position() {
        let err = format_json("{\"a\": }").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid JSON:"), "{}", message);
        assert!(message.contains("line 1 column"), "{}", message);
    }

    #[test]
    fn test_trailing_garbage_is_rejected() {
        assert!(format_json("{} x").is_err());
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(format_json("").unwrap(), "");
        assert_eq!(format_json("   \n").unwrap(), "");
    }
}
