//! XML validation and pretty-printing.
//!
//! The document is streamed through `quick-xml`: every event is checked
//! (balanced tags, attribute syntax, entity references) and re-emitted
//! through an indenting writer. Nothing is returned unless the whole
//! document is well-formed.

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::config::FormatOptions;
use crate::error::{TextFormat, ToolkitError};

/// Pretty-print an XML document with two-space indentation.
///
/// Whitespace-only text between elements is dropped; any other text is kept
/// byte for byte and stays on the same line as its element. Blank input
/// yields an empty string.
///
/// # Examples
///
/// ```
/// use devtoolkit::format_xml;
///
/// let pretty = format_xml("<a><b>hi</b></a>").unwrap();
/// assert_eq!(pretty, "<a>\n  <b>hi</b>\n</a>");
///
/// assert!(format_xml("<a><b></a>").is_err());
/// ```
pub fn format_xml(raw: &str) -> Result<String, ToolkitError> {
    format_xml_with(raw, FormatOptions::default())
}

/// Pretty-print an XML document with explicit layout options.
pub fn format_xml_with(raw: &str, options: FormatOptions) -> Result<String, ToolkitError> {
    if raw.trim().is_empty() {
        return Ok(String::new());
    }

    let mut reader = Reader::from_str(raw);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', options.indent_width);
    let mut open: Vec<String> = Vec::new();
    let mut saw_root = false;
    let mut root_closed = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| xml_error(format!("{} at position {}", e, reader.buffer_position())))?;

        match &event {
            Event::Start(start) => {
                check_single_root(&open, root_closed, start)?;
                check_attributes(start)?;
                open.push(element_name(start));
                saw_root = true;
            }
            Event::Empty(start) => {
                check_single_root(&open, root_closed, start)?;
                check_attributes(start)?;
                saw_root = true;
                root_closed |= open.is_empty();
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                match open.pop() {
                    Some(expected) if expected == name => {}
                    Some(expected) => {
                        return Err(xml_error(format!(
                            "expected </{}> but found </{}>",
                            expected, name
                        )))
                    }
                    None => return Err(xml_error(format!("unexpected closing tag </{}>", name))),
                }
                root_closed |= open.is_empty();
            }
            Event::Text(text) => {
                text.unescape()
                    .map_err(|e| xml_error(format!("{} at position {}", e, reader.buffer_position())))?;
                // Layout whitespace is replaced by the writer's indentation
                if text.iter().all(u8::is_ascii_whitespace) {
                    continue;
                }
                if open.is_empty() {
                    return Err(xml_error("text content outside of the root element"));
                }
            }
            Event::Eof => break,
            _ => {}
        }

        writer
            .write_event(event)
            .map_err(|e| xml_error(e.to_string()))?;
    }

    if let Some(unclosed) = open.pop() {
        return Err(xml_error(format!("unclosed tag <{}>", unclosed)));
    }
    if !saw_root {
        return Err(xml_error("document has no root element"));
    }

    let formatted = String::from_utf8(writer.into_inner()).map_err(|e| xml_error(e.to_string()))?;
    debug!("formatted xml document into {} bytes", formatted.len());
    Ok(formatted)
}

fn check_single_root(
    open: &[String],
    root_closed: bool,
    start: &BytesStart<'_>,
) -> Result<(), ToolkitError> {
    if open.is_empty() && root_closed {
        return Err(xml_error(format!(
            "multiple root elements: <{}> follows the closed root",
            element_name(start)
        )));
    }
    Ok(())
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

/// Parse every attribute and unescape its value.
fn check_attributes(start: &BytesStart<'_>) -> Result<(), ToolkitError> {
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| {
            xml_error(format!("bad attribute in <{}>: {}", element_name(start), e))
        })?;
        attribute.unescape_value().map_err(|e| {
            xml_error(format!("bad attribute value in <{}>: {}", element_name(start), e))
        })?;
    }
    Ok(())
}

fn xml_error(message: impl Into<String>) -> ToolkitError {
    ToolkitError::format(TextFormat::Xml, message)
}
