//! URL-component percent encoding.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{TextFormat, ToolkitError};

/// Bytes escaped when encoding a URL component.
///
/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `raw` for use as a single URL component.
///
/// # Examples
///
/// ```
/// use devtoolkit::encode_url_component;
///
/// assert_eq!(encode_url_component("a b&c"), "a%20b%26c");
/// assert_eq!(encode_url_component("café"), "caf%C3%A9");
/// ```
pub fn encode_url_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Decode a percent-encoded URL component.
///
/// Fails when a `%` is not followed by two hex digits or when the decoded
/// bytes are not UTF-8.
///
/// # Examples
///
/// ```
/// use devtoolkit::decode_url_component;
///
/// assert_eq!(decode_url_component("a%20b%26c").unwrap(), "a b&c");
/// assert!(decode_url_component("100%").is_err());
/// ```
pub fn decode_url_component(raw: &str) -> Result<String, ToolkitError> {
    check_escapes(raw)?;

    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ToolkitError::format(TextFormat::Percent, "escape sequences do not form valid UTF-8"))
}

/// Ensure every `%` starts a `%XX` escape.
fn check_escapes(raw: &str) -> Result<(), ToolkitError> {
    let bytes = raw.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !well_formed {
                return Err(ToolkitError::format(
                    TextFormat::Percent,
                    format!("malformed escape sequence at offset {}", i),
                ));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(())
}
