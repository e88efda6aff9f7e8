//! Base64 encoding and decoding of text.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use log::trace;

use crate::error::{TextFormat, ToolkitError};

/// Standard alphabet; encodes with padding, decodes with or without it.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encode the UTF-8 bytes of `raw` as standard, padded Base64.
///
/// # Examples
///
/// ```
/// use devtoolkit::encode_base64;
///
/// assert_eq!(encode_base64("hello"), "aGVsbG8=");
/// assert_eq!(encode_base64(""), "");
/// ```
pub fn encode_base64(raw: &str) -> String {
    FORGIVING.encode(raw.as_bytes())
}

/// Decode standard Base64 into text.
///
/// ASCII whitespace is ignored and padding is optional. The decoded bytes
/// must be valid UTF-8.
///
/// # Examples
///
/// ```
/// use devtoolkit::decode_base64;
///
/// assert_eq!(decode_base64("aGVsbG8=").unwrap(), "hello");
/// assert_eq!(decode_base64("aGVsbG8").unwrap(), "hello");
/// assert!(decode_base64("not base64!").is_err());
/// ```
pub fn decode_base64(raw: &str) -> Result<String, ToolkitError> {
    let bytes = decode_base64_bytes(raw)?;
    String::from_utf8(bytes)
        .map_err(|_| ToolkitError::format(TextFormat::Base64, "decoded bytes are not valid UTF-8 text"))
}

/// Decode standard Base64 into raw bytes, ignoring ASCII whitespace.
pub fn decode_base64_bytes(raw: &str) -> Result<Vec<u8>, ToolkitError> {
    let compact: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    trace!("decoding {} base64 characters", compact.len());

    FORGIVING
        .decode(compact.as_bytes())
        .map_err(|e| ToolkitError::format(TextFormat::Base64, e.to_string()))
}
