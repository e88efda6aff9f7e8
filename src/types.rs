//! Request and result values exchanged with the UI shell.

use serde::Serialize;

use crate::codec::{
    decode_base64, decode_url_component, encode_base64, encode_url_component, format_json,
    format_xml,
};
use crate::error::ToolkitError;

/// The text transform to apply to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    /// Text to Base64
    Base64Encode,
    /// Base64 to text
    Base64Decode,
    /// Text to percent-encoded URL component
    UrlEncode,
    /// Percent-encoded URL component to text
    UrlDecode,
    /// Validate and pretty-print JSON
    JsonFormat,
    /// Validate and pretty-print XML
    XmlFormat,
}

impl Mode {
    /// The inverse transform, if this mode has one.
    pub fn inverse(&self) -> Option<Mode> {
        match self {
            Mode::Base64Encode => Some(Mode::Base64Decode),
            Mode::Base64Decode => Some(Mode::Base64Encode),
            Mode::UrlEncode => Some(Mode::UrlDecode),
            Mode::UrlDecode => Some(Mode::UrlEncode),
            Mode::JsonFormat | Mode::XmlFormat => None,
        }
    }
}

/// Input text plus the transform to run on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest {
    /// Raw user input (may be empty)
    pub raw: String,
    /// Selected transform
    pub mode: Mode,
}

impl TransformRequest {
    /// Create a new request.
    pub fn new(raw: impl Into<String>, mode: Mode) -> Self {
        Self {
            raw: raw.into(),
            mode,
        }
    }
}

/// Outcome of a transform, ready for display.
///
/// When `ok` is true `value` holds the output and `error_message` is `None`;
/// otherwise `value` is empty and `error_message` explains the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResult {
    pub ok: bool,
    pub value: String,
    pub error_message: Option<String>,
}

impl TransformResult {
    /// A successful result.
    pub fn success(value: impl Into<String>) -> Self {
        Self {
            ok: true,
            value: value.into(),
            error_message: None,
        }
    }

    /// A failed result carrying the error's message.
    pub fn failure(error: &ToolkitError) -> Self {
        Self {
            ok: false,
            value: String::new(),
            error_message: Some(error.to_string()),
        }
    }
}

impl From<Result<String, ToolkitError>> for TransformResult {
    fn from(result: Result<String, ToolkitError>) -> Self {
        match result {
            Ok(value) => TransformResult::success(value),
            Err(error) => TransformResult::failure(&error),
        }
    }
}

/// Run a transform request. Never fails: errors come back inside the result.
///
/// # Examples
///
/// ```
/// use devtoolkit::{run_transform, Mode, TransformRequest};
///
/// let result = run_transform(&TransformRequest::new("hi", Mode::Base64Encode));
/// assert!(result.ok);
/// assert_eq!(result.value, "aGk=");
///
/// let result = run_transform(&TransformRequest::new("%%", Mode::UrlDecode));
/// assert!(!result.ok);
/// assert!(result.error_message.is_some());
/// ```
pub fn run_transform(request: &TransformRequest) -> TransformResult {
    if request.raw.is_empty() {
        return TransformResult::success("");
    }

    let raw = request.raw.as_str();
    let outcome = match request.mode {
        Mode::Base64Encode => Ok(encode_base64(raw)),
        Mode::Base64Decode => decode_base64(raw),
        Mode::UrlEncode => Ok(encode_url_component(raw)),
        Mode::UrlDecode => decode_url_component(raw),
        Mode::JsonFormat => format_json(raw),
        Mode::XmlFormat => format_xml(raw),
    };

    TransformResult::from(outcome)
}
