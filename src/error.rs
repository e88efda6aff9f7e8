//! Error types for the transformation and validation engines.

use std::fmt;

use thiserror::Error;

/// Text formats handled by the codec and document engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// Standard Base64 text
    Base64,
    /// Percent-encoded URL component
    Percent,
    /// JSON document
    Json,
    /// XML document
    Xml,
    /// Brazilian postal code
    Cep,
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextFormat::Base64 => "Base64",
            TextFormat::Percent => "percent-encoding",
            TextFormat::Json => "JSON",
            TextFormat::Xml => "XML",
            TextFormat::Cep => "CEP",
        };
        f.write_str(name)
    }
}

/// Errors produced by any engine in the toolkit.
///
/// Every engine function is total: failures come back as one of these
/// variants and never as a panic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolkitError {
    /// The input is not well-formed in the given text format.
    #[error("Invalid {format}: {message}")]
    Format {
        /// Format the input was expected to be in
        format: TextFormat,
        /// Parser diagnostic
        message: String,
    },

    /// A CPF does not have the required number of digits.
    #[error("CPF must have {expected} digits, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// A CPF made of one repeated digit.
    #[error("CPF with all digits equal is not valid")]
    RepeatedDigits,

    /// The CPF check digits do not match the base digits.
    #[error("CPF check digits mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: String, found: String },

    /// A color string could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// An RGB channel is above 255.
    #[error("Color channel {channel} out of range: {value}")]
    ChannelOutOfRange { channel: char, value: u32 },

    /// The pattern or flags failed to compile.
    #[error("Invalid regular expression: {0}")]
    Compile(String),

    /// The token does not have exactly three dot-separated segments.
    #[error("Malformed token: expected 3 segments, found {segments}")]
    MalformedToken { segments: usize },

    /// Header or payload of the token could not be decoded.
    #[error("Invalid token")]
    InvalidToken,

    /// The postal directory has no record for the code.
    #[error("CEP not found: {0}")]
    LookupNotFound(String),

    /// The postal directory could not be reached.
    #[error("CEP lookup failed, check the connection: {0}")]
    LookupTransport(String),
}

impl ToolkitError {
    pub(crate) fn format(format: TextFormat, message: impl Into<String>) -> Self {
        ToolkitError::Format {
            format,
            message: message.into(),
        }
    }
}
