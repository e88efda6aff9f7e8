//! Inspection of JWT-shaped tokens.
//!
//! Decoding only reads the header and payload. The signature is never
//! checked, so a decoded token says nothing about who issued it.

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::codec::base64::decode_base64_bytes;
use crate::codec::json::to_pretty_string;
use crate::config::FormatOptions;
use crate::error::ToolkitError;

/// Header and payload of a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
}

impl DecodedToken {
    /// Render `{"header": ..., "payload": ...}` with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, ToolkitError> {
        to_pretty_string(self, FormatOptions::default())
    }
}

/// Decode the header and payload of a three-segment token.
///
/// A wrong segment count is reported as [`ToolkitError::MalformedToken`].
/// Any Base64 or JSON failure in either segment is reported as the single
/// opaque [`ToolkitError::InvalidToken`].
///
/// # Examples
///
/// ```
/// use devtoolkit::{decode_token, ToolkitError};
///
/// let token = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjMifQ.sig";
/// let decoded = decode_token(token).unwrap();
/// assert_eq!(decoded.header["alg"], "HS256");
/// assert_eq!(decoded.payload["sub"], "123");
///
/// assert_eq!(
///     decode_token("a.b"),
///     Err(ToolkitError::MalformedToken { segments: 2 })
/// );
/// ```
pub fn decode_token(token: &str) -> Result<DecodedToken, ToolkitError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(ToolkitError::MalformedToken {
            segments: segments.len(),
        });
    }

    let header = decode_segment(segments[0]).ok_or(ToolkitError::InvalidToken)?;
    let payload = decode_segment(segments[1]).ok_or(ToolkitError::InvalidToken)?;

    debug!("decoded token header and payload (signature not verified)");
    Ok(DecodedToken { header, payload })
}

/// Base64 (URL-safe or standard, padding optional) then JSON.
fn decode_segment(segment: &str) -> Option<Value> {
    let standard: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = decode_base64_bytes(&standard).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::base64::encode_base64;

    fn segment(json: &str) -> String {
        encode_base64(json)
            .trim_end_matches('=')
            .replace('+', "-")
            .replace('/', "_")
    }

    #[test]
    fn test_decode_valid_token() {
        let token = format!(
            "{}.{}.signature",
            segment(r#"{"alg":"HS256","typ":"JWT"}"#),
            segment(r#"{"sub":"1234567890","name":"John Doe","iat":1516239022}"#)
        );

        let decoded = decode_token(&token).unwrap();
        assert_eq!(decoded.header["typ"], "JWT");
        assert_eq!(decoded.payload["iat"], 1516239022);
    }

    #[test]
    fn test_url_safe_alphabet() {
        // "?>?" encodes to "Pz4/" in the standard alphabet
        let token = format!("{}.{}.x", segment(r#"{"a":"?>?"}"#), segment("{}"));
        assert!(token.contains('_'));
        let decoded = decode_token(&token).unwrap();
        assert_eq!(decoded.header["a"], "?>?");
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(decode_token("abc"), Err(ToolkitError::MalformedToken { segments: 1 }));
        assert_eq!(
            decode_token("a.b.c.d"),
            Err(ToolkitError::MalformedToken { segments: 4 })
        );
    }

    #[test]
    fn test_failures_are_opaque() {
        let good = segment("{}");
        let not_json = segment("not json");

        assert_eq!(decode_token(&format!("{}.{}.s", not_json, good)), Err(ToolkitError::InvalidToken));
        assert_eq!(decode_token(&format!("{}.{}.s", good, not_json)), Err(ToolkitError::InvalidToken));
        assert_eq!(decode_token(&format!("{}.*.s", good)), Err(ToolkitError::InvalidToken));
    }

    #[test]
    fn test_pretty_output() {
        let token = format!("{}.{}.", segment(r#"{"alg":"none"}"#), segment(r#"{"n":1}"#));
        let pretty = decode_token(&token).unwrap().to_pretty_json().unwrap();
        assert_eq!(
            pretty,
            "{\n  \"header\": {\n    \"alg\": \"none\"\n  },\n  \"payload\": {\n    \"n\": 1\n  }\n}"
        );
    }
}
