//! Reversible text codecs and document beautifiers.
//!
//! This module contains the text-to-text transforms:
//! - Base64 encoding and decoding
//! - URL-component percent encoding and decoding
//! - JSON validation and pretty-printing
//! - XML validation and pretty-printing

pub mod base64;
pub mod json;
pub mod percent;
pub mod xml;

// Re-export main functionality
pub use self::base64::{decode_base64, decode_base64_bytes, encode_base64};
pub use json::{format_json, format_json_with, parse_json};
pub use percent::{decode_url_component, encode_url_component};
pub use xml::{format_xml, format_xml_with};
