//! devtoolkit - stateless text transformation and validation engines
//!
//! This crate holds the algorithmic layer behind a set of developer tools:
//! every function takes plain input and returns a plain value or a
//! [`ToolkitError`]. Nothing keeps state between calls except the small,
//! explicit state holders ([`ColorState`], [`DigestDebouncer`], [`UuidHistory`]).
//!
//! # Features
//!
//! - **Codecs**: Base64 and URL-component encoding, JSON and XML beautifiers
//! - **Documents**: CPF check digits, generation and validation; CEP masking and lookup
//! - **Colors**: HEX ⇄ RGB with a derived HSL projection
//! - **Digests**: SHA-1, SHA-256, SHA-384 and SHA-512, published as one set
//! - **Regex**: exhaustive matching with capture groups and a highlight partition
//! - **Generators**: UUID v4, lorem ipsum, CPF and CEP test data
//! - **Tokens**: header and payload inspection of JWT-shaped tokens
//!
//! # Quick Start
//!
//! ```
//! use devtoolkit::{
//!     compute_digests, decode_token, format_json, match_pattern, parse_hex, validate_cpf,
//! };
//!
//! let pretty = format_json(r#"{"a":1}"#)?;
//! assert_eq!(pretty, "{\n  \"a\": 1\n}");
//!
//! assert!(validate_cpf("134.241.010-60"));
//!
//! let hsl = parse_hex("#FF0000")?.to_hsl();
//! assert_eq!(hsl.to_css(), "hsl(0, 100%, 50%)");
//!
//! let digests = compute_digests("abc");
//! assert_eq!(&digests.sha256[..8], "ba7816bf");
//!
//! let result = match_pattern("[a-z]+", "gi", "Hello World")?;
//! assert_eq!(result.len(), 2);
//!
//! assert!(decode_token("only.two").is_err());
//! # Ok::<(), devtoolkit::ToolkitError>(())
//! ```
//!
//! # Error Handling
//!
//! Engines never panic on user input. Functions return
//! `Result<T, ToolkitError>`, and [`run_transform`] folds errors into a
//! [`TransformResult`] for direct display.

// Re-export codec functions
pub use codec::{
    decode_base64, decode_url_component, encode_base64, encode_url_component, format_json,
    format_json_with, format_xml, format_xml_with,
};

// Re-export document functions
pub use document::{
    check_cpf, check_digit, cpf_status, format_cep, format_cep_partial, format_cpf, generate_cep,
    generate_cep_with_rng, generate_cpf, generate_cpf_with_rng, lookup_cep, validate_cpf,
    AddressRecord, CpfStyle, InMemoryDirectory, PostalDirectory,
};

// Re-export the remaining engines
pub use color::{parse_hex, parse_rgb, rgb_to_hsl, ColorState, ColorValue, Hsl, Rgb};
pub use digest::{compute_digests, DigestAlgorithm, DigestDebouncer, DigestSet};
pub use generate::{
    generate_lorem, generate_lorem_with_rng, generate_uuid, generate_uuid_with_rng, UuidHistory,
};
pub use pattern::{match_pattern, MatchRecord, MatchResult, Segment};
pub use reference::{command_groups, find_command, search_commands, CommandGroup, GitCommand};
pub use token::{decode_token, DecodedToken};

// Re-export public types
pub use error::{TextFormat, ToolkitError};
pub use types::{run_transform, Mode, TransformRequest, TransformResult};

// Module declarations
pub mod codec;
pub mod color;
pub mod config;
pub mod digest;
pub mod document;
pub mod error;
pub mod generate;
pub mod pattern;
pub mod reference;
pub mod token;
pub mod types;
