//! Random test-data generators.
//!
//! None of these are meant for security purposes: they only need to look
//! random to a person. Every generator has a `*_with_rng` form for
//! reproducible output.

pub mod lorem;
pub mod uuid;

// Re-export main functionality
pub use lorem::{generate_lorem, generate_lorem_with_rng, LOREM_VOCABULARY};
pub use self::uuid::{generate_uuid, generate_uuid_with_rng, UuidHistory};
