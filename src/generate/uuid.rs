//! Random (version 4) UUIDs and a bounded history of recent values.

use std::collections::VecDeque;

use log::trace;
use rand::Rng;
use uuid::{Builder, Uuid};

use crate::config::UUID_HISTORY_LIMIT;

/// Generate a lowercase, hyphenated v4 UUID using the thread-local RNG.
///
/// # Examples
///
/// ```
/// use devtoolkit::generate_uuid;
///
/// let id = generate_uuid();
/// assert_eq!(id.len(), 36);
/// assert_eq!(&id[14..15], "4");
/// ```
pub fn generate_uuid() -> String {
    generate_uuid_with_rng(&mut rand::thread_rng())
}

/// Generate a v4 UUID from the given RNG.
///
/// 122 random bits; the version nibble is `4` and the variant bits are `10`.
pub fn generate_uuid_with_rng<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.gen();
    let uuid: Uuid = Builder::from_random_bytes(bytes).into_uuid();
    uuid.hyphenated().to_string()
}

/// The most recent generated UUIDs, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UuidHistory {
    entries: VecDeque<String>,
}

impl UuidHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a UUID, record it and return it.
    pub fn generate(&mut self) -> String {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Generate a UUID from the given RNG, record it and return it.
    pub fn generate_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let id = generate_uuid_with_rng(rng);
        self.push(id.clone());
        id
    }

    /// Record a value, evicting the oldest beyond the history limit.
    pub fn push(&mut self, id: String) {
        self.entries.push_front(id);
        if self.entries.len() > UUID_HISTORY_LIMIT {
            self.entries.truncate(UUID_HISTORY_LIMIT);
            trace!("uuid history trimmed to {}", UUID_HISTORY_LIMIT);
        }
    }

    /// The newest value, if any.
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Values from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
