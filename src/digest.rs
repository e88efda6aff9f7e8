//! Cryptographic digests of input text.
//!
//! All four digests are computed together and published as one
//! [`DigestSet`]; a partially filled set is never observable.

use std::time::Instant;

use log::{debug, trace};
use rayon::prelude::*;
use serde::Serialize;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::config::DIGEST_DEBOUNCE;

/// Supported digest algorithms, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    /// Every algorithm, in display order.
    pub const ALL: [DigestAlgorithm; 4] = [
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
    ];

    /// Human label, e.g. `SHA-256`.
    pub fn label(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "SHA-1",
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha384 => "SHA-384",
            DigestAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Length of the hex digest in characters.
    pub fn hex_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha1 => 40,
            DigestAlgorithm::Sha256 => 64,
            DigestAlgorithm::Sha384 => 96,
            DigestAlgorithm::Sha512 => 128,
        }
    }

    /// Lowercase hex digest of `data`.
    pub fn digest_hex(&self, data: &[u8]) -> String {
        match self {
            DigestAlgorithm::Sha1 => hash_hex::<Sha1>(data),
            DigestAlgorithm::Sha256 => hash_hex::<Sha256>(data),
            DigestAlgorithm::Sha384 => hash_hex::<Sha384>(data),
            DigestAlgorithm::Sha512 => hash_hex::<Sha512>(data),
        }
    }
}

fn hash_hex<D: Digest>(data: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Hex digests of one input snapshot, one per algorithm.
///
/// Either every entry is filled or every entry is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DigestSet {
    pub sha1: String,
    pub sha256: String,
    pub sha384: String,
    pub sha512: String,
}

impl DigestSet {
    /// The cleared set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the set is cleared.
    pub fn is_empty(&self) -> bool {
        self.sha1.is_empty()
    }

    /// Digest for one algorithm.
    pub fn get(&self, algorithm: DigestAlgorithm) -> &str {
        match algorithm {
            DigestAlgorithm::Sha1 => &self.sha1,
            DigestAlgorithm::Sha256 => &self.sha256,
            DigestAlgorithm::Sha384 => &self.sha384,
            DigestAlgorithm::Sha512 => &self.sha512,
        }
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (DigestAlgorithm, &str)> + '_ {
        DigestAlgorithm::ALL
            .into_iter()
            .map(move |algorithm| (algorithm, self.get(algorithm)))
    }
}

/// Compute every digest of `input`.
///
/// The algorithms run in parallel; the set is assembled only after all of
/// them finish. Empty input yields [`DigestSet::empty`], not the digests of
/// the empty string.
///
/// # Examples
///
/// ```
/// use devtoolkit::compute_digests;
///
/// let set = compute_digests("abc");
/// assert_eq!(
///     set.sha256,
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// assert!(compute_digests("").is_empty());
/// ```
pub fn compute_digests(input: &str) -> DigestSet {
    if input.is_empty() {
        return DigestSet::empty();
    }

    let data = input.as_bytes();
    let mut digests: Vec<String> = DigestAlgorithm::ALL
        .par_iter()
        .map(|algorithm| algorithm.digest_hex(data))
        .collect();

    trace!("computed {} digests over {} bytes", digests.len(), data.len());

    // collect() keeps the order of ALL
    let sha512 = digests.pop().unwrap_or_default();
    let sha384 = digests.pop().unwrap_or_default();
    let sha256 = digests.pop().unwrap_or_default();
    let sha1 = digests.pop().unwrap_or_default();

    DigestSet {
        sha1,
        sha256,
        sha384,
        sha512,
    }
}

#[derive(Debug, Clone)]
struct PendingInput {
    input: String,
    due: Instant,
}

/// Debounced digest recomputation driven by the caller's clock.
///
/// Every [`submit`](Self::submit) replaces the pending input and restarts the
/// settle timer, so superseded input is dropped without being hashed.
/// [`poll`](Self::poll) recomputes once the input has been stable for
/// [`DIGEST_DEBOUNCE`].
#[derive(Debug, Clone, Default)]
pub struct DigestDebouncer {
    pending: Option<PendingInput>,
    published: DigestSet,
}

impl DigestDebouncer {
    /// Create a debouncer with nothing published.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit made at `now`.
    pub fn submit(&mut self, input: impl Into<String>, now: Instant) {
        if self.pending.is_some() {
            trace!("superseding pending digest input");
        }
        self.pending = Some(PendingInput {
            input: input.into(),
            due: now + DIGEST_DEBOUNCE,
        });
    }

    /// When the pending input becomes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Whether an edit is waiting for its settle delay.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Publish a new set if the pending input has settled by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<&DigestSet> {
        let due = self.pending.as_ref().map(|p| p.due)?;
        if now < due {
            return None;
        }

        let pending = self.pending.take()?;
        self.published = compute_digests(&pending.input);
        debug!("published digest set (cleared: {})", self.published.is_empty());
        Some(&self.published)
    }

    /// The most recently published set.
    pub fn published(&self) -> &DigestSet {
        &self.published
    }
}
