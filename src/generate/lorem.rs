//! Lorem ipsum placeholder text.

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{LOREM_MAX_PARAGRAPHS, LOREM_MIN_PARAGRAPHS, LOREM_SENTENCES, LOREM_WORDS};

/// Vocabulary sentences are drawn from.
pub const LOREM_VOCABULARY: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "reprehenderit", "in",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum",
];

/// Generate `paragraphs` paragraphs using the thread-local RNG.
///
/// # Examples
///
/// ```
/// use devtoolkit::generate_lorem;
///
/// let text = generate_lorem(2);
/// assert_eq!(text.split("\n\n").count(), 2);
/// ```
pub fn generate_lorem(paragraphs: usize) -> String {
    generate_lorem_with_rng(&mut rand::thread_rng(), paragraphs)
}

/// Generate lorem text from the given RNG.
///
/// The paragraph count is clamped to the supported range. Paragraphs are
/// separated by a blank line.
pub fn generate_lorem_with_rng<R: Rng + ?Sized>(rng: &mut R, paragraphs: usize) -> String {
    let count = paragraphs.clamp(LOREM_MIN_PARAGRAPHS, LOREM_MAX_PARAGRAPHS);
    if count != paragraphs {
        trace!("lorem paragraph count {} clamped to {}", paragraphs, count);
    }

    (0..count)
        .map(|_| paragraph(rng))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    let sentences = rng.gen_range(LOREM_SENTENCES);
    (0..sentences)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let length = rng.gen_range(LOREM_WORDS);
    let mut words: Vec<String> = (0..length)
        .filter_map(|_| LOREM_VOCABULARY.choose(rng).map(|w| w.to_string()))
        .collect();

    if let Some(first) = words.first_mut() {
        *first = capitalize(first);
    }

    format!("{}.", words.join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
