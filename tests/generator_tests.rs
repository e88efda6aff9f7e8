//! Integration tests for the random generators.

use std::collections::HashSet;

use devtoolkit::config::UUID_HISTORY_LIMIT;
use devtoolkit::generate::LOREM_VOCABULARY;
use devtoolkit::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_uuid_format() {
    let id = generate_uuid();
    let bytes = id.as_bytes();

    assert_eq!(id.len(), 36);
    for (i, b) in bytes.iter().enumerate() {
        if [8, 13, 18, 23].contains(&i) {
            assert_eq!(*b, b'-', "expected hyphen at {} in {}", i, id);
        } else {
            assert!(b.is_ascii_hexdigit() && !b.is_ascii_uppercase(), "bad char at {} in {}", i, id);
        }
    }
    assert_eq!(bytes[14], b'4');
    assert!(b"89ab".contains(&bytes[19]));
}

#[test]
fn test_uuids_are_distinct() {
    let ids: HashSet<_> = (0..1000).map(|_| generate_uuid()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_seeded_uuid_is_reproducible() {
    let a = generate_uuid_with_rng(&mut StdRng::seed_from_u64(5));
    let b = generate_uuid_with_rng(&mut StdRng::seed_from_u64(5));
    assert_eq!(a, b);
}

#[test]
fn test_uuid_history_evicts_oldest() {
    let mut history = UuidHistory::new();
    let mut generated = Vec::new();
    for _ in 0..12 {
        generated.push(history.generate());
    }

    assert_eq!(history.len(), UUID_HISTORY_LIMIT);
    let kept: Vec<_> = history.iter().map(str::to_string).collect();
    let expected: Vec<_> = generated.iter().rev().take(UUID_HISTORY_LIMIT).cloned().collect();
    assert_eq!(kept, expected);
}

#[test]
fn test_one_paragraph_of_lorem() {
    for _ in 0..100 {
        let text = generate_lorem(1);
        assert_eq!(text.split('\n').filter(|block| !block.is_empty()).count(), 1);

        let periods = text.chars().filter(|&c| c == '.').count();
        assert!((4..=7).contains(&periods), "{} sentences", periods);
        assert!(text.starts_with(char::is_uppercase));
        assert!(text.ends_with('.'));
    }
}

#[test]
fn test_lorem_paragraph_counts() {
    let mut rng = StdRng::seed_from_u64(17);
    for requested in 1..=10 {
        let text = generate_lorem_with_rng(&mut rng, requested);
        let blocks: Vec<_> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), requested);
        assert!(blocks.iter().all(|b| !b.is_empty() && !b.contains('\n')));
    }
}

#[test]
fn test_lorem_uses_vocabulary_only() {
    let text = generate_lorem_with_rng(&mut StdRng::seed_from_u64(8), 3);
    for word in text.split_whitespace() {
        let word = word.trim_end_matches('.').to_lowercase();
        assert!(LOREM_VOCABULARY.contains(&word.as_str()), "unknown word {}", word);
    }
}
