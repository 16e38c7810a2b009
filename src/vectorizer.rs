//! Text vectorizer for the bag-of-words spam classifier
//!
//! Mirrors the preprocessing the endpoint was trained with: punctuation is
//! treated as a separator, words are lowercased and hashed into vocabulary
//! slots with MD5 (slot `0` is reserved), and each document becomes a
//! vocabulary-length vector of slot counts.

use md5::{Digest, Md5};

/// Characters replaced with a separator before splitting into words.
pub const FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

/// Lowercases `text`, turns filtered characters into spaces and splits on spaces.
///
/// Only `' '` separates words; other whitespace such as a no-break space stays
/// inside the word, matching the tokenizer the model was trained with.
#[must_use]
pub fn text_to_word_sequence(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if FILTERS.contains(c) { ' ' } else { c })
        .collect();

    cleaned
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Maps a single word to its vocabulary slot, or `None` when no slot exists.
#[must_use]
pub fn word_index(word: &str, vocabulary_length: usize) -> Option<usize> {
    if vocabulary_length < 2 {
        return None;
    }
    let digest = Md5::digest(word.as_bytes());
    let hash = digest
        .iter()
        .fold(0u128, |acc, byte| (acc << 8) | u128::from(*byte));
    let buckets = (vocabulary_length - 1) as u128;

    usize::try_from(hash % buckets).ok().map(|slot| slot + 1)
}

/// Encodes `text` as the ordered sequence of vocabulary slots of its words.
#[must_use]
pub fn hashing_trick(text: &str, vocabulary_length: usize) -> Vec<usize> {
    text_to_word_sequence(text)
        .iter()
        .filter_map(|word| word_index(word, vocabulary_length))
        .collect()
}

#[must_use]
pub fn one_hot_encode<S: AsRef<str>>(documents: &[S], vocabulary_length: usize) -> Vec<Vec<usize>> {
    documents
        .iter()
        .map(|doc| hashing_trick(doc.as_ref(), vocabulary_length))
        .collect()
}

/// Turns each slot sequence into a count vector of exactly `vocabulary_length` entries.
///
/// Slots outside `[0, vocabulary_length)` are ignored.
#[must_use]
pub fn vectorize_sequences(sequences: &[Vec<usize>], vocabulary_length: usize) -> Vec<Vec<f64>> {
    sequences
        .iter()
        .map(|sequence| {
            let mut counts = vec![0.0; vocabulary_length];
            for &slot in sequence {
                if let Some(count) = counts.get_mut(slot) {
                    *count += 1.0;
                }
            }
            counts
        })
        .collect()
}

/// One-hot index encoding followed by count vectorization.
#[must_use]
pub fn vectorize<S: AsRef<str>>(documents: &[S], vocabulary_length: usize) -> Vec<Vec<f64>> {
    vectorize_sequences(
        &one_hot_encode(documents, vocabulary_length),
        vocabulary_length,
    )
}
