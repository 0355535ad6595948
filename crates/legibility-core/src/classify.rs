//! Word classification: proper nouns, difficult words and complex words.
//!
//! The proper-noun test only looks at whether the original-case token starts
//! with an uppercase ASCII letter, so sentence-initial common words count as
//! proper nouns too. Keep it that way; every Gunning Fog and SMOG score
//! depends on it.

use crate::syllables::count_syllables;
use crate::text::Token;
use crate::word_lists::ReferenceWordList;

/// Whether an original-case token looks like a proper noun.
pub fn is_proper_noun(original: &str) -> bool {
    original.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Whether a word is missing from the reference list.
pub fn is_difficult(word: &str, list: &ReferenceWordList) -> bool {
    if word.chars().any(char::is_uppercase) {
        !list.contains(&word.to_lowercase())
    } else {
        !list.contains(word)
    }
}

/// Whether an original-case token has three or more syllables and is not a
/// proper noun.
pub fn is_complex(original: &str) -> bool {
    count_syllables(original) >= 3 && !is_proper_noun(original)
}

/// Count tokens absent from the reference list.
pub fn count_difficult(tokens: &[Token], list: &ReferenceWordList) -> usize {
    tokens.iter().filter(|t| is_difficult(&t.word, list)).count()
}

/// Count complex tokens.
pub fn count_complex(tokens: &[Token]) -> usize {
    tokens.iter().filter(|t| is_complex(&t.original)).count()
}
