//! Heuristic syllable estimation.
//!
//! Counts vowel groups (`a e i o u y`) and drops one for a trailing silent
//! `e`. There is no dictionary and no exception list: the estimate is
//! approximate and every readability score depends on it being reproducible,
//! so keep it that way.

const VOWELS: &[u8] = b"aeiouy";

/// Estimate the number of syllables in a word. Never returns less than 1.
///
/// Characters other than `a`–`z` (after lowercasing) are ignored, and any
/// word of three letters or fewer counts as one syllable.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<u8> = word
        .to_lowercase()
        .bytes()
        .filter(u8::is_ascii_lowercase)
        .collect();

    if letters.len() <= 3 {
        return 1;
    }

    let mut syllables = 0usize;
    let mut previous_was_vowel = false;

    // Count vowel groups
    for &b in &letters {
        let is_vowel = VOWELS.contains(&b);
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    // Silent e
    if letters.last() == Some(&b'e') && syllables > 1 {
        syllables -= 1;
    }

    syllables.max(1)
}
