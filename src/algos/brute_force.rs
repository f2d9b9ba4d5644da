use crate::algos::caesar::caesar_decrypt;
use crate::constants::{ALPHABET_LEN, COMMON_WORDS};

/// One decryption attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub shift: u8,
    pub text: String,
}

/// Decrypts `ciphertext` with every key, shift 0 through 25 in order.
pub fn brute_force(ciphertext: &str) -> Vec<Candidate> {
    (0..ALPHABET_LEN as u8)
        .map(|shift| Candidate {
            shift,
            text: caesar_decrypt(ciphertext, shift as i64),
        })
        .collect()
}

/// Rough readability check: at least 30% of the words (and at least one)
/// must be common English words longer than two letters.
pub fn looks_like_english(text: &str) -> bool {
    let cleaned: String = text
        .to_ascii_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_whitespace())
        .collect();
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    let hits = words
        .iter()
        .filter(|word| word.len() > 2 && COMMON_WORDS.contains(*word))
        .count();

    hits >= (words.len() * 3 / 10).max(1)
}
