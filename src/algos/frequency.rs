//! Unigram letter-frequency analysis.
//!
//! Tables are indexed by alphabet position, so iteration order is always A to Z
//! and ties between equally frequent letters resolve to the earlier letter.

use tracing::debug;

use crate::algos::caesar::{shift_text, Direction};
use crate::constants::{ALPHABET_LEN, ENGLISH_DOMINANT_LETTER};
use crate::utils::{alphabet_position, letter_at};

/// Percentage of each letter A to Z in some body of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyTable {
    values: [f64; ALPHABET_LEN],
}

impl FrequencyTable {
    pub const fn from_percentages(values: [f64; ALPHABET_LEN]) -> Self {
        FrequencyTable { values }
    }

    pub const fn zeroed() -> Self {
        FrequencyTable {
            values: [0.0; ALPHABET_LEN],
        }
    }

    /// Frequency of `letter`, in either case. `None` for non-letters.
    pub fn get(&self, letter: char) -> Option<f64> {
        alphabet_position(letter).map(|pos| self.values[pos as usize])
    }

    pub fn values(&self) -> &[f64; ALPHABET_LEN] {
        &self.values
    }

    /// `(letter, percentage)` pairs in A to Z order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(pos, &value)| (letter_at(pos as u8), value))
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Letter with the highest frequency; the earliest letter wins ties, so an
    /// all-zero table yields 'A'.
    pub fn most_frequent(&self) -> char {
        let mut best = 0;
        for (pos, &value) in self.values.iter().enumerate().skip(1) {
            if value > self.values[best] {
                best = pos;
            }
        }
        letter_at(best as u8)
    }

    /// The `n` most frequent letters, highest first, ties in A to Z order.
    pub fn ranked(&self, n: usize) -> Vec<(char, f64)> {
        let mut entries: Vec<(char, f64)> = self.iter().collect();
        // stable sort keeps alphabetical order among equal values
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Result of guessing the key from the dominant ciphertext letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyGuess {
    pub plaintext: String,
    pub shift: u8,
    /// The ciphertext letter assumed to stand for 'E'.
    pub letter: char,
}

/// Occurrences of each letter A to Z, case-folded.
pub fn letter_counts(text: &str) -> [usize; ALPHABET_LEN] {
    let mut counts = [0usize; ALPHABET_LEN];
    for pos in text.chars().filter_map(alphabet_position) {
        counts[pos as usize] += 1;
    }
    counts
}

/// Number of ASCII letters in `text`.
pub fn alphabetic_len(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_alphabetic()).count()
}

/// Computes the percentage of each letter among all letters of `text`.
///
/// Non-letters count toward neither numerator nor denominator. Text with no
/// letters at all yields a table of zeros.
pub fn analyze_frequency(text: &str) -> FrequencyTable {
    let counts = letter_counts(text);
    let total: usize = counts.iter().sum();

    let mut values = [0.0; ALPHABET_LEN];
    if total > 0 {
        for (value, &count) in values.iter_mut().zip(counts.iter()) {
            *value = count as f64 / total as f64 * 100.0;
        }
    }

    FrequencyTable::from_percentages(values)
}

/// Most frequent letter of `text`, ties broken A to Z.
///
/// Text without any letters has an all-zero table, so this returns 'A'.
pub fn most_frequent_letter(text: &str) -> char {
    analyze_frequency(text).most_frequent()
}

/// Guesses the shift by assuming the most frequent ciphertext letter is 'E',
/// then decrypts with it.
///
/// This is a heuristic. Short or skewed samples regularly produce the wrong
/// key: "WKLV LV D VHFUHW PHVVDJH" is dominated by 'V' and yields 17, not 3.
pub fn infer_shift_by_frequency(ciphertext: &str) -> FrequencyGuess {
    let letter = most_frequent_letter(ciphertext);
    let len = ALPHABET_LEN as u8;
    let from = alphabet_position(letter).unwrap_or(0);
    let to = alphabet_position(ENGLISH_DOMINANT_LETTER).unwrap_or(0);
    let shift = (from + len - to) % len;

    debug!(%letter, shift, "inferred shift from dominant letter");

    FrequencyGuess {
        plaintext: shift_text(ciphertext, shift as i64, Direction::Decrypt),
        shift,
        letter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algos::caesar::caesar_encrypt;
    use crate::constants::ENGLISH_FREQUENCIES;

    const CIPHERTEXT: &str = "WKLV LV D VHFUHW PHVVDJH";

    #[test]
    fn counts_letters_case_insensitively() {
        let table = analyze_frequency("aA b!");
        assert!((table.get('A').unwrap() - 200.0 / 3.0).abs() < 1e-9);
        assert!((table.get('b').unwrap() - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(table.get('c'), Some(0.0));
        assert_eq!(table.get('!'), None);
    }

    #[test]
    fn frequencies_sum_to_one_hundred() {
        for text in [CIPHERTEXT, "a", "The quick brown fox, 1999!", "zzzzzzzq"] {
            let total = analyze_frequency(text).total();
            assert!((total - 100.0).abs() < 1e-9, "{text}: {total}");
        }
    }

    #[test]
    fn ciphertext_distribution_matches_counts() {
        let table = analyze_frequency(CIPHERTEXT);
        assert_eq!(table.get('V'), Some(25.0));
        assert_eq!(table.get('H'), Some(20.0));
        assert_eq!(table.get('W'), Some(10.0));
        assert_eq!(table.get('K'), Some(5.0));
        assert_eq!(table.get('A'), Some(0.0));
    }

    #[test]
    fn text_without_letters_is_all_zero() {
        for text in ["", "123 !?", "   "] {
            let table = analyze_frequency(text);
            assert!(table.iter().all(|(_, v)| v == 0.0));
            assert_eq!(most_frequent_letter(text), 'A');
        }
    }

    #[test]
    fn ties_resolve_alphabetically() {
        assert_eq!(most_frequent_letter("zyx"), 'X');
        assert_eq!(most_frequent_letter("bbaa"), 'A');
        assert_eq!(most_frequent_letter("qqm"), 'Q');
    }

    #[test]
    fn infers_shift_from_dominant_letter() {
        let guess = infer_shift_by_frequency(CIPHERTEXT);
        assert_eq!(guess.letter, 'V');
        assert_eq!(guess.shift, 17);
        assert_eq!(guess.plaintext, "FTUE UE M EQODQF YQEEMSQ");
    }

    #[test]
    fn infers_correct_shift_on_e_heavy_text() {
        let plaintext = "Meet me here between the trees, we need seventeen geese";
        let guess = infer_shift_by_frequency(&caesar_encrypt(plaintext, 7));
        assert_eq!(guess.letter, 'L');
        assert_eq!(guess.shift, 7);
        assert_eq!(guess.plaintext, plaintext);
    }

    #[test]
    fn empty_ciphertext_guesses_from_a() {
        let guess = infer_shift_by_frequency("");
        assert_eq!(guess.letter, 'A');
        assert_eq!(guess.shift, 22);
        assert_eq!(guess.plaintext, "");
    }

    #[test]
    fn ranks_letters_by_frequency() {
        let top = ENGLISH_FREQUENCIES.ranked(3);
        assert_eq!(top, vec![('E', 12.02), ('T', 9.10), ('A', 8.12)]);

        let top = analyze_frequency(CIPHERTEXT).ranked(4);
        let letters: Vec<char> = top.iter().map(|(c, _)| *c).collect();
        assert_eq!(letters, vec!['V', 'H', 'D', 'L']);
    }

    #[test]
    fn reference_table_is_dominated_by_e() {
        assert_eq!(ENGLISH_FREQUENCIES.most_frequent(), ENGLISH_DOMINANT_LETTER);
        assert_eq!(ENGLISH_FREQUENCIES.iter().count(), ALPHABET_LEN);
    }
}
