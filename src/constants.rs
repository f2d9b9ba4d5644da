use crate::algos::frequency::FrequencyTable;

/// Number of letters in the Latin alphabet the ciphers operate on.
pub const ALPHABET_LEN: usize = 26;

/// The letter English text uses most often. Frequency analysis assumes the
/// dominant ciphertext letter stands for it.
pub const ENGLISH_DOMINANT_LETTER: char = 'E';

/// Unigram frequencies of English text, in percent, indexed A to Z.
pub const ENGLISH_FREQUENCIES: FrequencyTable = FrequencyTable::from_percentages([
    8.12, 1.29, 2.78, 4.25, 12.02, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41, 6.75, 7.68,
    1.93, 0.10, 5.99, 6.33, 9.10, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07,
]);

/// Ciphertext the demo runs on when nothing else is configured.
pub const DEFAULT_CIPHERTEXT: &str = "WKLV LV D VHFUHW PHVVDJH";

/// Known ciphertexts (all shifted by 3) with a short description.
pub const SAMPLE_CIPHERTEXTS: [(&str, &str); 3] = [
    ("WKLV LV D VHFUHW PHVVDJH", "Secret message"),
    ("FDHVDU FLSKHU LV HDV WR FUDFN", "About Caesar cipher"),
    ("KHOOR ZRUOG", "Classic greeting"),
];

/// Frequent English words, used to spot readable brute-force candidates.
pub const COMMON_WORDS: &[&str] = &[
    "THE", "AND", "FOR", "ARE", "BUT", "NOT", "YOU", "ALL", "CAN", "HER", "WAS", "ONE", "OUR",
    "HAD", "BY", "WORD", "WHAT", "SAID", "EACH", "WHICH", "SHE", "DO", "HOW", "THEIR", "IF",
    "WILL", "UP", "OTHER", "ABOUT", "OUT", "MANY", "THEN", "THEM", "THESE", "SO", "SOME", "WOULD",
    "MAKE", "LIKE", "INTO", "HIM", "IS", "HAS", "TWO", "MORE", "VERY", "TO", "OF", "IN", "IT",
    "WITH", "BE", "THIS", "HAVE", "FROM",
];
