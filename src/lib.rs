//! Caesar cipher cryptanalysis.
//!
//! Decrypts shift ciphers by brute force over all 26 keys or by matching the
//! ciphertext's dominant letter against English letter statistics, and
//! exports/plots observed versus expected letter frequencies.

pub mod algos;
pub mod chart;
pub mod config;
pub mod constants;
pub mod export;
pub mod structs;
pub mod traits;
pub mod utils;

pub use algos::brute_force::{brute_force, looks_like_english, Candidate};
pub use algos::caesar::{
    caesar_decrypt, caesar_encrypt, normalize_shift, shift_text, Direction,
};
pub use algos::frequency::{
    alphabetic_len, analyze_frequency, infer_shift_by_frequency, letter_counts,
    most_frequent_letter, FrequencyGuess, FrequencyTable,
};
pub use structs::CaesarKey;
pub use traits::{Decryptor, Encryptor};
