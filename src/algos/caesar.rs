use crate::constants::ALPHABET_LEN;

/// Which way to rotate letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Reduces any shift amount, negative ones included, to its residue in `0..26`.
pub fn normalize_shift(amount: i64) -> u8 {
    amount.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// Rotates every ASCII letter of `text` by `amount` positions.
///
/// Encryption moves letters forward in the alphabet, decryption moves them
/// back. Each letter keeps its case; everything else is copied unchanged.
pub fn shift_text(text: &str, amount: i64, direction: Direction) -> String {
    let len = ALPHABET_LEN as u8;
    let shift = match direction {
        Direction::Encrypt => normalize_shift(amount),
        Direction::Decrypt => (len - normalize_shift(amount)) % len,
    };

    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
                let new_c = ((c as u8 - base + shift) % len) + base;
                new_c as char
            } else {
                c
            }
        })
        .collect()
}

pub fn caesar_encrypt(text: &str, amount: i64) -> String {
    shift_text(text, amount, Direction::Encrypt)
}

pub fn caesar_decrypt(text: &str, amount: i64) -> String {
    shift_text(text, amount, Direction::Decrypt)
}
