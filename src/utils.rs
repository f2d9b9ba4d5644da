use crate::constants::ALPHABET_LEN;

/// Zero-based position of an ASCII letter in its alphabet, ignoring case.
pub fn alphabet_position(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Uppercase letter at `position`, wrapping past 'Z'.
pub fn letter_at(position: u8) -> char {
    (b'A' + position % ALPHABET_LEN as u8) as char
}
