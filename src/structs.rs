use rand::Rng;

use crate::algos::caesar::{caesar_decrypt, caesar_encrypt, normalize_shift};
use crate::constants::ALPHABET_LEN;
use crate::traits::{Decryptor, Encryptor};

/// A Caesar key, always held in `0..26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaesarKey {
    shift: u8,
}

impl CaesarKey {
    pub fn new(amount: i64) -> Self {
        CaesarKey {
            shift: normalize_shift(amount),
        }
    }

    /// Draws a key that actually changes the text (never 0).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        CaesarKey {
            shift: rng.gen_range(1..ALPHABET_LEN as u8),
        }
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }

    /// The key that undoes this one when applied in the same direction.
    pub fn inverse(&self) -> Self {
        CaesarKey::new(ALPHABET_LEN as i64 - self.shift as i64)
    }
}

impl Encryptor for CaesarKey {
    fn encrypt(&self, message: &str) -> String {
        caesar_encrypt(message, self.shift as i64)
    }
}

impl Decryptor for CaesarKey {
    fn decrypt(&self, message: &str) -> String {
        caesar_decrypt(message, self.shift as i64)
    }
}
