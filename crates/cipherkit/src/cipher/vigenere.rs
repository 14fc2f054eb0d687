use crate::{
    cipher::{inverse, rotate},
    cipher_trait::CipherAlgorithm,
    key::VigenereKey,
};

/// Vigenere cipher implementation.
/// The keyword is consumed cyclically, each key letter selecting the
/// rotation for one input letter. The key cycle advances only when an
/// alphabetic character is processed: interspersed digits, punctuation and
/// whitespace pass through without consuming a key position, so they never
/// shift the key alignment of the letters that follow.
pub struct VigenereCipher;

impl VigenereCipher {
    /// Shared transform for both directions. `invert` runs each key
    /// rotation backwards, turning encryption into decryption.
    fn transform(text: &str, key: &VigenereKey, invert: bool) -> String {
        let mut shifts = key.positions().cycle();
        text.chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    // A cycled iterator over a validated non-empty key never runs out.
                    let shift = shifts.next().unwrap_or(0);
                    rotate(c, if invert { inverse(shift) } else { shift })
                }
                else {
                    c
                }
            })
            .collect()
    }
}

impl CipherAlgorithm for VigenereCipher {
    type Key = VigenereKey;

    fn encrypt(plaintext: &str, key: &VigenereKey) -> String { Self::transform(plaintext, key, false) }

    fn decrypt(ciphertext: &str, key: &VigenereKey) -> String { Self::transform(ciphertext, key, true) }
}

impl crate::cipher_trait::private::Sealed for VigenereCipher {}
