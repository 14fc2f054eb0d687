use crate::{
    cipher::{inverse, rotate},
    cipher_trait::CipherAlgorithm,
    key::CaesarKey,
};

/// Caesar cipher implementation.
/// Every letter is rotated by the same fixed amount; decryption rotates by
/// the additive inverse. Non-alphabetic characters pass through unchanged.
///
/// Design choice: decryption is expressed as a forward rotation by
/// `(26 - shift) mod 26` rather than a subtraction, which keeps every
/// intermediate value inside 0..=25 and avoids negative-remainder
/// handling entirely.
pub struct CaesarCipher;

impl CipherAlgorithm for CaesarCipher {
    type Key = CaesarKey;

    fn encrypt(plaintext: &str, key: &CaesarKey) -> String {
        plaintext.chars().map(|c| rotate(c, key.shift())).collect()
    }

    fn decrypt(ciphertext: &str, key: &CaesarKey) -> String {
        ciphertext
            .chars()
            .map(|c| rotate(c, inverse(key.shift())))
            .collect()
    }
}

impl crate::cipher_trait::private::Sealed for CaesarCipher {}
