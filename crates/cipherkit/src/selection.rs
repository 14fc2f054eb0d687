use crate::{
    cipher::{CaesarCipher, VigenereCipher},
    cipher_trait::CipherAlgorithm,
    key::{CaesarKey, VigenereKey},
};

/// Direction of a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plaintext in, ciphertext out
    Encrypt,
    /// Ciphertext in, plaintext out
    Decrypt,
}

/// A cipher family together with its validated key.
///
/// Design choice: the cipher/mode selection is data resolved once per
/// invocation instead of ambient state. Holding the validated key inside
/// the variant means a `CipherKey` is always usable; there is no window
/// where a cipher is selected but its key is missing or unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKey {
    /// Caesar cipher with its rotation amount
    Caesar(CaesarKey),
    /// Vigenere cipher with its keyword
    Vigenere(VigenereKey),
}

/// Applies the selected cipher in the selected direction.
///
/// This is the single dispatch point for the four operations; both the
/// cipher family and the direction are ordinary values, so the same
/// selection can be replayed or inverted without touching shared state.
pub fn transform(text: &str, key: &CipherKey, mode: Mode) -> String {
    match (key, mode) {
        (CipherKey::Caesar(key), Mode::Encrypt) => CaesarCipher::encrypt(text, key),
        (CipherKey::Caesar(key), Mode::Decrypt) => CaesarCipher::decrypt(text, key),
        (CipherKey::Vigenere(key), Mode::Encrypt) => VigenereCipher::encrypt(text, key),
        (CipherKey::Vigenere(key), Mode::Decrypt) => VigenereCipher::decrypt(text, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_dispatches_all_four_operations() {
        let caesar = CipherKey::Caesar(CaesarKey::new(3).unwrap());
        assert_eq!(transform("HELLO", &caesar, Mode::Encrypt), "KHOOR");
        assert_eq!(transform("KHOOR", &caesar, Mode::Decrypt), "HELLO");

        let vigenere = CipherKey::Vigenere(VigenereKey::new("LEMON").unwrap());
        assert_eq!(
            transform("ATTACKATDAWN", &vigenere, Mode::Encrypt),
            "LXFOPVEFRNHR"
        );
        assert_eq!(
            transform("LXFOPVEFRNHR", &vigenere, Mode::Decrypt),
            "ATTACKATDAWN"
        );
    }

    #[test]
    fn test_selection_is_replayable() {
        let selection = CipherKey::Vigenere(VigenereKey::new("KEY").unwrap());
        let first = transform("SAME INPUT", &selection, Mode::Encrypt);
        let second = transform("SAME INPUT", &selection, Mode::Encrypt);
        assert_eq!(first, second);
    }
}
