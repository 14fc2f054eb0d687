//! # Cipherkit
//!
//! A small, strict substitution cipher engine providing the Caesar and
//! Vigenere ciphers over the fixed 26-letter uppercase alphabet.
//!
//! ## Design Principles
//!
//! - **Modular Architecture**: The cipher trait is separated from the implementations, so cipher
//!   families can be switched or extended without changing the API.
//! - **Validate Once**: Keys are checked at construction (`CaesarKey`, `VigenereKey`); the
//!   transformations themselves are total functions over any input text.
//! - **Unified Error Handling**: Single `CipherError` enum for consistent error handling across all
//!   operations. Invalid keys are rejected synchronously, never silently normalized away.
//! - **Pass-Through Data**: Characters without a position in the A-Z alphabet (digits, punctuation,
//!   whitespace) are emitted unchanged and never consume a Vigenere key position.
//!
//! ## Behavior
//!
//! ASCII letters are normalized to uppercase before substitution and the
//! output stays uppercase. For every valid key,
//! `decrypt(encrypt(text, key), key)` reproduces `text` with its ASCII
//! letters uppercased.
//!
//! ## Usage
//!
//! ```rust
//! use cipherkit::{caesar_encrypt, vigenere_decrypt, vigenere_encrypt};
//!
//! assert_eq!(caesar_encrypt("Hello, World!", 1).unwrap(), "IFMMP, XPSME!");
//!
//! let ciphertext = vigenere_encrypt("ATTACKATDAWN", "LEMON").unwrap();
//! assert_eq!(ciphertext, "LXFOPVEFRNHR");
//! assert_eq!(vigenere_decrypt(&ciphertext, "LEMON").unwrap(), "ATTACKATDAWN");
//! ```

pub mod cipher;
pub mod cipher_trait;
pub mod error;
pub mod key;
pub mod selection;

use tracing::debug;

// Re-export cipher types for convenience
pub use cipher::{CaesarCipher, VigenereCipher, ALPHABET_LEN};
pub use cipher_trait::CipherAlgorithm;
pub use error::{CipherError, KeyError};
pub use key::{CaesarKey, VigenereKey};
pub use selection::{transform, CipherKey, Mode};

/// Convenience result type for cipherkit operations.
pub type Result<T> = std::result::Result<T, CipherError>;

/// Encrypts text with the Caesar cipher after validating the rotation.
///
/// # Errors
/// Returns `KeyError::InvalidRange` when `shift` is outside 1..=25.
pub fn caesar_encrypt(text: &str, shift: u8) -> Result<String> {
    let key = CaesarKey::new(shift)?;
    debug!(shift, length = text.len(), "Caesar encrypt");
    Ok(CaesarCipher::encrypt(text, &key))
}

/// Decrypts text with the Caesar cipher after validating the rotation.
///
/// # Errors
/// Returns `KeyError::InvalidRange` when `shift` is outside 1..=25.
pub fn caesar_decrypt(text: &str, shift: u8) -> Result<String> {
    let key = CaesarKey::new(shift)?;
    debug!(shift, length = text.len(), "Caesar decrypt");
    Ok(CaesarCipher::decrypt(text, &key))
}

/// Encrypts text with the Vigenere cipher after validating the keyword.
///
/// # Errors
/// Returns `KeyError::Empty` for an empty keyword and
/// `KeyError::NonAlphabetic` for keyword characters outside A-Z.
pub fn vigenere_encrypt(text: &str, keyword: &str) -> Result<String> {
    let key = VigenereKey::new(keyword)?;
    debug!(key_length = key.as_str().len(), length = text.len(), "Vigenere encrypt");
    Ok(VigenereCipher::encrypt(text, &key))
}

/// Decrypts text with the Vigenere cipher after validating the keyword.
///
/// # Errors
/// Returns `KeyError::Empty` for an empty keyword and
/// `KeyError::NonAlphabetic` for keyword characters outside A-Z.
pub fn vigenere_decrypt(text: &str, keyword: &str) -> Result<String> {
    let key = VigenereKey::new(keyword)?;
    debug!(key_length = key.as_str().len(), length = text.len(), "Vigenere decrypt");
    Ok(VigenereCipher::decrypt(text, &key))
}
