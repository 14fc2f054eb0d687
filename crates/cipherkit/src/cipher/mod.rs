//! Substitution cipher implementations.
//!
//! This module provides the two classical cipher families:
//! - Caesar: one fixed rotation applied to every letter
//! - Vigenere: a repeating keyword, each letter selecting its own rotation
//!
//! Both operate over the fixed 26-letter uppercase alphabet. Characters
//! without a position in that alphabet are treated as pass-through data.

pub mod caesar;
pub mod vigenere;

pub use caesar::CaesarCipher;
pub use vigenere::VigenereCipher;

/// Number of letters in the cipher alphabet (A-Z).
pub const ALPHABET_LEN: u8 = 26;

/// Rotates a single character `shift` positions forward through the
/// uppercase alphabet. ASCII letters are uppercased first; every other
/// character is returned unchanged.
pub(crate) fn rotate(c: char, shift: u8) -> char {
    if c.is_ascii_alphabetic() {
        let position = c.to_ascii_uppercase() as u8 - b'A';
        char::from(b'A' + (position + shift) % ALPHABET_LEN)
    }
    else {
        c
    }
}

/// Additive inverse of a rotation, used to run a cipher backwards.
/// Stays in 0..=25 so the forward rotation helper never wraps below 'A'.
pub(crate) const fn inverse(shift: u8) -> u8 { (ALPHABET_LEN - shift) % ALPHABET_LEN }
