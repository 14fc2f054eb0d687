/// Unified error type for all cipherkit operations.
/// This enum wraps every error that can occur while preparing or running a
/// cipher, providing a single error surface for callers. We use thiserror
/// for ergonomic error handling.
///
/// Design choice: a single top-level enum prevents error type proliferation
/// and keeps error handling consistent across the crate. The `KeyError`
/// sub-enum categorizes validation failures while keeping the top-level API
/// flat. Transformations themselves are total once a key has been
/// validated, so every error in this crate is a key validation error
/// surfaced synchronously at construction time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Errors related to cipher key validation
    #[error("Key error: {0}")]
    Key(#[from] KeyError),
}

/// Specific errors for cipher key validation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Caesar rotation outside the usable range, or congruent to zero
    /// after modular reduction
    #[error("Rotation {shift} is outside the valid range 1-25")]
    InvalidRange {
        /// The rejected rotation amount
        shift: i64,
    },

    /// Empty Vigenere key
    #[error("Key must contain at least one letter")]
    Empty,

    /// Vigenere key character with no position in the A-Z alphabet
    #[error("Key contains non-alphabetic character '{ch}'")]
    NonAlphabetic {
        /// The offending character, as it appeared in the input
        ch: char,
    },
}
