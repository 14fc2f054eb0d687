/// Core trait for the substitution cipher families provided by cipherkit.
/// This trait abstracts the encrypt/decrypt pair so callers can switch
/// between cipher families while keeping a consistent interface.
///
/// Design choice: the associated `Key` type ties each cipher family to its
/// validated key representation, so an implementation can never be handed
/// a key it did not ask for. The trait is sealed to prevent external
/// implementations that might not uphold the pass-through and key-cycling
/// rules the rest of the crate relies on.
pub trait CipherAlgorithm: private::Sealed {
    /// Validated key type consumed by this cipher family.
    type Key;

    /// Encrypts the given text using the provided key.
    ///
    /// ASCII letters are normalized to uppercase and substituted; every
    /// other character is passed through unchanged. Infallible: the key
    /// was validated at construction.
    fn encrypt(plaintext: &str, key: &Self::Key) -> String;

    /// Decrypts the given text using the provided key.
    ///
    /// Exact inverse of [`CipherAlgorithm::encrypt`] for the same key:
    /// decrypting an encryption of `text` yields `text` with its ASCII
    /// letters uppercased.
    fn decrypt(ciphertext: &str, key: &Self::Key) -> String;
}

// Sealing the trait to prevent external implementations
pub(crate) mod private {
    pub trait Sealed {}
}
