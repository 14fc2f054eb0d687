use tracing::trace;

use crate::{
    cipher::ALPHABET_LEN,
    error::{CipherError, KeyError},
};

/// A validated Caesar rotation amount, always in 1..=25.
///
/// Design choice: keys are validated once at construction so the
/// transformations themselves stay total. A rotation of 0 (or any multiple
/// of 26) is rejected because it degenerates to the identity substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarKey(u8);

impl CaesarKey {
    /// Creates a key from a rotation amount in the interface range 1..=25.
    ///
    /// # Errors
    /// Returns `KeyError::InvalidRange` for 0 or anything above 25.
    pub fn new(shift: u8) -> Result<Self, CipherError> {
        if (1..ALPHABET_LEN).contains(&shift) {
            Ok(Self(shift))
        }
        else {
            Err(KeyError::InvalidRange {
                shift: i64::from(shift),
            }
            .into())
        }
    }

    /// Creates a key from an arbitrary integer by reducing it modulo 26.
    ///
    /// Accepts negative and oversized rotations alike; `27` and `-25` both
    /// reduce to `1`. Rotations congruent to 0 are still rejected since
    /// they would leave every letter in place.
    ///
    /// # Errors
    /// Returns `KeyError::InvalidRange` when `shift` is a multiple of 26.
    pub fn normalized(shift: i64) -> Result<Self, CipherError> {
        let reduced = shift.rem_euclid(i64::from(ALPHABET_LEN)) as u8;
        if reduced == 0 {
            Err(KeyError::InvalidRange {
                shift,
            }
            .into())
        }
        else {
            Ok(Self(reduced))
        }
    }

    /// The rotation amount.
    pub const fn shift(&self) -> u8 { self.0 }
}

/// A validated Vigenere key: one or more letters, stored uppercase.
///
/// The key letters are consumed cyclically, one per alphabetic input
/// character. Validation guarantees every stored byte is in `A..=Z`, so
/// position lookups never fail mid-transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey(String);

impl VigenereKey {
    /// Creates a key from a keyword, normalizing it to uppercase.
    ///
    /// # Errors
    /// Returns `KeyError::Empty` for an empty keyword and
    /// `KeyError::NonAlphabetic` for any character outside A-Z after
    /// ASCII uppercasing.
    pub fn new(keyword: &str) -> Result<Self, CipherError> {
        if keyword.is_empty() {
            return Err(KeyError::Empty.into());
        }
        let normalized = keyword.to_ascii_uppercase();
        if let Some(ch) = normalized.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(KeyError::NonAlphabetic {
                ch,
            }
            .into());
        }
        trace!(length = normalized.len(), "Vigenere key accepted");
        Ok(Self(normalized))
    }

    /// The normalized (uppercase) keyword.
    pub fn as_str(&self) -> &str { &self.0 }

    /// Alphabet positions (0-25) of the key letters, in keyword order.
    pub(crate) fn positions(&self) -> impl Iterator<Item = u8> + Clone + '_ {
        self.0.bytes().map(|b| b - b'A')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_key_accepts_interface_range() {
        for shift in 1..=25u8 {
            assert_eq!(CaesarKey::new(shift).unwrap().shift(), shift);
        }
    }

    #[test]
    fn test_caesar_key_rejects_out_of_range() {
        for shift in [0u8, 26, 27, 255] {
            let err = CaesarKey::new(shift).unwrap_err();
            assert_eq!(
                err,
                CipherError::Key(KeyError::InvalidRange {
                    shift: i64::from(shift),
                })
            );
        }
    }

    #[test]
    fn test_caesar_key_normalized_reduces_modulo_26() {
        assert_eq!(CaesarKey::normalized(27).unwrap().shift(), 1);
        assert_eq!(CaesarKey::normalized(-25).unwrap().shift(), 1);
        assert_eq!(CaesarKey::normalized(-1).unwrap().shift(), 25);
        assert_eq!(CaesarKey::normalized(77).unwrap().shift(), 25);
    }

    #[test]
    fn test_caesar_key_normalized_rejects_identity() {
        for shift in [0i64, 26, -26, 52] {
            assert!(CaesarKey::normalized(shift).is_err());
        }
    }

    #[test]
    fn test_vigenere_key_uppercases() {
        let key = VigenereKey::new("lemon").unwrap();
        assert_eq!(key.as_str(), "LEMON");
        assert_eq!(key.positions().collect::<Vec<_>>(), vec![
            11, 4, 12, 14, 13
        ]);
    }

    #[test]
    fn test_vigenere_key_rejects_empty() {
        assert_eq!(
            VigenereKey::new("").unwrap_err(),
            CipherError::Key(KeyError::Empty)
        );
    }

    #[test]
    fn test_vigenere_key_rejects_non_alphabetic() {
        assert_eq!(
            VigenereKey::new("K3Y").unwrap_err(),
            CipherError::Key(KeyError::NonAlphabetic {
                ch: '3',
            })
        );
        assert!(VigenereKey::new("KEY WORD").is_err());
        assert!(VigenereKey::new("clé").is_err());
    }
}
