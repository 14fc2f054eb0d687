use std::io;

use cipherkit::{transform, CipherKey, VigenereKey};
use clap::Args;
use tracing::{error, info};

use crate::commands::{read_text, ModeArg};

/// Arguments for the vigenere command.
#[derive(Args, Clone)]
pub struct VigenereArgs {
    /// Keyword made of letters only; case is ignored
    #[arg(short, long)]
    pub key:  String,
    /// Operation to perform
    #[arg(short, long, value_enum, default_value_t = ModeArg::Encrypt)]
    pub mode: ModeArg,
    /// Text to transform; read from stdin when omitted
    #[arg(short, long)]
    pub text: Option<String>,
}

/// Run the Vigenere cipher over the provided text.
///
/// The keyword is validated by the engine: it must be non-empty and
/// contain only letters. The transformed text is printed to stdout.
///
/// # Arguments
/// * `args` - The parsed command-line arguments for vigenere.
///
/// # Returns
/// Returns `Ok(())` on success, or an `io::Error` on failure.
pub fn run(args: VigenereArgs) -> io::Result<()> {
    let key = VigenereKey::new(&args.key).map_err(|e| {
        error!("Rejected Vigenere key '{}': {}", args.key, e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let text = read_text(args.text)?;
    info!(key_length = key.as_str().len(), mode = ?args.mode, "Running Vigenere cipher");

    let result = transform(&text, &CipherKey::Vigenere(key), args.mode.into());
    #[allow(clippy::print_stdout, reason = "CLI output")]
    {
        println!("{}", result);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test successful encryption.
    #[test]
    fn test_vigenere_encrypt_success() {
        let args = VigenereArgs {
            key:  "LEMON".to_string(),
            mode: ModeArg::Encrypt,
            text: Some("ATTACKATDAWN".to_string()),
        };

        let result = run(args);
        assert!(result.is_ok(), "Vigenere encrypt should succeed");
    }

    /// Test successful decryption.
    #[test]
    fn test_vigenere_decrypt_success() {
        let args = VigenereArgs {
            key:  "lemon".to_string(),
            mode: ModeArg::Decrypt,
            text: Some("LXFOPVEFRNHR".to_string()),
        };

        let result = run(args);
        assert!(result.is_ok(), "Vigenere decrypt should accept lowercase keys");
    }

    /// Test empty keyword rejection.
    #[test]
    fn test_vigenere_empty_key_rejected() {
        let args = VigenereArgs {
            key:  String::new(),
            mode: ModeArg::Encrypt,
            text: Some("ATTACK".to_string()),
        };

        let result = run(args);
        assert!(result.is_err(), "Empty Vigenere key should be rejected");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }

    /// Test non-alphabetic keyword rejection.
    #[test]
    fn test_vigenere_non_alphabetic_key_rejected() {
        let args = VigenereArgs {
            key:  "K3Y".to_string(),
            mode: ModeArg::Encrypt,
            text: Some("ATTACK".to_string()),
        };

        let result = run(args);
        assert!(result.is_err(), "Non-alphabetic Vigenere key should be rejected");
    }
}
