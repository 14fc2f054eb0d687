use std::io;

use cipherkit::{transform, CaesarKey, CipherKey};
use clap::Args;
use tracing::{error, info};

use crate::commands::{read_text, ModeArg};

/// Arguments for the caesar command.
#[derive(Args, Clone)]
pub struct CaesarArgs {
    /// Rotation amount in the range 1-25
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub key:  u8,
    /// Operation to perform
    #[arg(short, long, value_enum, default_value_t = ModeArg::Encrypt)]
    pub mode: ModeArg,
    /// Text to transform; read from stdin when omitted
    #[arg(short, long)]
    pub text: Option<String>,
}

/// Run the Caesar cipher over the provided text.
///
/// The key is validated by the engine (the parser already enforces the
/// 1-25 range for arguments, but text may also arrive via stdin paths
/// that bypass clap in tests). The transformed text is printed to stdout.
///
/// # Arguments
/// * `args` - The parsed command-line arguments for caesar.
///
/// # Returns
/// Returns `Ok(())` on success, or an `io::Error` on failure.
pub fn run(args: CaesarArgs) -> io::Result<()> {
    let key = CaesarKey::new(args.key).map_err(|e| {
        error!("Rejected Caesar key {}: {}", args.key, e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let text = read_text(args.text)?;
    info!(shift = args.key, mode = ?args.mode, "Running Caesar cipher");

    let result = transform(&text, &CipherKey::Caesar(key), args.mode.into());
    #[allow(clippy::print_stdout, reason = "CLI output")]
    {
        println!("{}", result);
    }
    Ok(())
}
