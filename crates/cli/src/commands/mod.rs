use std::io::{self, Read as _};

use clap::{Parser, Subcommand, ValueEnum};

/// Command handlers for the Cipherkit CLI.
///
/// This module contains a submodule for each CLI command, each implementing
/// one cipher family of the engine.
/// Caesar command module.
mod caesar;
/// Vigenere command module.
mod vigenere;

/// The CLI for the Cipherkit substitution cipher engine.
///
/// This CLI provides one subcommand per cipher family. Each subcommand
/// takes a key and an operation mode, reads the text to transform from an
/// argument or stdin, and prints the result to stdout.
#[derive(Parser)]
#[command(name = "cipherkit")]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute.
    pub command: Commands,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (can be used multiple times: -v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Enumeration of all available CLI commands.
///
/// Each variant represents one cipher family of the engine.
#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt or decrypt text with the Caesar cipher.
    ///
    /// A single rotation amount in the range 1-25 is applied to every
    /// letter; everything else passes through unchanged.
    Caesar(caesar::CaesarArgs),
    /// Encrypt or decrypt text with the Vigenere cipher.
    ///
    /// A repeating alphabetic keyword selects a rotation per letter; the
    /// keyword only advances on letters.
    Vigenere(vigenere::VigenereArgs),
}

/// Operation mode shared by every cipher subcommand.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeArg {
    /// Turn plaintext into ciphertext
    #[default]
    Encrypt,
    /// Turn ciphertext back into plaintext
    Decrypt,
}

impl std::fmt::Display for ModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encrypt => write!(f, "encrypt"),
            Self::Decrypt => write!(f, "decrypt"),
        }
    }
}

impl From<ModeArg> for cipherkit::Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Encrypt => Self::Encrypt,
            ModeArg::Decrypt => Self::Decrypt,
        }
    }
}

/// Returns the text passed on the command line, or reads it from stdin
/// when the argument was omitted.
fn read_text(text: Option<String>) -> io::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        },
    }
}

/// Execute the specified CLI command.
///
/// This function dispatches to the appropriate command handler based on the
/// provided command variant, delegating the actual work to isolated modules.
///
/// # Arguments
/// * `command` - The parsed subcommand.
///
/// # Returns
/// Returns `Ok(())` on success, or an `io::Error` on failure.
pub fn run_command(command: Commands) -> io::Result<()> {
    match command {
        Commands::Caesar(args) => caesar::run(args),
        Commands::Vigenere(args) => vigenere::run(args),
    }
}
