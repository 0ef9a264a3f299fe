// src/args.rs
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// TEA file encryption tool: 64-bit blocks, 128-bit key, unchained mode,
/// PKCS-style padding.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Encrypt or decrypt the input file
    #[arg(value_enum)]
    pub operation: Operation,

    /// Path to the input file
    pub input_file: PathBuf,

    /// Path to the output file
    pub output_file: PathBuf,

    /// Encryption/decryption key (up to 16 bytes; shorter keys are
    /// zero-extended, longer keys are truncated)
    pub key: String,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    Encrypt,
    Decrypt,
}
