// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CryptError {
    #[error("invalid encrypted file size: {len} bytes (must be a non-empty multiple of 8)")]
    InvalidCiphertextSize { len: u64 },

    #[error("invalid padding (corrupt data or wrong key)")]
    InvalidPadding,
}
