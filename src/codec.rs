// src/codec.rs
//! Whole-buffer encryption/decryption: padding plus the block-by-block TEA
//! transform. Blocks are processed independently with the same key (ECB);
//! identical plaintext blocks therefore produce identical ciphertext blocks.
//! That pattern leakage is inherent to this file format and is documented,
//! not hidden behind chaining.

use crate::error::CryptError;
use crate::padding;
use crate::tea::{self, TeaKey, BLOCK_SIZE};

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Applies the block transform to every consecutive 8-byte block, in order.
/// The caller guarantees `buf.len()` is a multiple of the block size.
pub fn transform_blocks(buf: &mut [u8], key: &TeaKey, dir: Direction) {
    debug_assert_eq!(buf.len() % BLOCK_SIZE, 0);
    for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
        let block: &mut [u8; BLOCK_SIZE] = chunk.try_into().unwrap();
        match dir {
            Direction::Encrypt => tea::encrypt_block(block, key),
            Direction::Decrypt => tea::decrypt_block(block, key),
        }
    }
}

/// Pads the plaintext to a block boundary and encrypts it. Output length is
/// the input length rounded up to the next multiple of 8 (a full extra block
/// when the input is already aligned).
pub fn encrypt_buffer(mut data: Vec<u8>, key: &TeaKey) -> Vec<u8> {
    padding::apply_padding(&mut data);
    transform_blocks(&mut data, key, Direction::Encrypt);
    data
}

/// Decrypts a ciphertext buffer and strips its padding. The size check runs
/// before any cipher work.
pub fn decrypt_buffer(mut data: Vec<u8>, key: &TeaKey) -> Result<Vec<u8>, CryptError> {
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(CryptError::InvalidCiphertextSize { len: data.len() as u64 });
    }
    transform_blocks(&mut data, key, Direction::Decrypt);
    padding::strip_padding(&mut data)?;
    Ok(data)
}
