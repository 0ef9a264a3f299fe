// src/padding.rs
//! Length-as-value (PKCS-style) padding for the 8-byte block size. A
//! block-aligned input gets a full extra pad block, so every padded buffer
//! ends in a pad run of 1..=8 and stripping is always unambiguous.

use crate::error::CryptError;
use crate::tea::BLOCK_SIZE;

/// Number of pad bytes to append to a buffer of length `len`, always in 1..=8.
pub fn pad_len(len: usize) -> usize {
    BLOCK_SIZE - (len % BLOCK_SIZE)
}

/// Appends `pad_len` bytes, each holding the value `pad_len`.
pub fn apply_padding(buf: &mut Vec<u8>) {
    let pad = pad_len(buf.len());
    buf.extend(std::iter::repeat(pad as u8).take(pad));
}

/// Validates and removes the trailing pad run. The last byte names the run
/// length; every byte of the run must hold that same value. A trailing zero
/// or a value above 8 means corrupt data or a non-matching key.
pub fn strip_padding(buf: &mut Vec<u8>) -> Result<(), CryptError> {
    let pad = *buf.last().ok_or(CryptError::InvalidPadding)? as usize;
    if pad == 0 || pad > BLOCK_SIZE || pad > buf.len() {
        return Err(CryptError::InvalidPadding);
    }
    if buf[buf.len() - pad..].iter().any(|&b| b as usize != pad) {
        return Err(CryptError::InvalidPadding);
    }
    buf.truncate(buf.len() - pad);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_len_covers_every_residue() {
        assert_eq!(pad_len(0), 8);
        assert_eq!(pad_len(1), 7);
        assert_eq!(pad_len(7), 1);
        assert_eq!(pad_len(8), 8);
        assert_eq!(pad_len(9), 7);
        assert_eq!(pad_len(16), 8);
    }

    #[test]
    fn apply_then_strip_round_trips() {
        for len in 0..=24 {
            let original: Vec<u8> = (0..len as u8).collect();
            let mut buf = original.clone();
            apply_padding(&mut buf);
            assert_eq!(buf.len() % BLOCK_SIZE, 0);
            assert!(!buf.is_empty());
            strip_padding(&mut buf).unwrap();
            assert_eq!(buf, original);
        }
    }

    #[test]
    fn pad_bytes_hold_run_length() {
        let mut buf = vec![0xAA; 5];
        apply_padding(&mut buf);
        assert_eq!(buf, [0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 3, 3, 3]);
    }

    #[test]
    fn empty_buffer_is_invalid() {
        assert_eq!(strip_padding(&mut Vec::new()), Err(CryptError::InvalidPadding));
    }

    #[test]
    fn trailing_zero_is_invalid() {
        let mut buf = vec![1, 2, 3, 4, 5, 6, 7, 0];
        assert_eq!(strip_padding(&mut buf), Err(CryptError::InvalidPadding));
    }

    #[test]
    fn run_length_above_block_size_is_invalid() {
        let mut buf = vec![9; 8];
        assert_eq!(strip_padding(&mut buf), Err(CryptError::InvalidPadding));
    }

    #[test]
    fn non_uniform_run_is_invalid() {
        let mut buf = vec![1, 2, 3, 4, 5, 3, 2, 3];
        assert_eq!(strip_padding(&mut buf), Err(CryptError::InvalidPadding));
    }

    #[test]
    fn run_longer_than_buffer_is_invalid() {
        let mut buf = vec![5, 5, 5];
        assert_eq!(strip_padding(&mut buf), Err(CryptError::InvalidPadding));
    }
}
