// src/tea.rs
//! TEA (Tiny Encryption Algorithm) block transform: 64-bit blocks, 128-bit
//! key, 32 Feistel-style rounds. Blocks and key words use an explicit
//! little-endian byte order so ciphertext files are portable across hosts.

use zeroize::Zeroize;

pub const BLOCK_SIZE: usize = 8;
pub const KEY_SIZE: usize = 16;

const DELTA: u32 = 0x9E37_79B9;
const ROUNDS: u32 = 32;

/// 128-bit key held as four 32-bit words, wiped on drop.
pub struct TeaKey {
    k: [u32; 4],
}

impl TeaKey {
    /// Builds the key from an arbitrary byte string: only the first 16 bytes
    /// are used, shorter input is zero-extended. Never fails.
    pub fn derive(secret: &[u8]) -> Self {
        let mut raw = [0u8; KEY_SIZE];
        let n = secret.len().min(KEY_SIZE);
        raw[..n].copy_from_slice(&secret[..n]);

        let mut k = [0u32; 4];
        for (i, chunk) in raw.chunks_exact(4).enumerate() {
            k[i] = u32::from_le_bytes(chunk.try_into().unwrap());
        }
        raw.zeroize();
        Self { k }
    }
}

impl Drop for TeaKey {
    fn drop(&mut self) {
        self.k.zeroize();
    }
}

fn load(block: &[u8; BLOCK_SIZE]) -> (u32, u32) {
    (
        u32::from_le_bytes(block[0..4].try_into().unwrap()),
        u32::from_le_bytes(block[4..8].try_into().unwrap()),
    )
}

fn store(block: &mut [u8; BLOCK_SIZE], v0: u32, v1: u32) {
    block[0..4].copy_from_slice(&v0.to_le_bytes());
    block[4..8].copy_from_slice(&v1.to_le_bytes());
}

/// Encrypts one block in place. Note the round structure: the v0 half mixes
/// in `sum` *before* the delta bump of that round, the v1 half after.
pub fn encrypt_block(block: &mut [u8; BLOCK_SIZE], key: &TeaKey) {
    let (mut v0, mut v1) = load(block);
    let k = &key.k;
    let mut sum = 0u32;

    for _ in 0..ROUNDS {
        v0 = v0.wrapping_add(
            ((v1 << 4) ^ (v1 >> 5)).wrapping_add(v1)
                ^ sum.wrapping_add(k[(sum & 3) as usize]),
        );
        sum = sum.wrapping_add(DELTA);
        v1 = v1.wrapping_add(
            ((v0 << 4) ^ (v0 >> 5)).wrapping_add(v0)
                ^ sum.wrapping_add(k[((sum >> 11) & 3) as usize]),
        );
    }
    store(block, v0, v1);
}

/// Decrypts one block in place: the exact inverse of [`encrypt_block`], run
/// with `sum` counting down from `DELTA * 32` and the two halves swapped.
pub fn decrypt_block(block: &mut [u8; BLOCK_SIZE], key: &TeaKey) {
    let (mut v0, mut v1) = load(block);
    let k = &key.k;
    let mut sum = DELTA.wrapping_mul(ROUNDS);

    for _ in 0..ROUNDS {
        v1 = v1.wrapping_sub(
            ((v0 << 4) ^ (v0 >> 5)).wrapping_add(v0)
                ^ sum.wrapping_add(k[((sum >> 11) & 3) as usize]),
        );
        sum = sum.wrapping_sub(DELTA);
        v0 = v0.wrapping_sub(
            ((v1 << 4) ^ (v1 >> 5)).wrapping_add(v1)
                ^ sum.wrapping_add(k[(sum & 3) as usize]),
        );
    }
    store(block, v0, v1);
}
