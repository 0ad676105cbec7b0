// src/consts.rs
//! Shared constants: security parameters and fixed wire-format lengths

/// PBKDF2-HMAC-SHA256 work factor. The cost is the point: a deliberate
/// slow-hash barrier against offline brute force. Fixed for all algorithms.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Salt length in bytes. Generated fresh per encryption, stored beside the
/// ciphertext so decryption can re-derive the same key.
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes, identical for every algorithm.
pub const KEY_LEN: usize = 32;

/// AES block size in bytes.
pub const AES_BLOCK_LEN: usize = 16;

/// CBC initialization vector length, prepended to the ciphertext.
pub const AES_IV_LEN: usize = 16;

/// ChaCha20-Poly1305 nonce length, prepended to the ciphertext.
pub const CHACHA_NONCE_LEN: usize = 12;

/// Poly1305 authentication tag length, appended by the AEAD.
pub const POLY1305_TAG_LEN: usize = 16;
