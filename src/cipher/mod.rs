// src/cipher/mod.rs
//! Cipher strategies, one per algorithm id
//!
//! Pure byte-level transforms over in-memory buffers: derived key in, raw
//! wire bytes out. The strategy is resolved exactly once, at the boundary
//! where the algorithm id is parsed; nothing deeper branches on it again.

mod aes_cbc;
mod chacha20;
mod fernet_token;

pub use aes_cbc::AesCbc;
pub use chacha20::ChaCha20;
pub use fernet_token::FernetToken;

use crate::error::Result;
use crate::kdf::DerivedKey;
use crate::registry::AlgorithmId;

/// Byte-level encryption strategy for one algorithm
pub trait CipherStrategy: Send + Sync {
    /// Encrypt plaintext into the algorithm's raw wire format
    fn encrypt(&self, key: &DerivedKey, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Recover plaintext from the algorithm's raw wire format
    fn decrypt(&self, key: &DerivedKey, data: &[u8]) -> Result<Vec<u8>>;
}

/// Resolve the strategy for an algorithm id
pub fn strategy(id: AlgorithmId) -> &'static dyn CipherStrategy {
    match id {
        AlgorithmId::Aes => &AesCbc,
        AlgorithmId::Fernet => &FernetToken,
        AlgorithmId::ChaCha20 => &ChaCha20,
    }
}
