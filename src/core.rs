// src/core.rs
//! Top-level encrypt/decrypt operations, the surface the application layer calls
//!
//! Each call is pure and self-contained: parse the algorithm id once, derive
//! a key, run the selected strategy, encode for transport. No state survives
//! the call and the derived key is zeroized when it drops.

use serde::Serialize;
use tracing::{debug, warn};

use crate::cipher;
use crate::envelope;
use crate::error::Result;
use crate::kdf::derive_key;
use crate::registry::AlgorithmId;

/// Transport-safe output of one encryption call
#[derive(Debug, Clone, Serialize)]
pub struct EncodedEnvelope {
    /// Base64 of the algorithm's raw wire bytes (IV/nonce and ciphertext)
    pub ciphertext: String,
    /// Base64 of the key-derivation salt, not secret
    pub salt: String,
}

/// Encrypt text under a password with the named algorithm
///
/// A fresh salt and IV/nonce are drawn per call, so encrypting the same
/// (text, password) twice never yields the same envelope.
pub fn encrypt_text(text: &str, password: &str, algorithm: &str) -> Result<EncodedEnvelope> {
    let id: AlgorithmId = algorithm.parse()?;
    let (key, salt) = derive_key(password, None)?;

    let raw = cipher::strategy(id).encrypt(&key, text.as_bytes())?;
    debug!(algorithm = %id, plaintext_len = text.len(), "encrypted");

    Ok(EncodedEnvelope {
        ciphertext: envelope::encode(&raw),
        salt: envelope::encode(&salt),
    })
}

/// Decrypt an envelope back to text
///
/// Fails with a typed error on malformed base64, a wrong password, or
/// tampered ciphertext; unauthenticated or partially-decrypted data is never
/// returned.
pub fn decrypt_text(
    ciphertext_b64: &str,
    salt_b64: &str,
    password: &str,
    algorithm: &str,
) -> Result<String> {
    let id: AlgorithmId = algorithm.parse()?;
    let raw = envelope::decode(ciphertext_b64)?;
    let salt = envelope::decode(salt_b64)?;

    let (key, _) = derive_key(password, Some(&salt))?;
    let plaintext = cipher::strategy(id).decrypt(&key, &raw).inspect_err(|err| {
        warn!(algorithm = %id, %err, "decryption failed");
    })?;

    Ok(String::from_utf8(plaintext)?)
}
