// src/envelope.rs
//! Transport encoding for ciphertext and salt
//!
//! Standard base64 in both directions, independent of the algorithm that
//! produced the raw bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;

/// Encode raw cipher output for transport
pub fn encode(raw: &[u8]) -> String {
    STANDARD.encode(raw)
}

/// Recover raw bytes from transport text
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}
