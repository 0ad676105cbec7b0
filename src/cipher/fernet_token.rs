// src/cipher/fernet_token.rs
//! Fernet authenticated token (AES-128-CBC with HMAC-SHA256)
//!
//! The derived 32-byte key, url-safe base64 encoded, is the Fernet key. The
//! token format carries its own version byte, timestamp, IV and HMAC, and the
//! HMAC covers all preceding fields; it is verified before any plaintext is
//! released. Raw wire bytes are the ASCII token itself. Token age is not
//! enforced on decrypt.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use fernet::Fernet;

use crate::error::{CoreError, Result};
use crate::kdf::DerivedKey;

use super::CipherStrategy;

pub struct FernetToken;

fn fernet_for(key: &DerivedKey) -> Fernet {
    // A url-safe base64 encoding of 32 bytes is a valid Fernet key by construction.
    Fernet::new(&URL_SAFE.encode(key.as_bytes())).expect("32-byte key is a valid Fernet key")
}

impl CipherStrategy for FernetToken {
    fn encrypt(&self, key: &DerivedKey, plaintext: &[u8]) -> Result<Vec<u8>> {
        Ok(fernet_for(key).encrypt(plaintext).into_bytes())
    }

    fn decrypt(&self, key: &DerivedKey, data: &[u8]) -> Result<Vec<u8>> {
        let token = std::str::from_utf8(data).map_err(|_| CoreError::Integrity)?;
        fernet_for(key).decrypt(token).map_err(|_| CoreError::Integrity)
    }
}
