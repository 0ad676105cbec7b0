// src/cipher/chacha20.rs
//! ChaCha20-Poly1305 AEAD
//!
//! Wire format: 12-byte nonce followed by ciphertext plus the 16-byte
//! Poly1305 tag. The tag is verified before any plaintext is released, so a
//! wrong password and a tampered payload are indistinguishable failures.

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Nonce};
use rand::RngCore;

use crate::consts::{CHACHA_NONCE_LEN, POLY1305_TAG_LEN};
use crate::error::{CoreError, Result};
use crate::kdf::DerivedKey;

use super::CipherStrategy;

pub struct ChaCha20;

fn aead_for(key: &DerivedKey) -> ChaCha20Poly1305 {
    ChaCha20Poly1305::new(key.as_bytes().into())
}

impl CipherStrategy for ChaCha20 {
    fn encrypt(&self, key: &DerivedKey, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut nonce = [0u8; CHACHA_NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce);

        let ciphertext = aead_for(key)
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_| CoreError::Integrity)?;

        let mut out = Vec::with_capacity(CHACHA_NONCE_LEN + ciphertext.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    fn decrypt(&self, key: &DerivedKey, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() < CHACHA_NONCE_LEN + POLY1305_TAG_LEN {
            return Err(CoreError::Integrity);
        }

        let (nonce, ciphertext) = data.split_at(CHACHA_NONCE_LEN);
        aead_for(key)
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CoreError::Integrity)
    }
}
