// src/kdf.rs
//! Password-based key derivation
//!
//! PBKDF2-HMAC-SHA256 with a fixed iteration count, producing a 32-byte key
//! for every algorithm. There is no caching: the key is recomputed on every
//! call and zeroized as soon as it drops.

use pbkdf2::pbkdf2_hmac_array;
use rand::RngCore;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};
use crate::error::{CoreError, Result};

/// 256-bit symmetric key derived from a password. Zeroed on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_LEN]);

impl DerivedKey {
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

/// Generate a fresh random 16-byte salt
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

/// Derive a key from a password, generating a salt when none is supplied
///
/// Deterministic for identical (password, salt). A caller-provided salt is
/// used as given: the decrypt path feeds back whatever salt was persisted,
/// and a wrong salt simply derives a wrong key that fails downstream.
pub fn derive_key(password: &str, salt: Option<&[u8]>) -> Result<(DerivedKey, Vec<u8>)> {
    if password.is_empty() {
        return Err(CoreError::EmptyPassword);
    }

    let salt = match salt {
        Some(bytes) => bytes.to_vec(),
        None => generate_salt().to_vec(),
    };

    let key = pbkdf2_hmac_array::<Sha256, KEY_LEN>(password.as_bytes(), &salt, PBKDF2_ITERATIONS);
    Ok((DerivedKey::from_bytes(key), salt))
}
