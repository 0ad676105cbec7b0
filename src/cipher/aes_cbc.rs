// src/cipher/aes_cbc.rs
//! AES-256-CBC with strict PKCS#7 padding
//!
//! Wire format: 16-byte IV followed by the CBC ciphertext. Padding always
//! adds at least one byte and at most a full block, so the ciphertext is
//! always a non-empty multiple of the block size. The padding check on
//! decrypt is the only defense against a wrong key or corrupted data: the
//! declared length must be in [1, 16] and every padding byte must match it.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

use crate::consts::{AES_BLOCK_LEN, AES_IV_LEN};
use crate::error::{CoreError, Result};
use crate::kdf::DerivedKey;

use super::CipherStrategy;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

pub struct AesCbc;

impl CipherStrategy for AesCbc {
    fn encrypt(&self, key: &DerivedKey, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut iv = [0u8; AES_IV_LEN];
        rand::rng().fill_bytes(&mut iv);

        let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), (&iv).into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

        let mut out = Vec::with_capacity(AES_IV_LEN + ciphertext.len());
        out.extend_from_slice(&iv);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    fn decrypt(&self, key: &DerivedKey, data: &[u8]) -> Result<Vec<u8>> {
        // At minimum an IV plus one ciphertext block, block-aligned.
        if data.len() < AES_IV_LEN + AES_BLOCK_LEN || (data.len() - AES_IV_LEN) % AES_BLOCK_LEN != 0
        {
            return Err(CoreError::Padding);
        }

        let (iv, ciphertext) = data.split_at(AES_IV_LEN);
        let iv: [u8; AES_IV_LEN] = iv.try_into().map_err(|_| CoreError::Padding)?;

        Aes256CbcDec::new(key.as_bytes().into(), (&iv).into())
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| CoreError::Padding)
    }
}
