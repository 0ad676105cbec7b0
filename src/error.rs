// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("password must not be empty")]
    EmptyPassword,

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("invalid padding: wrong password or corrupted ciphertext")]
    Padding,

    #[error("integrity check failed: wrong password or tampered ciphertext")]
    Integrity,

    #[error("malformed base64 input: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("decrypted data is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
