// src/lib.rs
//! cipher-toolkit: password-based text encryption with supporting analysis tools
//!
//! Features:
//! - Multi-algorithm symmetric encryption (AES-256-CBC, Fernet, ChaCha20-Poly1305)
//! - PBKDF2-HMAC-SHA256 key derivation with zeroized key material
//! - Base64 transport envelopes
//! - Heuristic password strength analysis
//! - Streaming file checksums

pub mod analyzer;
pub mod cipher;
pub mod consts;
pub mod core;
pub mod envelope;
pub mod error;
pub mod integrity;
pub mod kdf;
pub mod registry;

// Re-export everything users need at the crate root
pub use analyzer::{analyze_password, PasswordAnalysis};
pub use error::{CoreError, Result};
pub use integrity::{
    checksum_bytes, checksum_file, checksum_reader, explain_checksum_algorithm,
    list_checksum_algorithms, verify_checksum, ChecksumAlgorithm, ChecksumExplanation,
    ChecksumInfo,
};
pub use kdf::{derive_key, DerivedKey};
pub use registry::{
    explain_algorithm, list_algorithms, AlgorithmExplanation, AlgorithmId, AlgorithmInfo,
};
pub use self::core::{decrypt_text, encrypt_text, EncodedEnvelope};
