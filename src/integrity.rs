// src/integrity.rs
//! File checksum computation and verification
//!
//! Input is streamed in 4 KiB chunks so large files never load fully into
//! memory. Digests are lowercase hex; verification compares
//! case-insensitively and always hands back the computed digest so callers
//! can display it.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Serialize;
use sha2::{Digest, Sha256, Sha384, Sha512};
use tracing::debug;

/// Read buffer size for streamed checksums
const CHUNK_LEN: usize = 4096;

/// Supported checksum algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "lowercase")]
pub enum ChecksumAlgorithm {
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Blake3,
}

impl ChecksumAlgorithm {
    /// Parse a user-supplied name, falling back to SHA-256 for anything unrecognized
    pub fn from_name(name: &str) -> Self {
        match name {
            "sha384" => ChecksumAlgorithm::Sha384,
            "sha512" => ChecksumAlgorithm::Sha512,
            "blake3" => ChecksumAlgorithm::Blake3,
            _ => ChecksumAlgorithm::Sha256,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha256 => "sha256",
            ChecksumAlgorithm::Sha384 => "sha384",
            ChecksumAlgorithm::Sha512 => "sha512",
            ChecksumAlgorithm::Blake3 => "blake3",
        }
    }
}

enum HashState {
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Blake3(blake3::Hasher),
}

impl HashState {
    fn new(algorithm: ChecksumAlgorithm) -> Self {
        match algorithm {
            ChecksumAlgorithm::Sha256 => HashState::Sha256(Sha256::new()),
            ChecksumAlgorithm::Sha384 => HashState::Sha384(Sha384::new()),
            ChecksumAlgorithm::Sha512 => HashState::Sha512(Sha512::new()),
            ChecksumAlgorithm::Blake3 => HashState::Blake3(blake3::Hasher::new()),
        }
    }

    fn update(&mut self, chunk: &[u8]) {
        match self {
            HashState::Sha256(h) => h.update(chunk),
            HashState::Sha384(h) => h.update(chunk),
            HashState::Sha512(h) => h.update(chunk),
            HashState::Blake3(h) => {
                h.update(chunk);
            }
        }
    }

    fn finalize_hex(self) -> String {
        match self {
            HashState::Sha256(h) => hex::encode(h.finalize()),
            HashState::Sha384(h) => hex::encode(h.finalize()),
            HashState::Sha512(h) => hex::encode(h.finalize()),
            HashState::Blake3(h) => h.finalize().to_hex().to_string(),
        }
    }
}

/// Compute a checksum over a reader, streaming in fixed-size chunks
pub fn checksum_reader<R: Read>(mut reader: R, algorithm: ChecksumAlgorithm) -> io::Result<String> {
    let mut state = HashState::new(algorithm);
    let mut buf = [0u8; CHUNK_LEN];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        state.update(&buf[..n]);
    }
    Ok(state.finalize_hex())
}

/// Compute a checksum over an in-memory buffer
pub fn checksum_bytes(data: &[u8], algorithm: ChecksumAlgorithm) -> String {
    let mut state = HashState::new(algorithm);
    state.update(data);
    state.finalize_hex()
}

/// Compute a checksum over a file on disk
pub fn checksum_file<P: AsRef<Path>>(path: P, algorithm: ChecksumAlgorithm) -> io::Result<String> {
    let digest = checksum_reader(File::open(path.as_ref())?, algorithm)?;
    debug!(path = %path.as_ref().display(), algorithm = algorithm.as_str(), "checksum computed");
    Ok(digest)
}

/// Verify a reader's checksum against an expected hex digest
///
/// Returns the verdict together with the computed digest.
pub fn verify_checksum<R: Read>(
    reader: R,
    expected: &str,
    algorithm: ChecksumAlgorithm,
) -> io::Result<(bool, String)> {
    let computed = checksum_reader(reader, algorithm)?;
    let is_valid = computed.eq_ignore_ascii_case(expected);
    Ok((is_valid, computed))
}

/// One row of the checksum-algorithm listing
#[derive(Debug, Clone, Serialize)]
pub struct ChecksumInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub use_case: &'static str,
    pub security_level: &'static str,
}

const CHECKSUM_ALGORITHMS: &[ChecksumInfo] = &[
    ChecksumInfo {
        id: "sha256",
        name: "SHA-256 (Secure Hash Algorithm 256-bit)",
        description: "Part of the SHA-2 family, producing a 256-bit hash. Currently considered secure.",
        use_case: "Digital signatures, file integrity, and general cryptographic use",
        security_level: "High - no known practical attacks",
    },
    ChecksumInfo {
        id: "sha384",
        name: "SHA-384 (Secure Hash Algorithm 384-bit)",
        description: "Truncated version of SHA-512 producing a 384-bit hash. Very secure.",
        use_case: "Applications requiring high security but slightly better performance than SHA-512",
        security_level: "Very High - no known practical attacks",
    },
    ChecksumInfo {
        id: "sha512",
        name: "SHA-512 (Secure Hash Algorithm 512-bit)",
        description: "Part of the SHA-2 family, producing a 512-bit hash. Very secure with longer digest.",
        use_case: "High-security applications and sensitive data verification",
        security_level: "Very High - no known practical attacks",
    },
    ChecksumInfo {
        id: "blake3",
        name: "BLAKE3",
        description: "Modern tree-structured hash producing a 256-bit digest, much faster than SHA-2 in software.",
        use_case: "Content addressing and integrity checks where throughput matters",
        security_level: "Very High - no known practical attacks",
    },
];

/// Ordered listing of every supported checksum algorithm
pub fn list_checksum_algorithms() -> &'static [ChecksumInfo] {
    CHECKSUM_ALGORITHMS
}

/// Educational record describing one checksum algorithm
#[derive(Debug, Clone, Serialize)]
pub struct ChecksumExplanation {
    pub name: String,
    pub description: String,
    pub use_case: String,
    pub security_level: String,
}

/// Describe a checksum algorithm for display, with a generic fallback for
/// unknown names
pub fn explain_checksum_algorithm(name: &str) -> ChecksumExplanation {
    match CHECKSUM_ALGORITHMS.iter().find(|info| info.id == name) {
        Some(info) => ChecksumExplanation {
            name: info.name.to_string(),
            description: info.description.to_string(),
            use_case: info.use_case.to_string(),
            security_level: info.security_level.to_string(),
        },
        None => ChecksumExplanation {
            name: name.to_uppercase(),
            description: "Information not available for this algorithm.".to_string(),
            use_case: String::new(),
            security_level: "Unknown".to_string(),
        },
    }
}
