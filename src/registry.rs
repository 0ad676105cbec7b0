// src/registry.rs
//! Algorithm identifiers and informational metadata
//!
//! The registry is purely descriptive. Parsing an [`AlgorithmId`] is the one
//! validation point for user-supplied algorithm strings; everything else here
//! feeds human-readable listings and has no bearing on the cipher path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Supported encryption algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmId {
    Aes,
    Fernet,
    ChaCha20,
}

impl AlgorithmId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::Aes => "aes",
            AlgorithmId::Fernet => "fernet",
            AlgorithmId::ChaCha20 => "chacha20",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aes" => Ok(AlgorithmId::Aes),
            "fernet" => Ok(AlgorithmId::Fernet),
            "chacha20" => Ok(AlgorithmId::ChaCha20),
            other => Err(CoreError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// One row of the algorithm listing
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub strength: &'static str,
    pub use_case: &'static str,
}

const ALGORITHMS: &[AlgorithmInfo] = &[
    AlgorithmInfo {
        id: "aes",
        name: "AES-256-CBC",
        description: "Advanced Encryption Standard with 256-bit key in Cipher Block Chaining mode",
        strength: "Very High",
        use_case: "General purpose encryption, industry standard",
    },
    AlgorithmInfo {
        id: "fernet",
        name: "Fernet (AES-128-CBC)",
        description: "Implementation of symmetric authenticated cryptography (AES-128-CBC with HMAC)",
        strength: "High",
        use_case: "Easy to use, authenticated encryption with high security",
    },
    AlgorithmInfo {
        id: "chacha20",
        name: "ChaCha20-Poly1305",
        description: "Stream cipher with built-in authentication using Poly1305",
        strength: "Very High",
        use_case: "Efficient encryption on devices without AES hardware acceleration",
    },
];

/// Ordered listing of every supported algorithm
pub fn list_algorithms() -> &'static [AlgorithmInfo] {
    ALGORITHMS
}

/// Educational record describing one algorithm in depth
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmExplanation {
    pub name: String,
    pub full_name: String,
    pub history: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub use_cases: Vec<String>,
    pub security_level: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Describe an algorithm for display
///
/// Unrecognized ids get a generic placeholder record rather than an error,
/// so listing surfaces never fail on stale or user-typed ids.
pub fn explain_algorithm(id: &str) -> AlgorithmExplanation {
    match id {
        "aes" => AlgorithmExplanation {
            name: "AES (Advanced Encryption Standard)".to_string(),
            full_name:
                "AES-256-CBC (Advanced Encryption Standard with 256-bit key in Cipher Block Chaining mode)"
                    .to_string(),
            history:
                "Developed by Belgian cryptographers Joan Daemen and Vincent Rijmen, selected by NIST in 2001."
                    .to_string(),
            description:
                "A symmetric block cipher that encrypts data in blocks of 128 bits, using key sizes of 128, 192, or 256 bits."
                    .to_string(),
            strengths: strings(&[
                "Mathematically proven to be highly secure",
                "Widely adopted and scrutinized",
                "Hardware acceleration on modern CPUs",
                "Resistant to known cryptographic attacks",
            ]),
            weaknesses: strings(&[
                "Implementation vulnerabilities can exist (side-channel attacks)",
                "Key management is critical",
                "CBC mode can be vulnerable if not implemented correctly",
            ]),
            use_cases: strings(&[
                "Government classified information",
                "Financial transactions",
                "Secure communications",
                "Data at rest encryption",
            ]),
            security_level: "Very High".to_string(),
        },
        "fernet" => AlgorithmExplanation {
            name: "Fernet".to_string(),
            full_name: "Fernet (AES-128-CBC with HMAC-SHA256)".to_string(),
            history:
                "Developed as part of the Python cryptography library to provide authenticated encryption."
                    .to_string(),
            description:
                "A symmetric authenticated encryption system that uses AES-128-CBC for encryption and HMAC-SHA256 for authentication."
                    .to_string(),
            strengths: strings(&[
                "Combines encryption and authentication",
                "Prevents tampering with ciphertext",
                "Easy to use correctly",
                "Includes timestamp for rotation/expiration",
            ]),
            weaknesses: strings(&[
                "Fixed format limits flexibility",
                "Slightly larger output size due to authentication tag",
                "Uses AES-128 (still secure, but less bits than AES-256)",
            ]),
            use_cases: strings(&[
                "Session tokens",
                "Password reset tokens",
                "General-purpose data encryption",
                "Applications where ease of use is important",
            ]),
            security_level: "High".to_string(),
        },
        "chacha20" => AlgorithmExplanation {
            name: "ChaCha20-Poly1305".to_string(),
            full_name: "ChaCha20-Poly1305 AEAD (Authenticated Encryption with Associated Data)".to_string(),
            history:
                "ChaCha20 was designed by Daniel J. Bernstein in 2008 as an improvement on his Salsa20 cipher."
                    .to_string(),
            description:
                "A stream cipher that combines the ChaCha20 algorithm with the Poly1305 authenticator for authenticated encryption."
                    .to_string(),
            strengths: strings(&[
                "Very fast in software (no hardware acceleration needed)",
                "Designed to resist timing attacks",
                "Strong resistance to cryptanalysis",
                "Authenticated encryption prevents tampering",
            ]),
            weaknesses: strings(&[
                "Less hardware support compared to AES",
                "Relatively newer, so less extensively analyzed than AES",
                "Nonce reuse is catastrophic (but true for many algorithms)",
            ]),
            use_cases: strings(&[
                "TLS connections (used in TLS 1.3)",
                "Mobile and IoT devices without AES hardware acceleration",
                "High-performance secure communications",
                "VPNs and secure tunneling protocols",
            ]),
            security_level: "Very High".to_string(),
        },
        other => AlgorithmExplanation {
            name: other.to_uppercase(),
            full_name: format!("{} Encryption Algorithm", other.to_uppercase()),
            history: String::new(),
            description: "Information not available for this algorithm.".to_string(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            use_cases: Vec::new(),
            security_level: "Unknown".to_string(),
        },
    }
}
