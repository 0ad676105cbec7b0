// src/analyzer.rs
//! Heuristic password strength scoring
//!
//! Scores 0 (very weak) through 4 (very strong) from length and
//! character-class composition. The rules are deliberately strict: under 8
//! characters nothing scores above Weak, and Strong or better requires every
//! character class to be present.

use serde::Serialize;

/// Characters counted toward the special-symbol class
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Approximate symbol-alphabet size used in the entropy estimate
const SPECIAL_CHARSET_SIZE: f64 = 30.0;

const STRENGTH_RATINGS: [&str; 5] = ["Very Weak", "Weak", "Moderate", "Strong", "Very Strong"];

/// Result of analyzing one candidate password
#[derive(Debug, Clone, Serialize)]
pub struct PasswordAnalysis {
    /// 0 (very weak) through 4 (very strong)
    pub strength: u8,
    pub rating: &'static str,
    /// Rough bits-of-entropy estimate, one decimal place
    pub entropy: f64,
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
    pub feedback: Vec<String>,
}

/// Analyze a candidate password and produce actionable feedback
pub fn analyze_password(password: &str) -> PasswordAnalysis {
    let length = password.chars().count();
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));

    let strength = score(length, has_lowercase, has_uppercase, has_digit, has_special);

    let mut feedback = Vec::new();
    if length < 8 {
        feedback.push("Password is too short (minimum 8 characters recommended)".to_string());
    }
    if !has_lowercase {
        feedback.push("Add lowercase letters".to_string());
    }
    if !has_uppercase {
        feedback.push("Add uppercase letters".to_string());
    }
    if !has_digit {
        feedback.push("Add numbers".to_string());
    }
    if !has_special {
        feedback.push("Add special characters".to_string());
    }
    if feedback.is_empty() && strength < 3 {
        feedback.push("Avoid common patterns and dictionary words".to_string());
    }
    if length >= 12 && has_lowercase && has_uppercase && has_digit && has_special {
        feedback.push("Good password complexity".to_string());
    }

    let mut charset_size = 0.0;
    if has_lowercase {
        charset_size += 26.0;
    }
    if has_uppercase {
        charset_size += 26.0;
    }
    if has_digit {
        charset_size += 10.0;
    }
    if has_special {
        charset_size += SPECIAL_CHARSET_SIZE;
    }
    let entropy = if charset_size > 0.0 {
        length as f64 * charset_size.log2()
    } else {
        0.0
    };

    PasswordAnalysis {
        strength,
        rating: STRENGTH_RATINGS[strength as usize],
        entropy: (entropy * 10.0).round() / 10.0,
        length,
        has_lowercase,
        has_uppercase,
        has_digit,
        has_special,
        feedback,
    }
}

fn score(
    length: usize,
    has_lowercase: bool,
    has_uppercase: bool,
    has_digit: bool,
    has_special: bool,
) -> u8 {
    // Hard caps for short passwords, regardless of composition.
    if length < 4 {
        return 0;
    }
    if length < 8 {
        return 1;
    }

    let classes = [has_lowercase, has_uppercase, has_digit, has_special]
        .iter()
        .filter(|&&present| present)
        .count();

    match classes {
        0 | 1 => 1,
        2 | 3 => 2,
        _ if length >= 12 => 4,
        _ => 3,
    }
}
