// tests/analyzer_tests.rs
use cipher_toolkit::analyze_password;

#[test]
fn test_very_short_passwords_are_very_weak() {
    for pw in ["", "abc", "A1!"] {
        let analysis = analyze_password(pw);
        assert_eq!(analysis.strength, 0, "{pw:?}");
        assert_eq!(analysis.rating, "Very Weak");
    }
}

#[test]
fn test_short_passwords_cap_at_weak() {
    // Even with every character class present, under 8 characters caps at 1.
    for pw in ["abcdef", "Ab1!xyz"] {
        let analysis = analyze_password(pw);
        assert_eq!(analysis.strength, 1, "{pw:?}");
        assert_eq!(analysis.rating, "Weak");
    }
}

#[test]
fn test_single_class_eight_chars_is_weak() {
    assert_eq!(analyze_password("abcdefgh").strength, 1);
    assert_eq!(analyze_password("12345678").strength, 1);
}

#[test]
fn test_missing_one_class_caps_at_moderate() {
    // Lower + upper + digit, no special character.
    let analysis = analyze_password("Welcome123");
    assert_eq!(analysis.strength, 2);
    assert_eq!(analysis.rating, "Moderate");
    assert!(analysis.feedback.iter().any(|f| f == "Add special characters"));
}

#[test]
fn test_all_classes_eight_chars_is_strong() {
    let analysis = analyze_password("Qwerty12!");
    assert_eq!(analysis.strength, 3);
    assert_eq!(analysis.rating, "Strong");
}

#[test]
fn test_all_classes_twelve_chars_is_very_strong() {
    let analysis = analyze_password("MyVeryStr0ng!Pass");
    assert_eq!(analysis.strength, 4);
    assert_eq!(analysis.rating, "Very Strong");
    assert!(analysis.feedback.iter().any(|f| f == "Good password complexity"));
}

#[test]
fn test_short_password_feedback() {
    let analysis = analyze_password("abc");
    assert!(analysis
        .feedback
        .iter()
        .any(|f| f.contains("too short")));
    assert!(analysis.feedback.iter().any(|f| f == "Add uppercase letters"));
    assert!(analysis.feedback.iter().any(|f| f == "Add numbers"));
    assert!(analysis.feedback.iter().any(|f| f == "Add special characters"));
    assert!(!analysis.feedback.iter().any(|f| f == "Add lowercase letters"));
}

#[test]
fn test_composition_flags() {
    let analysis = analyze_password("aB3!");
    assert!(analysis.has_lowercase);
    assert!(analysis.has_uppercase);
    assert!(analysis.has_digit);
    assert!(analysis.has_special);
    assert_eq!(analysis.length, 4);
}

#[test]
fn test_entropy_estimate() {
    // Three lowercase letters: 3 * log2(26), rounded to one decimal.
    let analysis = analyze_password("abc");
    assert_eq!(analysis.entropy, 14.1);

    assert_eq!(analyze_password("").entropy, 0.0);

    let richer = analyze_password("aB3!aB3!aB3!");
    assert!(richer.entropy > analysis.entropy);
}

#[test]
fn test_analysis_serializes_for_the_app_layer() {
    let value = serde_json::to_value(analyze_password("Qwerty12!")).unwrap();
    assert_eq!(value["strength"], 3);
    assert_eq!(value["rating"], "Strong");
    assert!(value["feedback"].is_array());
    assert!(value["entropy"].is_number());
}
