// tests/registry_tests.rs
use cipher_toolkit::{explain_algorithm, list_algorithms, AlgorithmId, CoreError};

#[test]
fn test_listing_is_ordered_and_complete() {
    let ids: Vec<&str> = list_algorithms().iter().map(|info| info.id).collect();
    assert_eq!(ids, vec!["aes", "fernet", "chacha20"]);
}

#[test]
fn test_listed_ids_parse_back() {
    for info in list_algorithms() {
        let id: AlgorithmId = info.id.parse().unwrap();
        assert_eq!(id.as_str(), info.id);
    }
}

#[test]
fn test_unknown_id_fails_parse_with_offending_id() {
    match "rot13".parse::<AlgorithmId>() {
        Err(CoreError::UnsupportedAlgorithm(id)) => assert_eq!(id, "rot13"),
        other => panic!("expected UnsupportedAlgorithm, got {other:?}"),
    }
}

#[test]
fn test_explain_known_algorithms() {
    let aes = explain_algorithm("aes");
    assert!(aes.name.contains("AES"));
    assert_eq!(aes.security_level, "Very High");
    assert!(!aes.strengths.is_empty());

    let fernet = explain_algorithm("fernet");
    assert!(fernet.full_name.contains("HMAC-SHA256"));

    let chacha = explain_algorithm("chacha20");
    assert!(chacha.name.contains("Poly1305"));
}

#[test]
fn test_explain_falls_back_for_unknown_id() {
    let unknown = explain_algorithm("rot13");
    assert_eq!(unknown.name, "ROT13");
    assert_eq!(unknown.security_level, "Unknown");
    assert!(unknown.strengths.is_empty());
}

#[test]
fn test_listing_serializes_for_the_app_layer() {
    let value = serde_json::to_value(list_algorithms()).unwrap();
    let first = &value[0];
    assert_eq!(first["id"], "aes");
    assert_eq!(first["name"], "AES-256-CBC");
    assert!(first["use_case"].is_string());
}
