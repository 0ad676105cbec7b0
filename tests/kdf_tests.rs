// tests/kdf_tests.rs
use cipher_toolkit::kdf::{derive_key, generate_salt};
use cipher_toolkit::CoreError;

#[test]
fn test_same_password_and_salt_derive_same_key() {
    let salt = generate_salt();
    let (key1, _) = derive_key("hunter2hunter2", Some(&salt)).unwrap();
    let (key2, _) = derive_key("hunter2hunter2", Some(&salt)).unwrap();
    assert_eq!(key1.as_bytes(), key2.as_bytes());
}

#[test]
fn test_different_salt_derives_different_key() {
    let (key1, salt1) = derive_key("hunter2hunter2", None).unwrap();
    let (key2, salt2) = derive_key("hunter2hunter2", None).unwrap();
    assert_ne!(salt1, salt2);
    assert_ne!(key1.as_bytes(), key2.as_bytes());
}

#[test]
fn test_different_password_derives_different_key() {
    let salt = generate_salt();
    let (key1, _) = derive_key("password one", Some(&salt)).unwrap();
    let (key2, _) = derive_key("password two", Some(&salt)).unwrap();
    assert_ne!(key1.as_bytes(), key2.as_bytes());
}

#[test]
fn test_generated_salt_is_sixteen_bytes_and_returned() {
    let (_, salt) = derive_key("pw123", None).unwrap();
    assert_eq!(salt.len(), 16);
}

#[test]
fn test_provided_salt_is_echoed_back() {
    let salt = [7u8; 16];
    let (_, returned) = derive_key("pw123", Some(&salt)).unwrap();
    assert_eq!(returned, salt);
}

#[test]
fn test_key_is_thirty_two_bytes() {
    let (key, _) = derive_key("pw123", None).unwrap();
    assert_eq!(key.as_bytes().len(), 32);
    assert_ne!(key.as_bytes(), &[0u8; 32]);
}

#[test]
fn test_empty_password_rejected() {
    assert!(matches!(derive_key("", None), Err(CoreError::EmptyPassword)));
    assert!(matches!(
        derive_key("", Some(&[0u8; 16])),
        Err(CoreError::EmptyPassword)
    ));
}
