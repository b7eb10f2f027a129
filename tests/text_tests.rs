//! tests/text_tests.rs

use passcrypt::consts::PRINTABLE_CHARS;
use passcrypt::{
    compute_sha256_hex, generate_printable_string, generate_random_string, PasscryptError,
};

#[test]
fn sha256_hex_vectors() {
    assert_eq!(
        compute_sha256_hex("Hello, World"),
        "03675ac53ff9cd1535ccc7dfcdfa2c458c5218371f418dc136f2d19ac1fbe8a5"
    );
    assert_eq!(
        compute_sha256_hex(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn random_string_uses_only_given_alphabet() {
    let s = generate_random_string(256, "ab").unwrap();
    assert_eq!(s.chars().count(), 256);
    assert!(s.chars().all(|c| c == 'a' || c == 'b'));

    let s = generate_random_string(10, "åß∂").unwrap();
    assert_eq!(s.chars().count(), 10);
    assert!(s.chars().all(|c| "åß∂".contains(c)));
}

#[test]
fn printable_string_defaults() {
    let s = generate_printable_string(64).unwrap();
    assert_eq!(s.len(), 64);
    assert!(s.chars().all(|c| PRINTABLE_CHARS.contains(c)));
    assert_ne!(s, generate_printable_string(64).unwrap());

    assert_eq!(generate_printable_string(0).unwrap(), "");
}

#[test]
fn empty_alphabet_is_rejected() {
    let err = generate_random_string(4, "").unwrap_err();
    assert!(matches!(err, PasscryptError::Configuration(_)));
}
