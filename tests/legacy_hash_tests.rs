//! tests/legacy_hash_tests.rs
//! Legacy SHA-256 hash format and explicit scheme dispatch

mod common;

use base64::{engine::general_purpose::STANDARD, Engine};
use common::{TEST_ITERATIONS, TEST_KNOWN_SALT, TEST_SECRET};
use passcrypt::consts::{LEGACY_DIGEST_SIZE, LEGACY_SALT_LEN, PRINTABLE_CHARS};
use passcrypt::{
    generate_legacy_salted_hash, verify_legacy_salted_hash, HashScheme, PasscryptError,
    SaltedHashBuilder,
};

// SHA-256("abcdefgh" ‖ "Hello, World" ‖ "salt") ‖ "abcdefgh"
const LEGACY_VECTOR: &str = "D5A9TQ2tSITkhICwRzEUHr27avsFN4/o70BuE+HKglFhYmNkZWZnaA==";

#[test]
fn legacy_known_vector() {
    assert!(verify_legacy_salted_hash(LEGACY_VECTOR, "Hello, World", "salt"));
    assert!(!verify_legacy_salted_hash(LEGACY_VECTOR, "hello, world", "salt"));
    assert!(!verify_legacy_salted_hash(LEGACY_VECTOR, "Hello, World", "pepper"));
}

#[test]
fn legacy_roundtrip_and_layout() {
    let hash = generate_legacy_salted_hash(TEST_SECRET, TEST_KNOWN_SALT).unwrap();
    let raw = STANDARD.decode(&hash).unwrap();

    assert_eq!(raw.len(), LEGACY_DIGEST_SIZE + LEGACY_SALT_LEN);
    let salt = std::str::from_utf8(&raw[LEGACY_DIGEST_SIZE..]).unwrap();
    assert!(salt.chars().all(|c| PRINTABLE_CHARS.contains(c)));

    assert!(verify_legacy_salted_hash(&hash, TEST_SECRET, TEST_KNOWN_SALT));
    assert!(!verify_legacy_salted_hash(&hash, "other", TEST_KNOWN_SALT));
}

#[test]
fn legacy_malformed_input_fails_closed() {
    for input in ["", "not base64!", "AAAA", &LEGACY_VECTOR[..LEGACY_VECTOR.len() - 4]] {
        assert!(!verify_legacy_salted_hash(input, TEST_SECRET, TEST_KNOWN_SALT), "{input:?}");
    }
}

#[test]
fn schemes_are_not_interchangeable() {
    let params = SaltedHashBuilder::new().with_iterations(TEST_ITERATIONS);

    let pbkdf2 = HashScheme::Pbkdf2Sha256
        .generate(TEST_SECRET, TEST_KNOWN_SALT, &params)
        .unwrap();
    let legacy = HashScheme::LegacySha256
        .generate(TEST_SECRET, TEST_KNOWN_SALT, &params)
        .unwrap();

    assert!(HashScheme::Pbkdf2Sha256.verify(&pbkdf2, TEST_SECRET, TEST_KNOWN_SALT, &params));
    assert!(HashScheme::LegacySha256.verify(&legacy, TEST_SECRET, TEST_KNOWN_SALT, &params));

    assert!(!HashScheme::LegacySha256.verify(&pbkdf2, TEST_SECRET, TEST_KNOWN_SALT, &params));
    assert!(!HashScheme::Pbkdf2Sha256.verify(&legacy, TEST_SECRET, TEST_KNOWN_SALT, &params));
    assert!(!params.verify(LEGACY_VECTOR, "Hello, World", "salt"));
}

#[test]
fn scheme_tags_roundtrip() {
    for scheme in [HashScheme::Pbkdf2Sha256, HashScheme::LegacySha256] {
        assert_eq!(scheme.as_str().parse::<HashScheme>().unwrap(), scheme);
        assert_eq!(scheme.to_string(), scheme.as_str());
    }
    assert_eq!(HashScheme::default(), HashScheme::Pbkdf2Sha256);

    let err = "sha1".parse::<HashScheme>().unwrap_err();
    assert!(matches!(err, PasscryptError::Configuration(_)));
}

#[test]
fn scheme_serde_uses_tags() {
    let json = serde_json::to_string(&HashScheme::LegacySha256).unwrap();
    assert_eq!(json, "\"legacy-sha256\"");

    let parsed: HashScheme = serde_json::from_str("\"pbkdf2-sha256\"").unwrap();
    assert_eq!(parsed, HashScheme::Pbkdf2Sha256);
}
