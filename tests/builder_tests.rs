//! tests/builder_tests.rs
//! SaltedHashBuilder — defaults, clamping, generate/verify

mod common;

use common::{TEST_ITERATIONS, TEST_KNOWN_SALT, TEST_SECRET};
use passcrypt::consts::{
    DEFAULT_HASH_SIZE, DEFAULT_PBKDF2_ITERATIONS, DEFAULT_RANDOM_SALT_LEN, MAX_HASH_SIZE,
    MAX_RANDOM_SALT_LEN, MIN_HASH_SIZE, MIN_RANDOM_SALT_LEN, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER,
};
use passcrypt::{verify_salted_hash, PasscryptError, SaltedHashBuilder};

#[test]
fn builder_defaults() {
    let builder = SaltedHashBuilder::new();
    assert_eq!(builder.iterations(), DEFAULT_PBKDF2_ITERATIONS);
    assert_eq!(builder.random_salt_len(), DEFAULT_RANDOM_SALT_LEN);
    assert_eq!(builder.hash_size(), DEFAULT_HASH_SIZE);
    assert_eq!(builder.encoded_len(), 88);
    assert_eq!(builder, SaltedHashBuilder::default());
}

#[test]
fn builder_setters_clamp() {
    let low = SaltedHashBuilder::new()
        .with_iterations(0)
        .with_random_salt_len(0)
        .with_hash_size(0);
    assert_eq!(low.iterations(), PBKDF2_MIN_ITER);
    assert_eq!(low.random_salt_len(), MIN_RANDOM_SALT_LEN);
    assert_eq!(low.hash_size(), MIN_HASH_SIZE);

    let high = SaltedHashBuilder::new()
        .with_iterations(u32::MAX)
        .with_random_salt_len(usize::MAX)
        .with_hash_size(1_000);
    assert_eq!(high.iterations(), PBKDF2_MAX_ITER);
    assert_eq!(high.random_salt_len(), MAX_RANDOM_SALT_LEN);
    assert_eq!(high.hash_size(), MAX_HASH_SIZE);
}

#[test]
fn builder_try_from_parts_rejects_instead_of_clamping() {
    let err = SaltedHashBuilder::try_from_parts(32, 0, 32).unwrap_err();
    assert!(matches!(err, PasscryptError::Configuration(_)));

    let builder = SaltedHashBuilder::try_from_parts(16, 10, 48).unwrap();
    assert_eq!(builder.random_salt_len(), 16);
    assert_eq!(builder.iterations(), 10);
    assert_eq!(builder.hash_size(), 48);
}

#[test]
fn builder_generate_matches_free_functions() {
    let builder = SaltedHashBuilder::new()
        .with_iterations(TEST_ITERATIONS)
        .with_random_salt_len(16)
        .with_hash_size(24);

    let hash = builder.generate(TEST_SECRET, TEST_KNOWN_SALT).unwrap();
    assert_eq!(hash.len(), builder.encoded_len());
    assert!(builder.verify(&hash, TEST_SECRET, TEST_KNOWN_SALT));
    assert!(verify_salted_hash(&hash, TEST_SECRET, TEST_KNOWN_SALT, 16, TEST_ITERATIONS, 24));
    assert!(!builder.verify(&hash, "nope", TEST_KNOWN_SALT));
}

#[test]
fn builder_config_must_match_between_calls() {
    let a = SaltedHashBuilder::new().with_iterations(TEST_ITERATIONS);
    let b = a.with_iterations(TEST_ITERATIONS + 1);

    let hash = a.generate(TEST_SECRET, TEST_KNOWN_SALT).unwrap();
    assert!(a.verify(&hash, TEST_SECRET, TEST_KNOWN_SALT));
    assert!(!b.verify(&hash, TEST_SECRET, TEST_KNOWN_SALT));
}

#[test]
fn builder_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SaltedHashBuilder>();
}
