//! Plain-text helpers: SHA-256 hex digests and random strings.

use crate::consts::PRINTABLE_CHARS;
use crate::error::PasscryptError;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the UTF-8 bytes of `s`.
///
/// Unsalted; for fingerprints and cache keys, not for passwords.
pub fn compute_sha256_hex(s: &str) -> String {
    hex::encode(Sha256::digest(s.as_bytes()))
}

/// `length` characters drawn uniformly from `valid_chars`.
///
/// Uses the thread-local CSPRNG (`rand::rng()`, reseeded from the OS).
///
/// # Errors
///
/// [`PasscryptError::Configuration`] if `valid_chars` is empty.
pub fn generate_random_string(length: usize, valid_chars: &str) -> Result<String, PasscryptError> {
    let chars: Vec<char> = valid_chars.chars().collect();
    if chars.is_empty() {
        return Err(PasscryptError::Configuration(
            "random string alphabet is empty".into(),
        ));
    }

    let mut rng = rand::rng();
    Ok((0..length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect())
}

/// [`generate_random_string`] over [`PRINTABLE_CHARS`].
pub fn generate_printable_string(length: usize) -> Result<String, PasscryptError> {
    generate_random_string(length, PRINTABLE_CHARS)
}
