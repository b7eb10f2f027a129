use rayon::prelude::*;

use crate::builders::SaltedHashBuilder;
use crate::{decrypt, encrypt, PasscryptError};

/// Encrypt every value with the same password, in parallel. Output order matches input.
pub fn encrypt_batch(values: &[&str], password: &str) -> Result<Vec<String>, PasscryptError> {
    values
        .par_iter()
        .map(|value| encrypt(value, password))
        .collect()
}

pub fn decrypt_batch(encoded: &[&str], password: &str) -> Result<Vec<String>, PasscryptError> {
    encoded
        .par_iter()
        .map(|value| decrypt(value, password))
        .collect()
}

/// Hash every secret under one configuration; each hash gets its own random salt.
pub fn generate_hash_batch(
    secrets: &[&str],
    known_salt: &str,
    params: &SaltedHashBuilder,
) -> Result<Vec<String>, PasscryptError> {
    secrets
        .par_iter()
        .map(|secret| params.generate(secret, known_salt))
        .collect()
}
