//! src/hasher/params.rs
//! Range checks shared by generation, verification and the builder

use crate::consts::{
    MAX_HASH_SIZE, MAX_RANDOM_SALT_LEN, MIN_HASH_SIZE, MIN_RANDOM_SALT_LEN, PBKDF2_MAX_ITER,
    PBKDF2_MIN_ITER,
};
use crate::error::PasscryptError;

/// Validate a salted-hash configuration.
///
/// # Errors
///
/// [`PasscryptError::Configuration`] naming the first out-of-range parameter.
pub fn validate_hash_params(
    random_salt_len: usize,
    iterations: u32,
    hash_size: usize,
) -> Result<(), PasscryptError> {
    if !(MIN_RANDOM_SALT_LEN..=MAX_RANDOM_SALT_LEN).contains(&random_salt_len) {
        return Err(PasscryptError::Configuration(format!(
            "random salt length must be in {MIN_RANDOM_SALT_LEN}..={MAX_RANDOM_SALT_LEN}, got {random_salt_len}"
        )));
    }
    if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&iterations) {
        return Err(PasscryptError::Configuration(format!(
            "PBKDF2 iterations must be in {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {iterations}"
        )));
    }
    if !(MIN_HASH_SIZE..=MAX_HASH_SIZE).contains(&hash_size) {
        return Err(PasscryptError::Configuration(format!(
            "hash size must be in {MIN_HASH_SIZE}..={MAX_HASH_SIZE}, got {hash_size}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_HASH_SIZE, DEFAULT_PBKDF2_ITERATIONS, DEFAULT_RANDOM_SALT_LEN};

    #[test]
    fn defaults_are_valid() {
        validate_hash_params(
            DEFAULT_RANDOM_SALT_LEN,
            DEFAULT_PBKDF2_ITERATIONS,
            DEFAULT_HASH_SIZE,
        )
        .unwrap();
    }

    #[test]
    fn each_bound_is_enforced() {
        assert!(validate_hash_params(7, 1, 32).is_err());
        assert!(validate_hash_params(65, 1, 32).is_err());
        assert!(validate_hash_params(32, 0, 32).is_err());
        assert!(validate_hash_params(32, 5_000_001, 32).is_err());
        assert!(validate_hash_params(32, 1, 15).is_err());
        assert!(validate_hash_params(32, 1, 65).is_err());

        validate_hash_params(8, 1, 16).unwrap();
        validate_hash_params(64, 5_000_000, 64).unwrap();
    }
}
