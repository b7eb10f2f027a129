//! src/hasher/generate.rs
//! Salted PBKDF2 hash generation

use crate::consts::{DEFAULT_HASH_SIZE, DEFAULT_PBKDF2_ITERATIONS, DEFAULT_RANDOM_SALT_LEN};
use crate::crypto::kdf::pbkdf2::derive_pbkdf2_sha256_new;
use crate::crypto::rng::random_salt;
use crate::error::PasscryptError;
use crate::hasher::blob::pack_blob;
use crate::hasher::params::validate_hash_params;
use crate::utils::concat_secret;
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::debug;

/// Produce a verifier for `secret`.
///
/// `derived = PBKDF2-HMAC-SHA256(secret ‖ known_salt, random_salt, iterations)`
/// truncated to `hash_size` bytes, and the result is
/// `base64(derived ‖ random_salt)`. A fresh `random_salt_len`-byte salt is drawn
/// from the OS CSPRNG on every call, so equal inputs give different outputs.
///
/// `known_salt` is an application-wide constant; the same value and the same
/// three parameters must be passed to [`verify_salted_hash`](crate::verify_salted_hash).
///
/// # Errors
///
/// - [`PasscryptError::Configuration`] - a parameter is outside the ranges in [`consts`](crate::consts)
/// - [`PasscryptError::Random`] - the OS random generator failed
pub fn generate_salted_hash(
    secret: &str,
    known_salt: &str,
    random_salt_len: usize,
    iterations: u32,
    hash_size: usize,
) -> Result<String, PasscryptError> {
    validate_hash_params(random_salt_len, iterations, hash_size)?;

    let salt = random_salt(random_salt_len)?;
    let input = concat_secret(secret, known_salt);
    let derived = derive_pbkdf2_sha256_new(
        input.expose_secret(),
        salt.expose_secret(),
        iterations,
        hash_size,
    )?;

    debug!(iterations, hash_size, random_salt_len, "generated salted hash");

    Ok(STANDARD.encode(pack_blob(
        derived.expose_secret(),
        salt.expose_secret(),
    )))
}

/// [`generate_salted_hash`] with the default salt length, iteration count and hash size.
///
/// ```
/// let hash = passcrypt::generate_salted_hash_default("Hello, World", "salt")?;
/// assert_eq!(hash.len(), 88);
/// assert!(passcrypt::verify_salted_hash_default(&hash, "Hello, World", "salt"));
/// # Ok::<(), passcrypt::PasscryptError>(())
/// ```
pub fn generate_salted_hash_default(
    secret: &str,
    known_salt: &str,
) -> Result<String, PasscryptError> {
    generate_salted_hash(
        secret,
        known_salt,
        DEFAULT_RANDOM_SALT_LEN,
        DEFAULT_PBKDF2_ITERATIONS,
        DEFAULT_HASH_SIZE,
    )
}
