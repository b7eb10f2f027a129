//! src/hasher/verify.rs
//! Salted PBKDF2 hash verification — fail closed, constant-time compare

use crate::consts::{DEFAULT_HASH_SIZE, DEFAULT_PBKDF2_ITERATIONS, DEFAULT_RANDOM_SALT_LEN};
use crate::crypto::kdf::pbkdf2::derive_pbkdf2_sha256_new;
use crate::error::PasscryptError;
use crate::hasher::blob::split_blob;
use crate::hasher::params::validate_hash_params;
use crate::utils::{concat_secret, ct_eq_bytes};
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::debug;

/// Check `believed_secret` against a hash from [`generate_salted_hash`](crate::generate_salted_hash).
///
/// Returns `true` only when the recomputed bytes match. Every failure is
/// `false`: invalid base64, a blob whose length is not
/// `hash_size + random_salt_len`, out-of-range parameters and a wrong secret
/// are indistinguishable to the caller. The final comparison is constant-time.
pub fn verify_salted_hash(
    hash_b64: &str,
    believed_secret: &str,
    known_salt: &str,
    random_salt_len: usize,
    iterations: u32,
    hash_size: usize,
) -> bool {
    match try_verify(
        hash_b64,
        believed_secret,
        known_salt,
        random_salt_len,
        iterations,
        hash_size,
    ) {
        Ok(matched) => matched,
        Err(e) => {
            // Only the failure class is logged, never input bytes
            debug!(error = %e, "salted hash rejected before comparison");
            false
        }
    }
}

/// [`verify_salted_hash`] with the default salt length, iteration count and hash size.
pub fn verify_salted_hash_default(hash_b64: &str, believed_secret: &str, known_salt: &str) -> bool {
    verify_salted_hash(
        hash_b64,
        believed_secret,
        known_salt,
        DEFAULT_RANDOM_SALT_LEN,
        DEFAULT_PBKDF2_ITERATIONS,
        DEFAULT_HASH_SIZE,
    )
}

fn try_verify(
    hash_b64: &str,
    believed_secret: &str,
    known_salt: &str,
    random_salt_len: usize,
    iterations: u32,
    hash_size: usize,
) -> Result<bool, PasscryptError> {
    validate_hash_params(random_salt_len, iterations, hash_size)?;

    let blob = STANDARD.decode(hash_b64)?;
    let (stored, salt) = split_blob(&blob, hash_size, random_salt_len)?;

    let input = concat_secret(believed_secret, known_salt);
    let candidate = derive_pbkdf2_sha256_new(input.expose_secret(), salt, iterations, hash_size)?;

    Ok(ct_eq_bytes(candidate.expose_secret(), stored))
}
