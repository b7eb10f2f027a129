//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{HmacSha256, SecretBytes};
use crate::consts::{PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::error::PasscryptError;

use pbkdf2::pbkdf2;

/// Derive PBKDF2-HMAC-SHA256 into a caller-sized secure buffer.
///
/// `out` determines the derived length; it is overwritten in full.
#[inline]
pub fn derive_pbkdf2_sha256(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut SecretBytes,
) -> Result<(), PasscryptError> {
    if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&iterations) {
        return Err(PasscryptError::Configuration(format!(
            "PBKDF2 iterations must be in {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {iterations}"
        )));
    }

    pbkdf2::<HmacSha256>(password, salt, iterations, out.expose_secret_mut())
        .map_err(|e| PasscryptError::Configuration(format!("PBKDF2 failed: {e}")))?;
    Ok(())
}

/// Convenience: derive `len` bytes into a fresh secure buffer.
pub fn derive_pbkdf2_sha256_new(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    len: usize,
) -> Result<SecretBytes, PasscryptError> {
    let mut out = SecretBytes::new(vec![0u8; len]);
    derive_pbkdf2_sha256(password, salt, iterations, &mut out)?;
    Ok(out)
}
