// src/crypto/rng.rs
//! Secure randomness for per-call salts
//!
//! Every random byte in the crate comes from `OsRng`. `OsRng` holds no state,
//! so concurrent callers on different threads never share a generator.

use crate::aliases::SecretBytes;
use crate::error::PasscryptError;
use rand::{rngs::OsRng, TryRngCore};

/// Fill `dest` with bytes from the operating system CSPRNG.
#[inline]
pub fn fill_random(dest: &mut [u8]) -> Result<(), PasscryptError> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|e| PasscryptError::Random(format!("OS random generator unavailable: {e}")))
}

/// Generate `len` random salt bytes in a wiped-on-drop buffer.
pub fn random_salt(len: usize) -> Result<SecretBytes, PasscryptError> {
    let mut salt = SecretBytes::new(vec![0u8; len]);
    fill_random(salt.expose_secret_mut())?;
    Ok(salt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_salt_has_requested_length() {
        for len in [8, 16, 32, 64] {
            assert_eq!(random_salt(len).unwrap().expose_secret().len(), len);
        }
    }

    #[test]
    fn random_salts_differ() {
        let a = random_salt(32).unwrap();
        let b = random_salt(32).unwrap();
        assert_ne!(a.expose_secret(), b.expose_secret());
    }
}
