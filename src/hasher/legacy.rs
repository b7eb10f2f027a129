//! src/hasher/legacy.rs
//! Legacy single-pass SHA-256 salted hash
//!
//! Layout: `base64(SHA-256(salt ‖ secret ‖ known_salt) ‖ salt)` where `salt` is
//! [`LEGACY_SALT_LEN`] printable ASCII characters. No stretching, so only use it
//! to check hashes that already exist; new hashes should use the PBKDF2 scheme.
//! Selected explicitly through [`HashScheme::LegacySha256`](crate::HashScheme);
//! PBKDF2 verification never falls back to it.

use crate::aliases::LegacyDigest32;
use crate::consts::{LEGACY_DIGEST_SIZE, LEGACY_SALT_LEN, PRINTABLE_CHARS};
use crate::error::PasscryptError;
use crate::hasher::blob::{pack_blob, split_blob};
use crate::text::generate_random_string;
use crate::utils::ct_eq_bytes;
use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256};
use tracing::debug;

fn legacy_digest(salt: &[u8], secret: &str, known_salt: &str) -> LegacyDigest32 {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(secret.as_bytes());
    hasher.update(known_salt.as_bytes());

    let mut digest = LegacyDigest32::new([0u8; LEGACY_DIGEST_SIZE]);
    digest
        .expose_secret_mut()
        .copy_from_slice(hasher.finalize().as_slice());
    digest
}

/// Generate a legacy-format salted hash.
///
/// The `Result` comes from salt generation; with the built-in alphabet it
/// does not fail.
pub fn generate_legacy_salted_hash(
    secret: &str,
    known_salt: &str,
) -> Result<String, PasscryptError> {
    let salt = generate_random_string(LEGACY_SALT_LEN, PRINTABLE_CHARS)?;
    let digest = legacy_digest(salt.as_bytes(), secret, known_salt);

    debug!("generated legacy salted hash");
    Ok(STANDARD.encode(pack_blob(digest.expose_secret(), salt.as_bytes())))
}

/// Check `believed_secret` against a legacy-format hash. Fails closed.
pub fn verify_legacy_salted_hash(hash_b64: &str, believed_secret: &str, known_salt: &str) -> bool {
    let blob = match STANDARD.decode(hash_b64) {
        Ok(blob) => blob,
        Err(_) => {
            debug!("legacy hash rejected: not base64");
            return false;
        }
    };

    let (stored, salt) = match split_blob(&blob, LEGACY_DIGEST_SIZE, LEGACY_SALT_LEN) {
        Ok(parts) => parts,
        Err(e) => {
            debug!(error = %e, "legacy hash rejected");
            return false;
        }
    };

    let candidate = legacy_digest(salt, believed_secret, known_salt);
    ct_eq_bytes(candidate.expose_secret(), stored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_covers_salt_then_secret_then_known_salt() {
        let a = legacy_digest(b"abcdefgh", "Hello, World", "salt");
        let b = legacy_digest(b"abcdefghHello, World", "", "salt");
        assert_eq!(a.expose_secret(), b.expose_secret());
    }
}
