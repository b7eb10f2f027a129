//! src/hasher/scheme.rs
//! Explicit discriminator between the PBKDF2 and legacy hash formats

use crate::builders::SaltedHashBuilder;
use crate::error::PasscryptError;
use crate::hasher::legacy::{generate_legacy_salted_hash, verify_legacy_salted_hash};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which salted-hash format a stored hash uses.
///
/// The two formats are not interchangeable. Store the tag (see [`HashScheme::as_str`])
/// next to each hash and dispatch on it; nothing in the crate guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashScheme {
    /// PBKDF2-HMAC-SHA256 with a configurable random salt. Canonical.
    #[default]
    Pbkdf2Sha256,
    /// One SHA-256 pass with an 8-character printable salt. Verify-only in practice.
    LegacySha256,
}

impl HashScheme {
    /// Stable tag for persistence.
    pub const fn as_str(&self) -> &'static str {
        match self {
            HashScheme::Pbkdf2Sha256 => "pbkdf2-sha256",
            HashScheme::LegacySha256 => "legacy-sha256",
        }
    }

    /// Generate a hash in this format. `params` only applies to PBKDF2.
    pub fn generate(
        &self,
        secret: &str,
        known_salt: &str,
        params: &SaltedHashBuilder,
    ) -> Result<String, PasscryptError> {
        match self {
            HashScheme::Pbkdf2Sha256 => params.generate(secret, known_salt),
            HashScheme::LegacySha256 => generate_legacy_salted_hash(secret, known_salt),
        }
    }

    /// Verify a hash stored in this format. `params` only applies to PBKDF2.
    pub fn verify(
        &self,
        hash_b64: &str,
        believed_secret: &str,
        known_salt: &str,
        params: &SaltedHashBuilder,
    ) -> bool {
        match self {
            HashScheme::Pbkdf2Sha256 => params.verify(hash_b64, believed_secret, known_salt),
            HashScheme::LegacySha256 => {
                verify_legacy_salted_hash(hash_b64, believed_secret, known_salt)
            }
        }
    }
}

impl fmt::Display for HashScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashScheme {
    type Err = PasscryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pbkdf2-sha256" => Ok(HashScheme::Pbkdf2Sha256),
            "legacy-sha256" => Ok(HashScheme::LegacySha256),
            other => Err(PasscryptError::Configuration(format!(
                "unknown hash scheme: {other}"
            ))),
        }
    }
}
