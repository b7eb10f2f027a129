//! src/builders/salted_hash_builder.rs
//! PBKDF2-HMAC-SHA256 salted-hash configuration

use crate::consts::{
    DEFAULT_HASH_SIZE, DEFAULT_PBKDF2_ITERATIONS, DEFAULT_RANDOM_SALT_LEN, MAX_HASH_SIZE,
    MAX_RANDOM_SALT_LEN, MIN_HASH_SIZE, MIN_RANDOM_SALT_LEN, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER,
};
use crate::error::PasscryptError;
use crate::hasher::{generate_salted_hash, validate_hash_params, verify_salted_hash};

/// Salted-hash configuration
///
/// Defaults: 32-byte random salt, 100,000 iterations, 32-byte derived hash.
/// Setters clamp into the accepted ranges from [`consts`](crate::consts), so a
/// built value is always valid.
///
/// Generation and verification must use equal configurations.
///
/// # Thread Safety
///
/// `Send + Sync` and `Copy`; share one per application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaltedHashBuilder {
    iterations: u32,
    random_salt_len: usize,
    hash_size: usize,
}

impl SaltedHashBuilder {
    /// Create builder with the default configuration
    #[must_use]
    pub const fn new() -> Self {
        Self {
            iterations: DEFAULT_PBKDF2_ITERATIONS,
            random_salt_len: DEFAULT_RANDOM_SALT_LEN,
            hash_size: DEFAULT_HASH_SIZE,
        }
    }

    /// Build from explicit values, rejecting out-of-range ones instead of clamping.
    pub fn try_from_parts(
        random_salt_len: usize,
        iterations: u32,
        hash_size: usize,
    ) -> Result<Self, PasscryptError> {
        validate_hash_params(random_salt_len, iterations, hash_size)?;
        Ok(Self {
            iterations,
            random_salt_len,
            hash_size,
        })
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.clamp(PBKDF2_MIN_ITER, PBKDF2_MAX_ITER);
        self
    }

    #[must_use]
    pub fn with_random_salt_len(mut self, random_salt_len: usize) -> Self {
        self.random_salt_len = random_salt_len.clamp(MIN_RANDOM_SALT_LEN, MAX_RANDOM_SALT_LEN);
        self
    }

    #[must_use]
    pub fn with_hash_size(mut self, hash_size: usize) -> Self {
        self.hash_size = hash_size.clamp(MIN_HASH_SIZE, MAX_HASH_SIZE);
        self
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub const fn random_salt_len(&self) -> usize {
        self.random_salt_len
    }

    #[must_use]
    pub const fn hash_size(&self) -> usize {
        self.hash_size
    }

    /// Length in characters of every hash this configuration produces.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        (self.hash_size + self.random_salt_len).div_ceil(3) * 4
    }

    /// [`generate_salted_hash`] with this configuration.
    pub fn generate(&self, secret: &str, known_salt: &str) -> Result<String, PasscryptError> {
        generate_salted_hash(
            secret,
            known_salt,
            self.random_salt_len,
            self.iterations,
            self.hash_size,
        )
    }

    /// [`verify_salted_hash`] with this configuration.
    pub fn verify(&self, hash_b64: &str, believed_secret: &str, known_salt: &str) -> bool {
        verify_salted_hash(
            hash_b64,
            believed_secret,
            known_salt,
            self.random_salt_len,
            self.iterations,
            self.hash_size,
        )
    }
}

impl Default for SaltedHashBuilder {
    fn default() -> Self {
        Self::new()
    }
}
