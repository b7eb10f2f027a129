// src/provider/mod.rs

//! Encryption capability interface.
//!
//! [`EncryptionProvider`] has exactly four operations. Pick the implementation
//! once, at construction, from a [`ProviderConfig`]:
//!
//! - [`AesEncryptionProvider`] - real cipher and PBKDF2 hasher
//! - [`NoOpEncryptionProvider`] - pass-through for contexts where encryption is disabled

pub(crate) mod aes;
pub(crate) mod config;
pub(crate) mod noop;

pub use aes::AesEncryptionProvider;
pub use config::{
    ProviderConfig, ProviderKind, ENV_HASH_SIZE, ENV_ITERATIONS, ENV_PROVIDER, ENV_RANDOM_SALT_LEN,
};
pub use noop::NoOpEncryptionProvider;

use crate::error::PasscryptError;

/// Encrypt/decrypt text and produce/check salted hashes.
pub trait EncryptionProvider: Send + Sync {
    /// Encrypt `value` with `password`; returns transport text.
    fn encrypt(&self, value: &str, password: &str) -> Result<String, PasscryptError>;

    /// Reverse [`encrypt`](EncryptionProvider::encrypt) with the same password.
    fn decrypt(&self, encoded: &str, password: &str) -> Result<String, PasscryptError>;

    /// Produce a verifier for `value` mixed with the application-wide `salt`.
    fn generate_salted_hash(&self, value: &str, salt: &str) -> Result<String, PasscryptError>;

    /// `true` iff `hash` was produced from `believed_value` and `salt`.
    fn verify_salted_hash(&self, hash: &str, believed_value: &str, salt: &str) -> bool;
}
