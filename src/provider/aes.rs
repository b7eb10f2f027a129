//! src/provider/aes.rs

use crate::builders::SaltedHashBuilder;
use crate::error::PasscryptError;
use crate::provider::EncryptionProvider;
use crate::{decrypt, encrypt};

/// Production provider: AES-128-CBC text cipher + PBKDF2 salted hasher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AesEncryptionProvider {
    hash_params: SaltedHashBuilder,
}

impl AesEncryptionProvider {
    pub const fn new(hash_params: SaltedHashBuilder) -> Self {
        Self { hash_params }
    }

    pub const fn hash_params(&self) -> &SaltedHashBuilder {
        &self.hash_params
    }
}

impl EncryptionProvider for AesEncryptionProvider {
    fn encrypt(&self, value: &str, password: &str) -> Result<String, PasscryptError> {
        encrypt(value, password)
    }

    fn decrypt(&self, encoded: &str, password: &str) -> Result<String, PasscryptError> {
        decrypt(encoded, password)
    }

    fn generate_salted_hash(&self, value: &str, salt: &str) -> Result<String, PasscryptError> {
        self.hash_params.generate(value, salt)
    }

    fn verify_salted_hash(&self, hash: &str, believed_value: &str, salt: &str) -> bool {
        self.hash_params.verify(hash, believed_value, salt)
    }
}
