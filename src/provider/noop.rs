//! src/provider/noop.rs

use crate::error::PasscryptError;
use crate::provider::EncryptionProvider;

/// Pass-through provider: nothing is encrypted or hashed.
///
/// `encrypt`, `decrypt` and `generate_salted_hash` return their input unchanged;
/// `verify_salted_hash` is plain string equality. For tests and local setups only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpEncryptionProvider;

impl EncryptionProvider for NoOpEncryptionProvider {
    fn encrypt(&self, value: &str, _password: &str) -> Result<String, PasscryptError> {
        Ok(value.to_owned())
    }

    fn decrypt(&self, encoded: &str, _password: &str) -> Result<String, PasscryptError> {
        Ok(encoded.to_owned())
    }

    fn generate_salted_hash(&self, value: &str, _salt: &str) -> Result<String, PasscryptError> {
        Ok(value.to_owned())
    }

    fn verify_salted_hash(&self, hash: &str, believed_value: &str, _salt: &str) -> bool {
        hash == believed_value
    }
}
