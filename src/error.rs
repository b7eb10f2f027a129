//! # Error Types
//!
//! All fallible operations return [`Result<T, PasscryptError>`](PasscryptError).
//!
//! Verification is the exception: [`verify_salted_hash`](crate::verify_salted_hash)
//! and its legacy counterpart return a plain `bool` and treat every failure
//! (bad base64, wrong length, invalid parameters) as "not verified".

use thiserror::Error;

/// The error type for all passcrypt operations.
#[derive(Error, Debug)]
pub enum PasscryptError {
    /// Input text is not valid base64.
    ///
    /// Returned by [`decrypt`](crate::decrypt) before any cryptography runs.
    #[error("Decoding error: {0}")]
    Decoding(#[from] base64::DecodeError),

    /// Decryption failed.
    ///
    /// Covers ciphertext that is not a whole number of blocks, invalid PKCS#7
    /// padding and recovered bytes that are not UTF-8. In practice all of these
    /// mean a wrong password or corrupted input.
    #[error("Cipher error: {0}")]
    Cipher(String),

    /// Parameters outside the accepted ranges, or an unparseable config value.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The OS random generator could not supply bytes.
    #[error("Random generator error: {0}")]
    Random(String),
}
