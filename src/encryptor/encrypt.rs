//! src/encryptor/encrypt.rs
//! Text encryption — password-derived key, base64 out

use crate::aliases::Aes128Key16;
use crate::consts::KEY_SIZE;
use crate::crypto::kdf::password_key::derive_password_key;
use crate::encryptor::cbc::encrypt_cbc;
use crate::error::PasscryptError;
use crate::utils::pkcs7_pad;
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::trace;

/// Encrypt UTF-8 text with a password and return standard base64.
///
/// The first 16 UTF-8 bytes of `password` (zero-padded) are the AES-128 key
/// **and** the IV; the plaintext is PKCS#7 padded and encrypted in CBC mode.
/// Any password is accepted, including the empty string.
///
/// Output is deterministic: the same `(plaintext, password)` pair always
/// yields the same ciphertext. See
/// [`derive_password_key`](crate::crypto::kdf::password_key::derive_password_key)
/// for the security limits of this construction.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` keeps the signature aligned
/// with [`decrypt`](crate::decrypt) and the provider trait.
///
/// # Example
///
/// ```
/// let encoded = passcrypt::encrypt("Hello, World", "password")?;
/// assert_eq!(encoded, "22h7n5bUs9mz6N44xSZl1A==");
/// # Ok::<(), passcrypt::PasscryptError>(())
/// ```
pub fn encrypt(plaintext: &str, password: &str) -> Result<String, PasscryptError> {
    let mut key = Aes128Key16::new([0u8; KEY_SIZE]);
    derive_password_key(password, &mut key);

    let padded = pkcs7_pad(plaintext.as_bytes());
    let ciphertext = encrypt_cbc(&padded, &key, &key);

    trace!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "encrypted text"
    );

    Ok(STANDARD.encode(ciphertext))
}
