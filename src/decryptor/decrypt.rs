//! src/decryptor/decrypt.rs
//! Text decryption — base64 in, password-derived key, UTF-8 out

use crate::aliases::Aes128Key16;
use crate::consts::KEY_SIZE;
use crate::crypto::kdf::password_key::derive_password_key;
use crate::decryptor::cbc::decrypt_cbc;
use crate::error::PasscryptError;
use crate::utils::pkcs7_unpadded_len;
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::debug;

/// Decrypt base64 text produced by [`encrypt`](crate::encrypt) with the same password.
///
/// # Errors
///
/// - [`PasscryptError::Decoding`] - `ciphertext_b64` is not valid standard base64
/// - [`PasscryptError::Cipher`] - wrong block length, bad PKCS#7 padding, or
///   the recovered bytes are not UTF-8 (wrong password or corrupted data)
///
/// # Example
///
/// ```
/// use passcrypt::{decrypt, PasscryptError};
///
/// assert_eq!(decrypt("22h7n5bUs9mz6N44xSZl1A==", "password")?, "Hello, World");
/// assert!(matches!(
///     decrypt("not base64!", "password"),
///     Err(PasscryptError::Decoding(_))
/// ));
/// # Ok::<(), PasscryptError>(())
/// ```
pub fn decrypt(ciphertext_b64: &str, password: &str) -> Result<String, PasscryptError> {
    let ciphertext = STANDARD.decode(ciphertext_b64).map_err(|e| {
        debug!("decrypt input rejected: not base64");
        PasscryptError::Decoding(e)
    })?;

    let mut key = Aes128Key16::new([0u8; KEY_SIZE]);
    derive_password_key(password, &mut key);

    let mut plaintext = decrypt_cbc(&ciphertext, &key, &key)?;
    let len = pkcs7_unpadded_len(&plaintext).inspect_err(|_| {
        debug!(
            ciphertext_len = ciphertext.len(),
            "decrypt failed: padding check"
        );
    })?;
    plaintext.truncate(len);

    String::from_utf8(plaintext).map_err(|_| {
        debug!("decrypt failed: plaintext is not UTF-8");
        PasscryptError::Cipher("decrypted bytes are not valid UTF-8".into())
    })
}
