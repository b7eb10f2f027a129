//! src/crypto/kdf/password_key.rs
//! Password → AES-128 key/IV, byte-for-byte

use crate::aliases::Aes128Key16;
use crate::consts::KEY_SIZE;

/// Copy the password's UTF-8 bytes into a zeroed 16-byte key buffer.
///
/// Bytes past [`KEY_SIZE`] are ignored; shorter passwords leave the tail zero.
/// The cipher uses the result as both key and IV.
///
/// # Security
///
/// This is not a real KDF. There is no hashing or stretching, the key space is
/// at most `min(password.len(), 16)` bytes of password entropy, and IV == key
/// means equal plaintext prefixes under the same password produce equal
/// ciphertext prefixes. It is kept byte-compatible so previously encrypted
/// values stay readable. Use the salted hasher for password storage.
#[inline]
pub fn derive_password_key(password: &str, out_key: &mut Aes128Key16) {
    let bytes = password.as_bytes();
    let len = bytes.len().min(KEY_SIZE);

    let key = out_key.expose_secret_mut();
    key.fill(0);
    key[..len].copy_from_slice(&bytes[..len]);
}
