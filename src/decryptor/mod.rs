// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(ciphertext_b64, password)?` → UTF-8 text.
//! Low-level: `decrypt_cbc(ciphertext, key, iv)` returns padded plaintext.

pub(crate) mod cbc;
pub(crate) mod decrypt;

pub use cbc::decrypt_cbc;
pub use decrypt::decrypt;
