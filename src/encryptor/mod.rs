// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(plaintext, password)?` → base64 text.
//! Low-level: `encrypt_cbc(padded, key, iv)` for callers that manage their own padding.

pub(crate) mod cbc;
pub(crate) mod encrypt;

pub use cbc::encrypt_cbc;
pub use encrypt::encrypt;
