//! # Key Derivation Functions (KDF)
//!
//! ## Modules
//!
//! - [`password_key`] - raw zero-padded password bytes, used by the text cipher
//! - [`pbkdf2`] - PBKDF2-HMAC-SHA256, used by the salted hasher
//!
//! Most callers want the high-level [`encrypt`](crate::encrypt) /
//! [`generate_salted_hash`](crate::generate_salted_hash) functions instead.

pub mod password_key;
pub mod pbkdf2;
