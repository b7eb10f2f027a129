// src/crypto/mod.rs

//! Low-level crypto primitives (KDFs + OS randomness).
//!
//! See crate root for re-exports. HMAC types are defined in `aliases.rs`.

pub mod kdf;
pub mod rng;
