// src/hasher/mod.rs

//! Salted password hashing.
//!
//! Core API: `generate_salted_hash(..)?` / `verify_salted_hash(..)` (PBKDF2-HMAC-SHA256).
//! Legacy SHA-256 format behind an explicit [`HashScheme`].

pub(crate) mod blob;
pub(crate) mod generate;
pub(crate) mod legacy;
pub(crate) mod params;
pub(crate) mod scheme;
pub(crate) mod verify;

pub use blob::{pack_blob, split_blob};
pub use generate::{generate_salted_hash, generate_salted_hash_default};
pub use legacy::{generate_legacy_salted_hash, verify_legacy_salted_hash};
pub use params::validate_hash_params;
pub use scheme::HashScheme;
pub use verify::{verify_salted_hash, verify_salted_hash_default};
