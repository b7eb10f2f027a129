// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod hasher;
pub mod provider;
pub mod text;
pub mod utils;

// High-level API — text cipher + salted hasher
pub use decryptor::decrypt;
pub use encryptor::encrypt;
pub use error::PasscryptError;
pub use hasher::{
    generate_salted_hash, generate_salted_hash_default, verify_salted_hash,
    verify_salted_hash_default,
};

// Legacy hash format, only reachable through an explicit scheme choice
pub use hasher::{generate_legacy_salted_hash, verify_legacy_salted_hash, HashScheme};

pub use builders::SaltedHashBuilder;
pub use provider::{
    AesEncryptionProvider, EncryptionProvider, NoOpEncryptionProvider, ProviderConfig,
    ProviderKind,
};

// Low-level KDFs
pub use crypto::kdf::password_key::derive_password_key;
pub use crypto::kdf::pbkdf2::derive_pbkdf2_sha256;

pub use text::{compute_sha256_hex, generate_printable_string, generate_random_string};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch, generate_hash_batch};
