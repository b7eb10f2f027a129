//! # Builders
//!
//! - [`SaltedHashBuilder`] - salted-hash configuration (iterations, salt length, hash size)

pub mod salted_hash_builder;

pub use salted_hash_builder::SaltedHashBuilder;
