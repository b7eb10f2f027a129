//! # Constants
//!
//! Sizes, defaults and accepted ranges for the cipher and the salted hasher.

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Length of the password-derived key buffer.
///
/// The same buffer is used as the IV, so this also equals [`BLOCK_SIZE`].
/// 16 bytes selects AES-128.
pub const KEY_SIZE: usize = 16;

/// Default number of random salt bytes appended to a PBKDF2 hash blob.
pub const DEFAULT_RANDOM_SALT_LEN: usize = 32;

/// Default PBKDF2-HMAC-SHA256 iteration count.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 100_000;

/// Default number of derived bytes at the front of a PBKDF2 hash blob.
pub const DEFAULT_HASH_SIZE: usize = 32;

/// Minimum allowed PBKDF2 iteration count.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum allowed PBKDF2 iteration count.
///
/// Bounds the CPU time of a single generate or verify call.
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;

/// Accepted range for the random salt length, in bytes.
pub const MIN_RANDOM_SALT_LEN: usize = 8;
pub const MAX_RANDOM_SALT_LEN: usize = 64;

/// Accepted range for the derived hash size, in bytes.
pub const MIN_HASH_SIZE: usize = 16;
pub const MAX_HASH_SIZE: usize = 64;

/// Random salt length of the legacy SHA-256 scheme (printable ASCII characters).
pub const LEGACY_SALT_LEN: usize = 8;

/// Digest size of the legacy SHA-256 scheme.
pub const LEGACY_DIGEST_SIZE: usize = 32;

/// Default alphabet for [`generate_random_string`](crate::text::generate_random_string).
pub const PRINTABLE_CHARS: &str =
    r#"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz1234567890-=`~!@#$%^&*()_+,./;'[]\{}|:"<>?"#;
