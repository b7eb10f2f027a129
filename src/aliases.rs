//! # Secure-Gate Type Aliases
//!
//! Type aliases for every buffer that holds key material or secret-derived bytes.
//! All of them are wrapped by [`secure-gate`](https://github.com/Slurp9187/secure-gate),
//! so the contents are only reachable through `.expose_secret()` /
//! `.expose_secret_mut()` and are wiped on drop.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha256`] - PRF used by PBKDF2 in the salted hasher
//!
//! ### Fixed-Size Secrets
//! - [`Aes128Key16`] - 16-byte password-derived key (also used as the IV)
//! - [`Block16`] - one AES block of plaintext or chaining state
//! - [`LegacyDigest32`] - SHA-256 digest of the legacy hash scheme
//!
//! ### Dynamic Secrets
//! - [`SecretBytes`] - variable-length secret buffers (`secret ‖ known_salt`,
//!   derived hash bytes, random salts)

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

use hmac::Hmac;
use sha2::Sha256;

pub type HmacSha256 = Hmac<Sha256>;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size secrets
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(Aes128Key16, 16); // password-derived key, doubles as IV
fixed_alias!(Block16, 16); // one AES block
fixed_alias!(LegacyDigest32, 32); // legacy SHA-256 verifier

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(SecretBytes, Vec<u8>);
