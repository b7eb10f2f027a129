//! tests/common.rs
//! Common constants shared across test files

/// Fast iteration count for tests - performance testing is in benches/
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATIONS: u32 = 5;

/// Known salt used by the hashing tests
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KNOWN_SALT: &str = "salt";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_SECRET: &str = "Hello, World";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "password";

/// Plaintexts exercising empty, sub-block, block-aligned, multi-block and non-ASCII input
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PLAINTEXTS: &[&str] = &[
    "",
    "a",
    "Hello, World",
    "exactly sixteen!",
    "thirty-two bytes of plaintext...",
    "パスワード123!@#",
    "🔐💻 emoji and tabs\tand\nnewlines",
];
