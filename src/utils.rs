//! Utility functions used across the library.

use crate::aliases::SecretBytes;
use crate::consts::BLOCK_SIZE;
use crate::error::PasscryptError;
use subtle::ConstantTimeEq;

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used by both CBC directions.
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than 16 bytes. Callers only
/// pass `expose_secret()` views of [`Block16`](crate::aliases::Block16) /
/// [`Aes128Key16`](crate::aliases::Aes128Key16) or `chunks_exact(16)` slices.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < BLOCK_SIZE {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// Appends PKCS#7 padding so the result is a whole number of blocks.
///
/// Always adds at least one byte; block-aligned input gains a full block of `0x10`.
pub fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let pad = BLOCK_SIZE - (data.len() % BLOCK_SIZE);
    let mut out = Vec::with_capacity(data.len() + pad);
    out.extend_from_slice(data);
    out.resize(data.len() + pad, pad as u8);
    out
}

/// Returns the length of `data` once its PKCS#7 padding is removed.
///
/// The padding bytes are compared in constant time.
pub fn pkcs7_unpadded_len(data: &[u8]) -> Result<usize, PasscryptError> {
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(PasscryptError::Cipher(
            "ciphertext is not a whole number of blocks".into(),
        ));
    }

    let padding = data[data.len() - 1];

    // Padding value range (non-secret, can return early)
    if padding == 0 || padding as usize > BLOCK_SIZE {
        return Err(PasscryptError::Cipher("invalid PKCS#7 padding".into()));
    }

    let padding_start = data.len() - padding as usize;
    let expected_padding = [padding; BLOCK_SIZE];
    let actual = &data[padding_start..];
    let expected = &expected_padding[..padding as usize];

    if !bool::from(actual.ct_eq(expected)) {
        return Err(PasscryptError::Cipher("corrupt PKCS#7 padding".into()));
    }

    Ok(padding_start)
}

/// Builds the PRF input `secret ‖ known_salt` in a wiped-on-drop buffer.
pub fn concat_secret(secret: &str, known_salt: &str) -> SecretBytes {
    let mut buf = Vec::with_capacity(secret.len() + known_salt.len());
    buf.extend_from_slice(secret.as_bytes());
    buf.extend_from_slice(known_salt.as_bytes());
    SecretBytes::new(buf)
}

/// Constant-time equality for byte slices of possibly different lengths.
///
/// Differing lengths compare unequal; the length itself is not secret.
#[inline]
pub fn ct_eq_bytes(a: &[u8], b: &[u8]) -> bool {
    bool::from(a.ct_eq(b))
}
