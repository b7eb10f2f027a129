//! src/encryptor/cbc.rs
//! AES-128-CBC block encryption over an already padded buffer

use crate::aliases::{Aes128Key16, Block16};
use crate::consts::BLOCK_SIZE;
use crate::utils::xor_blocks;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128Enc, Block as AesBlock};

/// Encrypts `padded` (a whole number of blocks) in CBC mode.
///
/// `padded.len()` must be a multiple of [`BLOCK_SIZE`]; [`pkcs7_pad`](crate::utils::pkcs7_pad)
/// guarantees that for every caller in this crate.
#[inline]
pub fn encrypt_cbc(padded: &[u8], key: &Aes128Key16, iv: &Aes128Key16) -> Vec<u8> {
    debug_assert_eq!(padded.len() % BLOCK_SIZE, 0);

    let cipher = Aes128Enc::new(key.expose_secret().into());
    let mut output = Vec::with_capacity(padded.len());

    // previous ciphertext block – starts as the IV
    let mut prev_block: [u8; BLOCK_SIZE] = *iv.expose_secret();
    let mut xor_output = Block16::new([0u8; BLOCK_SIZE]);

    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        xor_blocks(chunk, &prev_block, xor_output.expose_secret_mut());

        let mut aes_block = AesBlock::from(*xor_output.expose_secret());
        cipher.encrypt_block(&mut aes_block);

        prev_block.copy_from_slice(aes_block.as_ref());
        output.extend_from_slice(&prev_block);
    }

    output
}
