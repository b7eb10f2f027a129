//! src/decryptor/cbc.rs
//! AES-128-CBC block decryption — exact mirror of `encryptor/cbc.rs`

use crate::aliases::{Aes128Key16, Block16};
use crate::consts::BLOCK_SIZE;
use crate::error::PasscryptError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes128Dec, Block as AesBlock};

/// Decrypts CBC ciphertext, returning the still-padded plaintext.
///
/// Rejects empty input and input that is not a whole number of blocks.
#[inline]
pub fn decrypt_cbc(
    ciphertext: &[u8],
    key: &Aes128Key16,
    iv: &Aes128Key16,
) -> Result<Vec<u8>, PasscryptError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(PasscryptError::Cipher(format!(
            "ciphertext length {} is not a positive multiple of {BLOCK_SIZE}",
            ciphertext.len()
        )));
    }

    let cipher = Aes128Dec::new(key.expose_secret().into());
    let mut output = Vec::with_capacity(ciphertext.len());

    let mut previous_block = Block16::new(*iv.expose_secret());
    let mut plain_block = Block16::new([0u8; BLOCK_SIZE]);

    for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
        let mut block = *AesBlock::from_slice(chunk);
        cipher.decrypt_block(&mut block);

        xor_blocks(
            block.as_slice(),
            previous_block.expose_secret(),
            plain_block.expose_secret_mut(),
        );
        output.extend_from_slice(plain_block.expose_secret());

        previous_block
            .expose_secret_mut()
            .copy_from_slice(chunk);
    }

    Ok(output)
}
