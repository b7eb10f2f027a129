//! src/hasher/blob.rs
//! `derived ‖ random_salt` layout

use crate::error::PasscryptError;

/// Pack derived bytes and salt into the stored layout.
pub fn pack_blob(derived: &[u8], random_salt: &[u8]) -> Vec<u8> {
    let mut blob = Vec::with_capacity(derived.len() + random_salt.len());
    blob.extend_from_slice(derived);
    blob.extend_from_slice(random_salt);
    blob
}

/// Split a decoded blob into `(derived, random_salt)`.
///
/// The salt sits at a fixed offset from the end. The blob must be exactly
/// `hash_size + random_salt_len` bytes, so a hash produced under a different
/// configuration is rejected instead of being sliced at the wrong place.
pub fn split_blob(
    blob: &[u8],
    hash_size: usize,
    random_salt_len: usize,
) -> Result<(&[u8], &[u8]), PasscryptError> {
    let expected = hash_size + random_salt_len;
    if blob.len() != expected {
        return Err(PasscryptError::Configuration(format!(
            "hash blob is {} bytes, expected {expected}",
            blob.len()
        )));
    }
    Ok(blob.split_at(blob.len() - random_salt_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salt_is_taken_from_the_end() {
        let blob = pack_blob(&[1, 2, 3, 4], &[9, 9]);
        let (derived, salt) = split_blob(&blob, 4, 2).unwrap();
        assert_eq!(derived, &[1, 2, 3, 4]);
        assert_eq!(salt, &[9, 9]);
    }

    #[test]
    fn wrong_length_is_a_configuration_error() {
        let blob = [0u8; 63];
        assert!(matches!(
            split_blob(&blob, 32, 32),
            Err(PasscryptError::Configuration(_))
        ));
        let blob = [0u8; 65];
        assert!(split_blob(&blob, 32, 32).is_err());
    }
}
