//! The encrypted container format.
//!
//! A container is the flat concatenation `salt ‖ iv ‖ ciphertext`:
//!
//! ```text
//! offset 0..16   salt (random, not secret)
//! offset 16..32  IV (random, not secret)
//! offset 32..    ciphertext (multiple of 16 bytes)
//! ```
//!
//! There is no magic number, version tag, length prefix, or checksum; the
//! layout relies entirely on the salt and IV having fixed sizes. Any buffer
//! of at least 32 bytes unmarshals successfully whether or not this tool
//! produced it; a wrong guess only shows up later as a padding failure
//! during decryption.

use crate::config::{CONTAINER_OVERHEAD, IV_SIZE, SALT_SIZE};
use crate::error::{Error, Result};

/// A decoded (or to-be-encoded) encrypted container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    salt: [u8; SALT_SIZE],
    iv: [u8; IV_SIZE],
    ciphertext: Vec<u8>,
}

impl Container {
    pub fn new(salt: [u8; SALT_SIZE], iv: [u8; IV_SIZE], ciphertext: Vec<u8>) -> Self {
        Self { salt, iv, ciphertext }
    }

    pub fn salt(&self) -> &[u8; SALT_SIZE] {
        &self.salt
    }

    pub fn iv(&self) -> &[u8; IV_SIZE] {
        &self.iv
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Serializes the container into one flat buffer.
    pub fn marshal(&self) -> Vec<u8> {
        let mut combined = Vec::with_capacity(CONTAINER_OVERHEAD + self.ciphertext.len());
        combined.extend_from_slice(&self.salt);
        combined.extend_from_slice(&self.iv);
        combined.extend_from_slice(&self.ciphertext);
        combined
    }

    /// Splits a flat buffer back into salt, IV, and ciphertext.
    ///
    /// Fails only when the buffer cannot hold the 32-byte prefix. The
    /// ciphertext slice is not validated here; length checks belong to the
    /// cipher, which is the first consumer that can interpret it.
    pub fn unmarshal(data: &[u8]) -> Result<Self> {
        if data.len() < CONTAINER_OVERHEAD {
            return Err(Error::MalformedContainer(format!(
                "need at least {CONTAINER_OVERHEAD} bytes, got {}",
                data.len()
            )));
        }

        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(&data[..SALT_SIZE]);

        let mut iv = [0u8; IV_SIZE];
        iv.copy_from_slice(&data[SALT_SIZE..CONTAINER_OVERHEAD]);

        Ok(Self { salt, iv, ciphertext: data[CONTAINER_OVERHEAD..].to_vec() })
    }

    /// Consumes the container, returning the ciphertext without copying.
    pub fn into_ciphertext(self) -> Vec<u8> {
        self.ciphertext
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marshal_layout() {
        let container = Container::new([0x11; 16], [0x22; 16], vec![0x33; 32]);
        let combined = container.marshal();

        assert_eq!(combined.len(), 64);
        assert!(combined[..16].iter().all(|&b| b == 0x11));
        assert!(combined[16..32].iter().all(|&b| b == 0x22));
        assert!(combined[32..].iter().all(|&b| b == 0x33));
    }

    #[test]
    fn test_unmarshal_roundtrip() {
        let container = Container::new([7; 16], [9; 16], vec![1, 2, 3, 4]);
        let decoded = Container::unmarshal(&container.marshal()).unwrap();
        assert_eq!(decoded, container);
    }

    #[test]
    fn test_unmarshal_empty_ciphertext() {
        let decoded = Container::unmarshal(&[0u8; 32]).unwrap();
        assert!(decoded.ciphertext().is_empty());
    }

    #[test]
    fn test_unmarshal_too_short() {
        assert!(matches!(
            Container::unmarshal(&[0u8; 31]),
            Err(Error::MalformedContainer(_))
        ));
        assert!(Container::unmarshal(&[]).is_err());
    }

    #[test]
    fn test_unmarshal_accepts_arbitrary_prefix() {
        // No magic bytes exist, so any 32+ byte buffer is structurally valid.
        let data: Vec<u8> = (0..40u8).collect();
        let decoded = Container::unmarshal(&data).unwrap();
        assert_eq!(decoded.salt()[0], 0);
        assert_eq!(decoded.iv()[0], 16);
        assert_eq!(decoded.ciphertext().len(), 8);
    }
}
