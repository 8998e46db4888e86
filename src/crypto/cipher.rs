//! AES-256-CBC block cipher core.
//!
//! Padding is applied here, not by the CBC layer: the explicit
//! [`crate::padding`] step keeps the padded length visible to callers that
//! compute container sizes. The cipher itself runs with `NoPadding` on
//! buffers that are already block-aligned.

use aes::Aes256;
use aes::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::config::{BLOCK_SIZE, IV_SIZE};
use crate::error::{Error, Result};
use crate::padding;
use crate::secret::KeyMaterial;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// A CBC cipher bound to one derived key.
pub struct CbcCipher {
    key: KeyMaterial,
}

impl CbcCipher {
    pub fn new(key: KeyMaterial) -> Self {
        Self { key }
    }

    /// Pads `plaintext` to the block boundary and encrypts it.
    ///
    /// The output length is always `(plaintext.len() / 16 + 1) * 16`; no
    /// bytes are dropped and no tag is appended.
    pub fn encrypt(&self, plaintext: &[u8], iv: &[u8; IV_SIZE]) -> Result<Vec<u8>> {
        let padded = padding::pad(plaintext)?;

        let cipher = Aes256CbcEnc::new_from_slices(self.key.expose_secret(), iv)
            .map_err(|e| Error::Encryption(format!("cipher init: {e}")))?;

        Ok(cipher.encrypt_padded_vec_mut::<NoPadding>(&padded))
    }

    /// Decrypts `ciphertext` and strips the padding.
    ///
    /// A zero-length or misaligned ciphertext is rejected up front; padding
    /// inconsistencies after decryption surface as the same error kind,
    /// since with no authentication tag they are the only wrong-password
    /// signal this cipher has.
    pub fn decrypt(&self, ciphertext: &[u8], iv: &[u8; IV_SIZE]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || !ciphertext.len().is_multiple_of(BLOCK_SIZE) {
            return Err(Error::Decryption(format!(
                "ciphertext length {} is not a positive multiple of {BLOCK_SIZE}",
                ciphertext.len()
            )));
        }

        let cipher = Aes256CbcDec::new_from_slices(self.key.expose_secret(), iv)
            .map_err(|e| Error::Decryption(format!("cipher init: {e}")))?;

        let padded = cipher
            .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
            .map_err(|_| Error::Decryption("block decryption failed".to_string()))?;

        padding::unpad(&padded)
    }
}
