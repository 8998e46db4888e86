//! Key derivation and password-based encryption.
//!
//! [`encrypt`] and [`decrypt`] are the password-level operations: they own
//! salt and IV generation, key derivation, and the cipher run. The pieces
//! they compose live in [`derive`] and [`cipher`] and can be driven
//! separately when a caller already holds a key.

pub mod cipher;
pub mod derive;

pub use cipher::CbcCipher;
pub use derive::{derive_key, generate_iv, random_bytes};

use crate::config::{IV_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};
use crate::error::Result;
use crate::secret::Password;

/// Encrypts `plaintext` under a password-derived key.
///
/// Generates a fresh salt and a fresh IV (independent of each other) per
/// call, so encrypting the same input twice never produces the same output.
/// Returns the triple the container format persists. The derived key is
/// dropped (and zeroized) before this function returns.
pub fn encrypt(plaintext: &[u8], password: &Password) -> Result<([u8; SALT_SIZE], [u8; IV_SIZE], Vec<u8>)> {
    let (key, salt) = derive_key(password, None, PBKDF2_ITERATIONS)?;
    let iv = generate_iv();

    let ciphertext = CbcCipher::new(key).encrypt(plaintext, &iv)?;

    Ok((salt, iv, ciphertext))
}

/// Decrypts `ciphertext` with the key re-derived from `password` and `salt`.
///
/// Uses the same fixed iteration count as [`encrypt`]; the salt comes from
/// the stored container, so an identical password reproduces the key. A
/// wrong password and corrupted ciphertext both surface as
/// [`crate::error::Error::Decryption`] (or decrypt to garbage); the format
/// carries nothing that can tell them apart.
pub fn decrypt(
    ciphertext: &[u8],
    salt: &[u8; SALT_SIZE],
    iv: &[u8; IV_SIZE],
    password: &Password,
) -> Result<Vec<u8>> {
    let (key, _) = derive_key(password, Some(*salt), PBKDF2_ITERATIONS)?;

    CbcCipher::new(key).decrypt(ciphertext, iv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let password = Password::new("test1234");
        let plaintext = b"a small plaintext that spans two blocks";

        let (salt, iv, ciphertext) = encrypt(plaintext, &password).unwrap();
        let decrypted = decrypt(&ciphertext, &salt, &iv, &password).unwrap();

        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_encrypt_is_randomized() {
        let password = Password::new("test1234");
        let plaintext = b"same input";

        let (salt1, iv1, c1) = encrypt(plaintext, &password).unwrap();
        let (salt2, iv2, c2) = encrypt(plaintext, &password).unwrap();

        assert_ne!(salt1, salt2);
        assert_ne!(iv1, iv2);
        assert_ne!(c1, c2);
    }

    #[test]
    fn test_wrong_password_never_silently_succeeds() {
        let plaintext = b"round-trip must not survive a wrong password";
        let (salt, iv, ciphertext) = encrypt(plaintext, &Password::new("correct horse")).unwrap();

        match decrypt(&ciphertext, &salt, &iv, &Password::new("battery staple")) {
            Err(Error::Decryption(_)) => {}
            Ok(decrypted) => assert_ne!(decrypted, plaintext),
            Err(e) => panic!("unexpected error kind: {e}"),
        }
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(matches!(
            encrypt(b"data", &Password::new("")),
            Err(Error::InvalidPassword(_))
        ));
    }

    #[test]
    fn test_empty_plaintext_yields_one_block() {
        let password = Password::new("test1234");
        let (salt, iv, ciphertext) = encrypt(b"", &password).unwrap();

        assert_eq!(ciphertext.len(), 16);
        assert_eq!(decrypt(&ciphertext, &salt, &iv, &password).unwrap(), b"");
    }
}
