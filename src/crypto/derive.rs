//! Password-based key derivation.

use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::RngExt;
use sha2::Sha256;

use crate::config::{IV_SIZE, KEY_SIZE, SALT_SIZE};
use crate::error::{Error, Result};
use crate::secret::{KeyMaterial, Password};

/// Derives a 256-bit key with PBKDF2-HMAC-SHA256.
///
/// When `salt` is `None` a fresh random salt is generated; decryption passes
/// the salt recovered from the container. The derivation is deterministic
/// for identical `(password, salt, iterations)`, which is what lets a stored
/// salt reproduce the key. The iteration count is threaded through
/// explicitly so the symmetry between encrypt and decrypt is visible at the
/// call sites; see `config::PBKDF2_ITERATIONS` for the compatibility note.
pub fn derive_key(
    password: &Password,
    salt: Option<[u8; SALT_SIZE]>,
    iterations: u32,
) -> Result<(KeyMaterial, [u8; SALT_SIZE])> {
    if password.is_empty() {
        return Err(Error::InvalidPassword("password cannot be empty"));
    }

    let salt = salt.unwrap_or_else(random_bytes);

    let mut key = vec![0u8; KEY_SIZE];
    pbkdf2::<Hmac<Sha256>>(password.expose_secret().as_bytes(), &salt, iterations, &mut key)
        .map_err(|e| Error::KeyDerivation(e.to_string()))?;

    Ok((KeyMaterial::from_vec(key), salt))
}

/// Generates a fresh CBC initialization vector, independent of any salt.
pub fn generate_iv() -> [u8; IV_SIZE] {
    random_bytes()
}

/// Fills an array from the OS random source.
pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    rand::rng().fill(&mut bytes);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_ITERATIONS: u32 = 1_000;

    #[test]
    fn test_derive_key_length() {
        let password = Password::new("test_password");
        let (key, salt) = derive_key(&password, None, TEST_ITERATIONS).unwrap();
        assert_eq!(key.len(), KEY_SIZE);
        assert_eq!(salt.len(), SALT_SIZE);
    }

    #[test]
    fn test_derive_key_deterministic() {
        let password = Password::new("test_password");
        let salt = [0x42u8; SALT_SIZE];
        let (key1, _) = derive_key(&password, Some(salt), TEST_ITERATIONS).unwrap();
        let (key2, _) = derive_key(&password, Some(salt), TEST_ITERATIONS).unwrap();
        assert_eq!(key1.expose_secret(), key2.expose_secret());
    }

    #[test]
    fn test_derive_key_salt_changes_key() {
        let password = Password::new("test_password");
        let (key1, _) = derive_key(&password, Some([1u8; SALT_SIZE]), TEST_ITERATIONS).unwrap();
        let (key2, _) = derive_key(&password, Some([2u8; SALT_SIZE]), TEST_ITERATIONS).unwrap();
        assert_ne!(key1.expose_secret(), key2.expose_secret());
    }

    #[test]
    fn test_derive_key_iterations_change_key() {
        let password = Password::new("test_password");
        let salt = [3u8; SALT_SIZE];
        let (key1, _) = derive_key(&password, Some(salt), TEST_ITERATIONS).unwrap();
        let (key2, _) = derive_key(&password, Some(salt), TEST_ITERATIONS + 1).unwrap();
        assert_ne!(key1.expose_secret(), key2.expose_secret());
    }

    #[test]
    fn test_derive_key_empty_password() {
        let password = Password::new("");
        assert!(matches!(
            derive_key(&password, None, TEST_ITERATIONS),
            Err(Error::InvalidPassword(_))
        ));
    }

    #[test]
    fn test_fresh_salt_when_absent() {
        let password = Password::new("test_password");
        let (_, salt1) = derive_key(&password, None, TEST_ITERATIONS).unwrap();
        let (_, salt2) = derive_key(&password, None, TEST_ITERATIONS).unwrap();
        assert_ne!(salt1, salt2);
    }

    #[test]
    fn test_random_bytes_differ() {
        let bytes1: [u8; 32] = random_bytes();
        let bytes2: [u8; 32] = random_bytes();
        assert_ne!(bytes1, bytes2);
    }
}
