//! Wrappers that keep passwords and derived keys out of logs and memory dumps.
//!
//! Both types zeroize their contents on drop via `secrecy`. `Debug` output is
//! redacted so an accidental `{:?}` in a log line never leaks key material.

use secrecy::{ExposeSecret, SecretBox, SecretString};

/// A user-supplied password.
pub struct Password {
    inner: SecretString,
}

impl Password {
    pub fn new(password: &str) -> Self {
        Self { inner: SecretString::from(password.to_owned()) }
    }

    pub fn from_string(password: String) -> Self {
        Self { inner: SecretString::from(password) }
    }

    pub fn expose_secret(&self) -> &str {
        self.inner.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.expose_secret().is_empty()
    }
}

impl From<SecretString> for Password {
    fn from(secret: SecretString) -> Self {
        Self { inner: secret }
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([redacted])")
    }
}

/// A derived symmetric key.
///
/// Dropped as soon as the owning cipher operation completes, which zeroizes
/// the key bytes.
pub struct KeyMaterial {
    inner: SecretBox<Vec<u8>>,
}

impl KeyMaterial {
    pub fn from_vec(key: Vec<u8>) -> Self {
        Self { inner: SecretBox::new(Box::new(key)) }
    }

    pub fn expose_secret(&self) -> &[u8] {
        self.inner.expose_secret()
    }

    pub fn len(&self) -> usize {
        self.inner.expose_secret().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.expose_secret().is_empty()
    }
}

impl From<SecretBox<Vec<u8>>> for KeyMaterial {
    fn from(secret: SecretBox<Vec<u8>>) -> Self {
        Self { inner: secret }
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyMaterial([... {} bytes ...])", self.inner.expose_secret().len())
    }
}
