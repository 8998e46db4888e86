//! Error kinds for the crypto and analysis core.
//!
//! The core signals failures through one enum so callers can branch on the
//! kind instead of matching message strings. Two kinds deserve care:
//!
//! - [`Error::Decryption`] covers both padding-validation failure and
//!   cipher-level failure. The container carries no authentication tag, so a
//!   wrong password and corrupted ciphertext surface identically; callers
//!   must not try to tell them apart.
//! - [`Error::MalformedContainer`] only means the buffer is too short to
//!   hold a salt and IV. Any 32-byte-or-longer buffer is structurally
//!   accepted even if it was never produced by this tool.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The password is empty.
    #[error("invalid password: {0}")]
    InvalidPassword(&'static str),

    /// The underlying KDF rejected its inputs.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// Cipher initialization or padding failed during encryption.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Bad ciphertext length, cipher failure, or inconsistent padding.
    ///
    /// With no authentication tag this is the only signal that the password
    /// was wrong or the data was tampered with; callers must not try to
    /// tell those cases apart.
    #[error("decryption failed: {0}")]
    Decryption(String),

    /// The container is shorter than the fixed salt + IV prefix.
    #[error("malformed container: {0}")]
    MalformedContainer(String),

    /// Empty input, dimension mismatch, or degenerate statistics.
    #[error("analysis failed: {0}")]
    Analysis(String),
}
