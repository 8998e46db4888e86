//! High-level file encryption, decryption, and analysis operations.
//!
//! Glue between the filesystem and the pure cores: read the whole input,
//! run the operation in memory, write the whole output. Nothing is written
//! until the output buffer is complete.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::analysis::{self, Report};
use crate::container::Container;
use crate::crypto;
use crate::file::{read_file, write_file};
use crate::secret::Password;

/// Encrypts a file into a `.csx` container.
#[tracing::instrument(skip_all, fields(src = %src_path.display()))]
pub fn encrypt(src_path: &Path, dest_path: &Path, password: &Password) -> Result<()> {
    let plaintext = read_file(src_path)?;
    if plaintext.is_empty() {
        bail!("cannot encrypt a file with zero size");
    }

    let (salt, iv, ciphertext) = crypto::encrypt(&plaintext, password)?;
    debug!(salt = %hex::encode(salt), iv = %hex::encode(iv), bytes = ciphertext.len(), "encrypted");

    let container = Container::new(salt, iv, ciphertext);
    write_file(dest_path, &container.marshal())
}

/// Decrypts a `.csx` container back to the original bytes.
#[tracing::instrument(skip_all, fields(src = %src_path.display()))]
pub fn decrypt(src_path: &Path, dest_path: &Path, password: &Password) -> Result<()> {
    let data = read_file(src_path)?;

    let container = Container::unmarshal(&data).with_context(|| format!("not an encrypted container: {}", src_path.display()))?;

    let plaintext = crypto::decrypt(container.ciphertext(), container.salt(), container.iv(), password)
        .context("incorrect password or corrupt file")?;
    debug!(bytes = plaintext.len(), "decrypted");

    write_file(dest_path, &plaintext)
}

/// Analyzes an (original file, encrypted container file) pair.
pub fn analyze(original_path: &Path, encrypted_path: &Path) -> Result<Report> {
    let original = read_file(original_path)?;
    let data = read_file(encrypted_path)?;

    let container = Container::unmarshal(&data).with_context(|| format!("not an encrypted container: {}", encrypted_path.display()))?;

    analyze_buffers(&original, container.ciphertext())
}

/// Analyzes an in-memory (plaintext, ciphertext) pair.
///
/// The differential metrics need equal-length buffers, but padding makes
/// ciphertext strictly longer than its plaintext; the comparison therefore
/// runs over the original's length. The trailing padding block is ciphertext
/// like any other, so dropping it does not skew the sampled metrics.
pub fn analyze_buffers(original: &[u8], ciphertext: &[u8]) -> Result<Report> {
    if ciphertext.len() < original.len() {
        bail!(
            "ciphertext ({} bytes) is shorter than the original ({} bytes); wrong pair of files?",
            ciphertext.len(),
            original.len()
        );
    }

    let report = analysis::analyze(original, &ciphertext[..original.len()])?;
    debug!(entropy = report.entropy, npcr = report.npcr, verdict = %report.verdict, "analyzed");

    Ok(report)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("source.png");
        let enc_path = dir.path().join("source.png.csx");
        let dec_path = dir.path().join("restored.png");

        let original_content = b"not really a png, but the cipher does not care";
        std::fs::write(&src_path, original_content).unwrap();

        let password = Password::new("test_password_123");
        encrypt(&src_path, &enc_path, &password).unwrap();
        assert!(enc_path.exists());

        decrypt(&enc_path, &dec_path, &password).unwrap();
        assert_eq!(std::fs::read(&dec_path).unwrap(), original_content);
    }

    #[test]
    fn test_container_layout_on_disk() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("data.bin");
        let enc_path = dir.path().join("data.bin.csx");

        std::fs::write(&src_path, [0xAAu8; 100]).unwrap();
        encrypt(&src_path, &enc_path, &Password::new("pw")).unwrap();

        // 32-byte prefix plus 100 bytes padded up to 112.
        let written = std::fs::read(&enc_path).unwrap();
        assert_eq!(written.len(), 32 + 112);
    }

    #[test]
    fn test_decrypt_wrong_password() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("source.txt");
        let enc_path = dir.path().join("source.txt.csx");
        let dec_path = dir.path().join("restored.txt");

        std::fs::write(&src_path, b"Test content").unwrap();
        encrypt(&src_path, &enc_path, &Password::new("correct_password")).unwrap();

        let result = decrypt(&enc_path, &dec_path, &Password::new("wrong_password"));
        match result {
            Err(_) => {}
            // Padding can coincidentally validate; the output must differ.
            Ok(()) => assert_ne!(std::fs::read(&dec_path).unwrap(), b"Test content"),
        }
    }

    #[test]
    fn test_decrypt_rejects_truncated_container() {
        let dir = tempdir().unwrap();
        let enc_path = dir.path().join("short.csx");
        let dec_path = dir.path().join("out.bin");

        std::fs::write(&enc_path, [0u8; 31]).unwrap();
        assert!(decrypt(&enc_path, &dec_path, &Password::new("pw")).is_err());
    }

    #[test]
    fn test_encrypt_rejects_empty_file() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("empty");
        let enc_path = dir.path().join("empty.csx");

        std::fs::write(&src_path, b"").unwrap();
        assert!(encrypt(&src_path, &enc_path, &Password::new("pw")).is_err());
    }

    #[test]
    fn test_degenerate_plaintext_encrypts_to_noise() {
        // CBC with a random key and IV must destroy even all-zero structure.
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("zeros.bin");
        let enc_path = dir.path().join("zeros.bin.csx");

        let original = vec![0u8; 1024];
        std::fs::write(&src_path, &original).unwrap();
        encrypt(&src_path, &enc_path, &Password::new("test1234")).unwrap();

        let report = analyze(&src_path, &enc_path).unwrap();
        assert!(report.entropy > 7.5, "entropy {} too low", report.entropy);
        assert!(report.npcr > 90.0);

        let container = Container::unmarshal(&std::fs::read(&enc_path).unwrap()).unwrap();
        assert!(container.ciphertext().iter().any(|&b| b != 0));
    }

    #[test]
    fn test_analyze_buffers_rejects_short_ciphertext() {
        assert!(analyze_buffers(&[0u8; 64], &[0u8; 32]).is_err());
    }
}
