use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

use crate::file::operations::is_encrypted_file;
use crate::file::validation::is_excluded;
use crate::types::ProcessorMode;

/// Walks the current directory for files the wizard can offer.
///
/// Encryption mode lists plain files, decryption mode lists `.csx`
/// containers. Hidden files and excluded patterns are skipped; unreadable
/// directories are silently ignored rather than aborting the walk.
pub fn find_eligible_files(mode: ProcessorMode) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(".").follow_links(false).into_iter().filter_map(std::result::Result::ok) {
        let path = entry.path();
        if entry.file_type().is_file() && is_eligible(path, mode) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn is_eligible(path: &Path, mode: ProcessorMode) -> bool {
    if let Some(name) = path.file_name()
        && name.to_string_lossy().starts_with('.')
    {
        return false;
    }

    if is_excluded(path) {
        return false;
    }

    let is_encrypted = is_encrypted_file(path);
    match mode {
        ProcessorMode::Encrypt => !is_encrypted,
        ProcessorMode::Decrypt => is_encrypted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_eligible_encrypt() {
        assert!(is_eligible(Path::new("document.txt"), ProcessorMode::Encrypt));
        assert!(!is_eligible(Path::new("document.csx"), ProcessorMode::Encrypt));
        assert!(!is_eligible(Path::new(".hidden"), ProcessorMode::Encrypt));
    }

    #[test]
    fn test_is_eligible_decrypt() {
        assert!(is_eligible(Path::new("document.csx"), ProcessorMode::Decrypt));
        assert!(!is_eligible(Path::new("document.txt"), ProcessorMode::Decrypt));
    }

    #[test]
    fn test_is_eligible_skips_excluded() {
        assert!(!is_eligible(Path::new("target/debug/app"), ProcessorMode::Encrypt));
        assert!(!is_eligible(Path::new("src/main.rs"), ProcessorMode::Encrypt));
    }
}
