use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::config::FILE_EXTENSION;
use crate::types::{FileInfo, ProcessorMode};

/// Reads a whole file into memory.
///
/// Both encryption and analysis need the complete buffer at once, so there
/// is no streaming path.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Writes a complete buffer, creating parent directories as needed.
///
/// The buffer is fully materialized before this is called, so a failure
/// here never leaves a partially encrypted plaintext on disk, only a
/// truncated output the caller can delete.
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to create file: {}", path.display()))?;

    file.write_all(data).with_context(|| format!("failed to write file: {}", path.display()))
}

#[must_use = "the returned FileInfo should be used"]
pub fn get_file_info(path: &Path) -> Result<Option<FileInfo>> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("stat failed: {}", path.display())),
    };

    Ok(Some(FileInfo { path: path.to_path_buf(), size: meta.len(), is_encrypted: is_encrypted_file(path) }))
}

pub fn get_file_info_list(paths: &[PathBuf]) -> Result<Vec<FileInfo>> {
    paths.iter().map(|path| get_file_info(path)?.ok_or_else(|| anyhow!("file not found: {}", path.display()))).collect()
}

/// Derives the output path from the input path and mode.
///
/// Encryption appends the container extension; decryption strips it, or
/// leaves the path untouched when the input was not named by this tool.
#[inline]
#[must_use]
pub fn get_output_path(input: &Path, mode: ProcessorMode) -> PathBuf {
    match mode {
        ProcessorMode::Encrypt => {
            let mut name = input.as_os_str().to_os_string();
            name.push(FILE_EXTENSION);
            PathBuf::from(name)
        }
        ProcessorMode::Decrypt => input.to_string_lossy().strip_suffix(FILE_EXTENSION).map_or_else(|| input.to_path_buf(), PathBuf::from),
    }
}

#[inline]
#[must_use]
pub fn is_encrypted_file(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().ends_with(FILE_EXTENSION)
}
