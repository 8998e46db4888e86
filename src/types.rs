//! Common type definitions shared by the CLI, file, and UI layers.

use std::fmt::{Display, Formatter, Result};
use std::path::PathBuf;

/// The file operation the user asked for.
///
/// Drives output-path derivation and which files the wizard offers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProcessorMode {
    /// Encrypt the file, producing a `.csx` container.
    Encrypt,

    /// Decrypt a `.csx` container, removing the extension.
    Decrypt,
}

impl ProcessorMode {
    /// All modes the wizard can offer, in menu order.
    pub const ALL: &'static [Self] = &[Self::Encrypt, Self::Decrypt];

    /// Returns a human-readable label for the mode.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypt",
            Self::Decrypt => "Decrypt",
        }
    }
}

impl Display for ProcessorMode {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

/// A discovered file, annotated for the wizard's file table.
pub struct FileInfo {
    pub path: PathBuf,
    pub size: u64,
    pub is_encrypted: bool,
}
