//! Interactive prompts for wizard mode.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow, ensure};
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, Password, PasswordDisplayMode, Select};

use crate::types::ProcessorMode;

/// Interactive prompt handler for wizard mode.
pub struct Prompt {
    /// Minimum password length required when setting a new password.
    password_min_length: usize,
}

impl Prompt {
    pub fn new(password_min_length: usize) -> Self {
        Self { password_min_length }
    }

    /// Prompts for an encryption password, entered twice to catch typos.
    ///
    /// The minimum-length rule only applies here: this is where a password
    /// gets chosen, so it is the one chance to steer users away from weak
    /// ones.
    pub fn encryption_password(&self) -> Result<String> {
        let min_length = self.password_min_length;
        let validator = move |input: &str| -> std::result::Result<Validation, CustomUserError> {
            if input.trim().is_empty() {
                Ok(Validation::Invalid("password cannot be empty or whitespace only".into()))
            } else if input.len() < min_length {
                Ok(Validation::Invalid(format!("password must be at least {min_length} characters long").into()))
            } else {
                Ok(Validation::Valid)
            }
        };

        Password::new("Enter encryption password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_validator(validator)
            .with_custom_confirmation_message("Confirm password:")
            .with_custom_confirmation_error_message("passwords do not match")
            .prompt()
            .map_err(|e| anyhow!("password input failed: {e}"))
    }

    /// Prompts for a decryption password.
    ///
    /// Single entry, and no length rule: the password was chosen earlier,
    /// possibly under a different policy. A wrong password surfaces as a
    /// decryption failure, the only signal the format has.
    pub fn decryption_password(&self) -> Result<String> {
        Password::new("Enter decryption password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .with_validator(|input: &str| -> std::result::Result<Validation, CustomUserError> {
                if input.is_empty() {
                    Ok(Validation::Invalid("password cannot be empty".into()))
                } else {
                    Ok(Validation::Valid)
                }
            })
            .prompt()
            .map_err(|e| anyhow!("password input failed: {e}"))
    }

    /// Prompts the user to select encryption or decryption mode.
    pub fn select_processing_mode(&self) -> Result<ProcessorMode> {
        Select::new("Select operation", ProcessorMode::ALL.to_vec())
            .prompt()
            .map_err(|e| anyhow!("mode selection failed: {e}"))
    }

    /// Prompts the user to select a file from the discovered list.
    pub fn select_file(&self, files: &[PathBuf]) -> Result<PathBuf> {
        ensure!(!files.is_empty(), "no files available for selection");

        let display_names: Vec<String> = files
            .iter()
            .map(|path| path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()))
            .collect();

        let selection = Select::new("Select file", display_names)
            .raw_prompt()
            .map_err(|e| anyhow!("file selection failed: {e}"))?;

        Ok(files[selection.index].clone())
    }

    /// Asks whether an existing output file may be overwritten.
    pub fn confirm_overwrite(&self, path: &Path) -> Result<bool> {
        let filename = path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        self.confirm(&format!("Output file {filename} already exists. Overwrite?"))
    }

    /// Asks whether the source file should be deleted after processing.
    pub fn confirm_deletion(&self, path: &Path, file_type: &str) -> Result<bool> {
        let filename = path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        self.confirm(&format!("Delete {file_type} file {filename}?"))
    }

    /// Asks whether to analyze the encryption strength of the fresh output.
    pub fn confirm_analysis(&self) -> Result<bool> {
        self.confirm("Analyze encryption strength now?")
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        Confirm::new(prompt)
            .with_default(false)
            .prompt()
            .map_err(|e| anyhow!("confirmation failed: {e}"))
    }
}
