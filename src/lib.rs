//! CipherScope - password-based file encryption with a built-in
//! encryption-strength analyzer.
//!
//! The crypto side encrypts arbitrary bytes with:
//! - AES-256-CBC with PKCS7 padding
//! - PBKDF2-HMAC-SHA256 key derivation (200k iterations)
//! - a flat `salt ‖ iv ‖ ciphertext` container format
//!
//! The analysis side quantifies how indistinguishable a ciphertext is from
//! random noise: Shannon entropy, adjacent-sample correlation, NPCR/UACI
//! differential metrics, and a scored verdict.
//!
//! The cores in [`crypto`], [`container`], and [`analysis`] are pure
//! functions over in-memory buffers; file I/O and the terminal UI live in
//! the outer modules.

pub mod analysis;
pub mod app;
pub mod config;
pub mod container;
pub mod crypto;
pub mod error;
pub mod file;
pub mod padding;
pub mod processor;
pub mod secret;
pub mod types;
pub mod ui;
