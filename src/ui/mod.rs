//! User interface components for terminal interaction.
//!
//! # Modules
//!
//! - [`display`]: banner, file tables, analysis report rendering
//! - [`progress`]: spinner for the CPU-bound derivation and cipher step
//! - [`prompt`]: interactive password and selection dialogs

pub mod display;
pub mod progress;
pub mod prompt;
