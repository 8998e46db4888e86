//! Differential sensitivity metrics: NPCR and UACI.
//!
//! Both compare two equal-length buffers position by position. NPCR counts
//! how many positions differ at all; UACI measures how far apart the values
//! are on average. For ciphertext against its plaintext, strong encryption
//! pushes NPCR toward 100% and UACI toward the ~33% expected of uniformly
//! random differences.

use crate::error::{Error, Result};

/// NPCR and UACI, both as percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Differential {
    /// Number of Pixels Change Rate: percentage of positions that differ.
    pub npcr: f64,
    /// Unified Average Changing Intensity: mean absolute byte difference,
    /// normalized by the maximum delta of 255.
    pub uaci: f64,
}

/// Computes NPCR and UACI between two equal-length buffers.
pub fn differential_metrics(original: &[u8], encrypted: &[u8]) -> Result<Differential> {
    if original.len() != encrypted.len() {
        return Err(Error::Analysis(format!(
            "dimension mismatch: {} vs {} bytes",
            original.len(),
            encrypted.len()
        )));
    }
    if original.is_empty() {
        return Err(Error::Analysis("empty buffer".to_string()));
    }

    let total = original.len() as f64;

    let mut changed = 0u64;
    let mut intensity = 0u64;
    for (&a, &b) in original.iter().zip(encrypted) {
        if a != b {
            changed += 1;
        }
        intensity += u64::from(a.abs_diff(b));
    }

    Ok(Differential {
        npcr: 100.0 * changed as f64 / total,
        uaci: 100.0 * intensity as f64 / (255.0 * total),
    })
}
