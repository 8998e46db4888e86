//! Statistical encryption-strength analysis.
//!
//! Quantifies how close a ciphertext is to random noise and how strongly it
//! diverges from the plaintext it came from. [`analyze`] runs the full
//! battery; the individual estimators live in their own modules and work on
//! plain byte slices.

pub mod correlation;
pub mod entropy;
pub mod metrics;
pub mod verdict;

pub use correlation::{Correlations, SampleGrid, adjacent_correlation};
pub use entropy::{byte_histogram, shannon_entropy};
pub use metrics::{Differential, differential_metrics};
pub use verdict::{Verdict, strength_verdict};

use crate::error::Result;

/// The full set of metrics for one (plaintext, ciphertext) pair.
///
/// Built fresh per [`analyze`] call and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Report {
    /// Shannon entropy of the ciphertext, bits per byte.
    pub entropy: f64,
    /// Byte-value frequency counts of the ciphertext, for histogram display.
    pub histogram: [u64; 256],
    /// Adjacent-sample correlation of the ciphertext viewed as one column.
    pub correlations: Correlations,
    /// Percentage of positions where the buffers differ.
    pub npcr: f64,
    /// Mean absolute byte difference as a percentage of 255.
    pub uaci: f64,
    /// Scored qualitative rating.
    pub verdict: Verdict,
}

/// Runs entropy, correlation, NPCR/UACI, and the verdict in one pass.
///
/// Entropy and correlation look at the ciphertext alone (the ciphertext is
/// treated as an n-by-1 grid, so only the vertical correlation direction has
/// pairs); NPCR/UACI compare the buffers position by position and require
/// equal lengths. Any sub-step failure surfaces as
/// [`crate::error::Error::Analysis`].
pub fn analyze(original: &[u8], encrypted: &[u8]) -> Result<Report> {
    let entropy = shannon_entropy(encrypted)?;
    let histogram = byte_histogram(encrypted);
    let correlations = adjacent_correlation(&SampleGrid::column(encrypted));
    let Differential { npcr, uaci } = differential_metrics(original, encrypted)?;
    let verdict = strength_verdict(entropy, &correlations, npcr);

    Ok(Report { entropy, histogram, correlations, npcr, uaci, verdict })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_analyze_identical_buffers() {
        let data: Vec<u8> = (0..=255u8).collect();
        let report = analyze(&data, &data).unwrap();

        assert_eq!(report.npcr, 0.0);
        assert_eq!(report.uaci, 0.0);
        assert!((report.entropy - 8.0).abs() < 1e-9);
        // NPCR of zero caps the score below the Strong band.
        assert_ne!(report.verdict, Verdict::Strong);
    }

    #[test]
    fn test_analyze_dimension_mismatch() {
        let result = analyze(&[0u8; 10], &[0u8; 20]);
        assert!(matches!(result, Err(Error::Analysis(_))));
    }

    #[test]
    fn test_analyze_empty_ciphertext() {
        assert!(analyze(&[], &[]).is_err());
    }

    #[test]
    fn test_analyze_column_grid_leaves_one_direction() {
        let original = vec![0u8; 512];
        let encrypted: Vec<u8> = (0..512u32).map(|i| (i.wrapping_mul(167) % 256) as u8).collect();

        let report = analyze(&original, &encrypted).unwrap();

        assert!(report.correlations.horizontal.is_nan());
        assert!(report.correlations.diagonal.is_nan());
        assert!(!report.correlations.vertical.is_nan());
        assert_eq!(report.histogram.iter().sum::<u64>(), 512);
    }
}
