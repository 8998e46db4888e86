//! Shannon entropy over the byte-value alphabet.

use crate::error::{Error, Result};

/// Counts occurrences of each of the 256 byte values.
///
/// These counts are exactly what a histogram display plots; the entropy
/// computation normalizes them to probabilities.
pub fn byte_histogram(data: &[u8]) -> [u64; 256] {
    let mut freq = [0u64; 256];
    for &byte in data {
        freq[byte as usize] += 1;
    }
    freq
}

/// Computes Shannon entropy in bits per byte.
///
/// Ranges over `[0, 8]`: a buffer of one repeated value scores 0, a uniform
/// byte distribution scores 8. Ciphertext from a healthy cipher should sit
/// close to 8 even when the plaintext was highly structured.
pub fn shannon_entropy(data: &[u8]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::Analysis("empty buffer".to_string()));
    }

    let freq = byte_histogram(data);
    let len = data.len() as f64;

    let mut entropy = 0.0;
    for &count in &freq {
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * p.log2();
        }
    }

    Ok(entropy)
}
