//! PKCS#7 padding for the 16-byte AES block boundary.
//!
//! Padding always adds at least one byte: input already aligned to the block
//! size gains a full extra block. This keeps unpadding unambiguous and means
//! the padded length is always `(len / 16 + 1) * 16`, which is what the
//! container length arithmetic relies on.

use block_padding::array::Array;
use block_padding::array::typenum::U16;
use block_padding::{PaddedData, Padding, Pkcs7};

use crate::config::BLOCK_SIZE;
use crate::error::{Error, Result};

/// Pads `data` to a multiple of 16 bytes.
///
/// Empty input is valid and yields exactly one block of padding.
pub fn pad(data: &[u8]) -> Result<Vec<u8>> {
    match Pkcs7::pad_detached::<U16>(data) {
        PaddedData::Pad { blocks, tail_block } => {
            let mut result = Vec::with_capacity((blocks.len() + 1) * BLOCK_SIZE);
            for block in blocks {
                result.extend_from_slice(block.as_slice());
            }
            result.extend_from_slice(tail_block.as_slice());
            Ok(result)
        }
        // PKCS#7 always emits a tail block; these arms are unreachable for
        // this scheme but the padding API forces them to be handled.
        PaddedData::NoPad { blocks } => {
            let mut result = Vec::with_capacity(blocks.len() * BLOCK_SIZE);
            for block in blocks {
                result.extend_from_slice(block.as_slice());
            }
            Ok(result)
        }
        PaddedData::Error => Err(Error::Encryption("padding error".to_string())),
    }
}

/// Strips and validates PKCS#7 padding.
///
/// The trailing pad byte must be in `1..=16` and every pad byte must carry
/// that value. Any inconsistency means the key was wrong or the data was
/// corrupted, so the failure surfaces as a decryption error.
pub fn unpad(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() || !data.len().is_multiple_of(BLOCK_SIZE) {
        return Err(Error::Decryption("invalid padded data length".to_string()));
    }

    let mut blocks = Vec::with_capacity(data.len() / BLOCK_SIZE);
    for chunk in data.chunks_exact(BLOCK_SIZE) {
        let mut arr = Array::<u8, U16>::default();
        arr.copy_from_slice(chunk);
        blocks.push(arr);
    }

    Pkcs7::unpad_blocks::<U16>(&blocks)
        .map(<[u8]>::to_vec)
        .map_err(|_| Error::Decryption("invalid padding".to_string()))
}
