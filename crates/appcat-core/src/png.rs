//! # PNG Signature Check
//!
//! Logo files are only checked for the canonical 8-byte PNG file signature.
//! Chunks are not parsed.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::AppcatError;

/// The PNG file signature: `\x89PNG\r\n\x1a\n`.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

/// Returns true if `bytes` starts with [`PNG_SIGNATURE`].
///
/// Inputs shorter than the signature are never valid.
pub fn has_png_signature(bytes: &[u8]) -> bool {
    bytes.len() >= PNG_SIGNATURE.len() && bytes[..PNG_SIGNATURE.len()] == PNG_SIGNATURE
}

/// Read the leading bytes of the file at `path` and check the signature.
pub fn file_has_png_signature(path: &Path) -> Result<bool, AppcatError> {
    let file = File::open(path).map_err(|e| AppcatError::io(path, e))?;
    let mut head = Vec::with_capacity(PNG_SIGNATURE.len());
    file.take(PNG_SIGNATURE.len() as u64)
        .read_to_end(&mut head)
        .map_err(|e| AppcatError::io(path, e))?;
    Ok(has_png_signature(&head))
}
