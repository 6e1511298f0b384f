//! Shared SHA-256 helper.
//!
//! Used by `sampler` to derive RNG seeds and by `code` to fingerprint a
//! selection, so both hash the same way.

use sha2::{Digest, Sha256};

/// Compute the raw SHA-256 digest of the given bytes.
pub fn sha256_bytes(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}
