//! Identity hashes over normalized text.
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || normalized_bytes)
//! ```
//!
//! Two documents with the same identity hash normalize to the same text, which
//! the detector reports as an exact duplicate.

use sha2::{Digest, Sha256};

/// Version-aware identity hash of normalized text, hex encoded.
pub fn hash_canonical_bytes(canonical_version: u32, canonical_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_version.to_be_bytes());
    hasher.update([0]);
    hasher.update(canonical_bytes);
    hex::encode(hasher.finalize())
}
