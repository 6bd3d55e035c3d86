//! Content hash of a result, for determinism checks and run comparison.

use crate::result::TreatmentResult;
use sha2::{Digest, Sha256};

/// SHA-256 over the bit patterns of every field, in `fields()` order.
pub fn fingerprint(result: &TreatmentResult) -> String {
    let mut hasher = Sha256::new();
    for (name, value) in result.fields() {
        hasher.update(name.as_bytes());
        hasher.update(value.to_bits().to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

impl TreatmentResult {
    pub fn fingerprint(&self) -> String {
        fingerprint(self)
    }
}
