//! Independent exercise of the linked digest library.
//!
//! Verifiers compare this against the value a module derives through its own
//! linkage to the same library. This side uses the incremental hasher API.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `tag`, computed with the incremental hasher.
pub fn exercise_dependency(tag: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(tag.as_bytes());
    hex::encode(hasher.finalize())
}

/// Registry handle for the dependency exercise; verifiers use it as their
/// equivalence reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Reference;
