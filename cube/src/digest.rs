//! This module's own linkage to the SHA-256 library.

use std::sync::OnceLock;

use sha2::{Digest, Sha256};

use crate::cube::BASE_TAG;

static BASE_DIGEST: OnceLock<String> = OnceLock::new();

/// Lowercase hex SHA-256 of `tag`, computed in one shot.
pub fn tagged_digest(tag: &str) -> String {
    hex::encode(Sha256::digest(tag.as_bytes()))
}

/// Cached digest of [`BASE_TAG`].
pub(crate) fn base_digest() -> &'static str {
    BASE_DIGEST.get_or_init(|| tagged_digest(BASE_TAG))
}

/// Registry initializer for `cube.Cube`.
pub(crate) fn warm_base_digest() {
    base_digest();
}

/// A tag paired with its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedDigest {
    tag: String,
    hex: String,
}

impl TaggedDigest {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            hex: tagged_digest(tag),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }
}
