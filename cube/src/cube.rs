use std::fmt;

use crate::digest::base_digest;

/// Tag the delegated computation is parameterized by.
pub const BASE_TAG: &str = "BASE";

/// Immutable integer value with a fixed display format.
///
/// `Cube::new(7).to_string()` is always `"[Cube 7]"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cube {
    n: i64,
}

impl Cube {
    pub const fn new(n: i64) -> Self {
        Self { n }
    }

    pub const fn n(&self) -> i64 {
        self.n
    }

    /// Tag passed to the digest library by [`Cube::delegated_computation`].
    pub const fn delegated_tag(&self) -> &'static str {
        BASE_TAG
    }

    /// The digest library's output for [`Cube::delegated_tag`].
    pub fn delegated_computation(&self) -> String {
        base_digest().to_string()
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Cube {}]", self.n)
    }
}

/// A `Cube` carried under its own name; shares the base cube's computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExtendedCube {
    base: Cube,
}

impl ExtendedCube {
    pub const fn new(n: i64) -> Self {
        Self { base: Cube::new(n) }
    }

    pub const fn base(&self) -> Cube {
        self.base
    }

    pub fn delegated_computation(&self) -> String {
        self.base.delegated_computation()
    }
}

impl fmt::Display for ExtendedCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ExtendedCube {}]", self.base.n())
    }
}
