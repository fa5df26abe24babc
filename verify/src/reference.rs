//! The reference side of delegated-equivalence checks.
//!
//! Whoever links the external library supplies an implementation; the
//! verifier only sees this trait.

/// An independently implemented equivalent of a module's delegated computation.
pub trait EquivalentComputation {
    /// Short label recorded in check outcomes.
    fn name(&self) -> &str;

    /// The reference output for `tag`.
    fn compute(&self, tag: &str) -> String;
}
