//! Cross-module verification harness.
//!
//! Runs suites of checks against the `cube` value object and the `probe`
//! capability registry:
//!
//! - **[`suite`]**: TOML suite files and their validation.
//! - **[`check`]**: executes checks and records a [`check::Judgment`].
//! - **[`reference`]**: the injected [`reference::EquivalentComputation`] that
//!   delegated values are compared against. The verifier itself never links
//!   the digest library.
//! - **[`startup`]**: builds and installs the type registry from every
//!   module's registration function.
//!
//! [`cli`] wires these into the `verify` binary.

pub mod check;
pub mod cli;
pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod outcome;
pub mod reference;
pub mod report;
pub mod startup;
pub mod suite;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
