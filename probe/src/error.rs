//! Error types for name parsing, registration, and resolution.

use thiserror::Error;

/// The input is not a dot-separated qualified identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed type name {name:?}: {reason}")]
pub struct MalformedName {
    pub name: String,
    pub reason: &'static str,
}

/// Why a name could not be resolved to a registered type.
///
/// Only [`TypeRegistry::resolve`](crate::TypeRegistry::resolve) surfaces this.
/// The probe entry points collapse every variant to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Malformed(#[from] MalformedName),

    /// Well-formed, but nothing is registered under this name.
    #[error("type not found: {0}")]
    NotFound(String),

    /// Registered, but not visible to probes.
    #[error("type not visible: {0}")]
    NotVisible(String),
}

/// Startup registration failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("cannot register: {0}")]
    Malformed(#[from] MalformedName),

    #[error("type already registered: {0}")]
    Duplicate(String),
}

/// Failure to install the process-wide registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InstallError {
    #[error("a type registry is already installed")]
    AlreadyInstalled,
}
