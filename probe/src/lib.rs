//! Capability probing by qualified type name.
//!
//! Types are made resolvable by registering them into a [`RegistryBuilder`] at
//! startup. Once built, a [`TypeRegistry`] is frozen and never invalidated, so
//! a probe for a given name answers the same way for the life of the process.
//!
//! - **[`name`]**: parsing of dot-separated qualified names.
//! - **[`registry`]**: the registry itself and its fallible `resolve` path.
//! - **[`capability`]**: the yes/no [`CapabilityProbe`] and the process-wide
//!   registry consulted by [`probe()`].
//! - **[`dependency`]**: an independent exercise of the linked digest library,
//!   used by verifiers as the reference side of an equivalence check.

pub mod capability;
pub mod dependency;
pub mod error;
pub mod name;
pub mod registry;

pub use capability::{CapabilityProbe, install, installed, probe};
pub use error::{InstallError, MalformedName, RegisterError, ResolveError};
pub use name::QualifiedName;
pub use registry::{RegisteredType, RegistryBuilder, TypeRegistry, Visibility};

/// Register the types this crate exposes.
pub fn register(builder: &mut RegistryBuilder) -> Result<(), RegisterError> {
    builder.register("probe.CapabilityProbe", CapabilityProbe::empty)?;
    builder.register("probe.dependency.Sha256", || dependency::Sha256Reference)?;
    Ok(())
}
