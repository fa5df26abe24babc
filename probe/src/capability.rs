//! Yes/no capability queries over a [`TypeRegistry`].
//!
//! A probe never fails. Every [`ResolveError`](crate::ResolveError) is logged
//! at `debug` and reported as `false`, so "malformed", "not registered" and
//! "hidden" all look the same to the caller.

use std::sync::{Arc, OnceLock};

use tracing::{debug, trace};

use crate::error::InstallError;
use crate::registry::TypeRegistry;

static INSTALLED: OnceLock<Arc<TypeRegistry>> = OnceLock::new();

/// Answers "is this named type available here?" against one registry.
#[derive(Debug, Clone)]
pub struct CapabilityProbe {
    registry: Arc<TypeRegistry>,
}

impl CapabilityProbe {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }

    /// A probe over an empty registry. Every name is absent.
    pub fn empty() -> Self {
        Self::new(Arc::new(TypeRegistry::default()))
    }

    /// A probe over the installed process-wide registry, or an empty one if
    /// nothing has been installed yet.
    pub fn global() -> Self {
        match INSTALLED.get() {
            Some(registry) => Self::new(Arc::clone(registry)),
            None => Self::empty(),
        }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// True iff `name` resolves to a visible registered type.
    pub fn probe(&self, name: &str) -> bool {
        probe_registry(&self.registry, name)
    }
}

/// Install the startup registry for [`probe`]. Only the first call succeeds.
pub fn install(registry: TypeRegistry) -> Result<(), InstallError> {
    let types = registry.len();
    INSTALLED
        .set(Arc::new(registry))
        .map_err(|_| InstallError::AlreadyInstalled)?;
    debug!(types, "type registry installed");
    Ok(())
}

/// The installed process-wide registry, if any.
pub fn installed() -> Option<&'static TypeRegistry> {
    INSTALLED.get().map(Arc::as_ref)
}

/// Probe the process-wide registry. Returns `false` before [`install`].
pub fn probe(name: &str) -> bool {
    match installed() {
        Some(registry) => probe_registry(registry, name),
        None => {
            debug!(name, "no type registry installed");
            false
        }
    }
}

fn probe_registry(registry: &TypeRegistry, name: &str) -> bool {
    match registry.resolve(name) {
        Ok(_) => {
            trace!(name, "capability present");
            true
        }
        Err(err) => {
            debug!(name, error = %err, "capability absent");
            false
        }
    }
}
