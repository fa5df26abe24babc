//! Startup wiring: registry population and the reference implementation.

use anyhow::{Context, Result};
use probe::dependency::{Sha256Reference, exercise_dependency};
use probe::{CapabilityProbe, TypeRegistry};
use tracing::{debug, info};

use crate::config::VerifyConfig;
use crate::reference::EquivalentComputation;

impl EquivalentComputation for Sha256Reference {
    fn name(&self) -> &str {
        "sha256"
    }

    fn compute(&self, tag: &str) -> String {
        exercise_dependency(tag)
    }
}

/// Build the registry from every module's registration plus configured
/// capability markers.
pub fn build_registry(config: &VerifyConfig) -> Result<TypeRegistry> {
    let mut builder = TypeRegistry::builder();
    probe::register(&mut builder).context("register probe types")?;
    cube::register(&mut builder).context("register cube types")?;
    for name in &config.capabilities {
        builder
            .register_marker(name)
            .with_context(|| format!("register capability {}", name))?;
        debug!(name = %name, "registered capability marker");
    }
    Ok(builder.build())
}

/// Build and install the process-wide registry, returning a probe over it.
pub fn install_registry(config: &VerifyConfig) -> Result<CapabilityProbe> {
    let registry = build_registry(config)?;
    info!(types = registry.len(), "installing type registry");
    probe::install(registry).context("install type registry")?;
    Ok(CapabilityProbe::global())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube::Cube;

    #[test]
    fn registry_contains_both_modules() {
        let registry = build_registry(&VerifyConfig::default()).expect("registry");
        let names: Vec<&str> = registry.names().map(|name| name.as_str()).collect();
        assert!(names.contains(&"cube.Cube"));
        assert!(names.contains(&"probe.CapabilityProbe"));
        assert!(names.contains(&"probe.dependency.Sha256"));
    }

    #[test]
    fn configured_capabilities_become_markers() {
        let config = VerifyConfig {
            capabilities: vec!["feature.Fast".to_string()],
            ..VerifyConfig::default()
        };
        let registry = build_registry(&config).expect("registry");
        let entry = registry.resolve("feature.Fast").expect("marker");
        assert!(!entry.is_constructible());
    }

    #[test]
    fn capability_colliding_with_module_type_is_rejected() {
        let config = VerifyConfig {
            capabilities: vec!["cube.Cube".to_string()],
            ..VerifyConfig::default()
        };
        let err = build_registry(&config).expect_err("duplicate");
        assert!(format!("{err:#}").contains("already registered"));
    }

    #[test]
    fn sha256_reference_agrees_with_cube() {
        let reference = Sha256Reference;
        assert_eq!(reference.name(), "sha256");
        let cube = Cube::new(7);
        assert_eq!(
            reference.compute(cube.delegated_tag()),
            cube.delegated_computation()
        );
    }
}
