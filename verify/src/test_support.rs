//! Test-only helpers for verifier tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use cube::Cube;
use probe::CapabilityProbe;
use tempfile::TempDir;

use crate::config::{VerifyConfig, write_config};
use crate::reference::EquivalentComputation;
use crate::startup::build_registry;

/// Reference that returns the same value for every tag.
#[derive(Debug, Clone)]
pub struct FixedReference {
    value: String,
}

impl FixedReference {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// A reference that agrees with `Cube::delegated_computation`.
    pub fn matching_cube() -> Self {
        Self {
            value: Cube::default().delegated_computation(),
        }
    }
}

impl EquivalentComputation for FixedReference {
    fn name(&self) -> &str {
        "fixed"
    }

    fn compute(&self, _tag: &str) -> String {
        self.value.clone()
    }
}

/// Reference that records every tag it is asked for and answers with the
/// real digest.
#[derive(Debug, Default)]
pub struct RecordingReference {
    tags: Mutex<Vec<String>>,
}

impl RecordingReference {
    pub fn tags(&self) -> Vec<String> {
        self.tags.lock().expect("tags lock").clone()
    }
}

impl EquivalentComputation for RecordingReference {
    fn name(&self) -> &str {
        "recording"
    }

    fn compute(&self, tag: &str) -> String {
        self.tags.lock().expect("tags lock").push(tag.to_string());
        probe::dependency::exercise_dependency(tag)
    }
}

/// A probe over the default startup registry, without installing it.
pub fn sample_probe() -> CapabilityProbe {
    let registry = build_registry(&VerifyConfig::default()).expect("default registry");
    CapabilityProbe::new(Arc::new(registry))
}

/// Scratch directory for CLI and file-loading tests.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir().context("create tempdir")?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `suites/<file>` and return its path.
    pub fn write_suite(&self, file: &str, contents: &str) -> Result<PathBuf> {
        let dir = self.path().join("suites");
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        let path = dir.join(file);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Write `verify.toml` into the workspace root.
    pub fn write_config(&self, cfg: &VerifyConfig) -> Result<PathBuf> {
        let path = self.path().join(crate::config::CONFIG_FILE);
        write_config(&path, cfg)?;
        Ok(path)
    }
}

/// A minimal one-check suite body.
pub fn single_check_suite(id: &str, check_toml: &str) -> String {
    format!("[suite]\nid = \"{id}\"\ndescription = \"{id} suite\"\n\n[[checks]]\n{check_toml}\n")
}
