//! Verifier configuration stored in `verify.toml`.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use probe::QualifiedName;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default config file name, relative to the working directory.
pub const CONFIG_FILE: &str = "verify.toml";

/// Verifier configuration (TOML).
///
/// Missing fields take their defaults, and a missing file is the same as an
/// empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VerifyConfig {
    /// Extra capability names registered as markers at startup.
    pub capabilities: Vec<String>,

    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl VerifyConfig {
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for name in &self.capabilities {
            QualifiedName::parse(name).with_context(|| "capabilities entry invalid")?;
            if !seen.insert(name.as_str()) {
                return Err(anyhow!("duplicate capability {}", name));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// A missing file yields `VerifyConfig::default()`; capability names are
/// checked either way before the registry is built from them.
pub fn load_config(path: &Path) -> Result<VerifyConfig> {
    let cfg: VerifyConfig = match fs::read_to_string(path) {
        Ok(contents) => {
            toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            VerifyConfig::default()
        }
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Write config to a sibling `<name>.tmp` file, then rename it over `path`.
pub fn write_config(path: &Path, cfg: &VerifyConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    fs::write(&tmp_path, buf).with_context(|| format!("write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    debug!(path = %path.display(), "config written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, VerifyConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("verify.toml");
        let cfg = VerifyConfig {
            capabilities: vec!["feature.Fast".to_string()],
            report: ReportConfig {
                format: ReportFormat::Json,
            },
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn write_creates_parent_and_leaves_no_temp_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("verify.toml");
        write_config(&path, &VerifyConfig::default()).expect("write");

        assert!(path.exists());
        assert!(!temp.path().join("nested").join("verify.toml.tmp").exists());
    }

    #[test]
    fn load_rejects_invalid_capability_on_disk() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("verify.toml");
        fs::write(&path, "capabilities = [\"cube..Cube\"]\n").expect("write");

        let err = load_config(&path).expect_err("invalid capability");
        assert!(format!("{err:#}").contains("capabilities entry invalid"));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: VerifyConfig = toml::from_str("[report]\nformat = \"json\"\n").expect("parse");
        assert!(cfg.capabilities.is_empty());
        assert_eq!(cfg.report.format, ReportFormat::Json);
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = VerifyConfig {
            capabilities: vec!["not a name".to_string()],
            ..VerifyConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = VerifyConfig {
            capabilities: vec!["a.B".to_string(), "a.B".to_string()],
            ..VerifyConfig::default()
        };
        let err = cfg.validate().expect_err("duplicate");
        assert!(err.to_string().contains("duplicate capability"));
    }
}
