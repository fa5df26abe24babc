//! Suite file parsing and validation.
//!
//! Suites are TOML files listing checks. `suites/cube.toml` is the built-in
//! suite, also embedded in the binary for `verify run` with no path.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Contents of the built-in suite.
pub const BUILTIN_SUITE: &str = include_str!("../suites/cube.toml");

/// File name the built-in suite is written under by `verify init`.
pub const BUILTIN_SUITE_FILE: &str = "cube.toml";

/// A parsed suite file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SuiteFile {
    pub suite: SuiteMeta,
    #[serde(default)]
    pub checks: Vec<Check>,
}

/// Suite metadata.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SuiteMeta {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    pub description: String,
}

/// A single assertion.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Check {
    /// `Cube::new(n).to_string()` equals `expected` exactly.
    CubeDisplay { n: i64, expected: String },
    /// `Cube::new(n).delegated_computation()` equals the reference output for
    /// the cube's own delegated tag.
    DelegatedEquivalence { n: i64 },
    /// Probing `name` yields `expect`. Any string is accepted as a name.
    Probe { name: String, expect: bool },
    /// Probing `name` twice yields the same answer.
    ProbeIdempotent { name: String },
}

impl SuiteFile {
    /// Load and validate a suite file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read suite {}", path.display()))?;
        Self::parse_str(&contents).with_context(|| format!("load suite {}", path.display()))
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        let suite: SuiteFile = toml::from_str(contents).context("parse suite")?;
        suite.validate()?;
        Ok(suite)
    }

    /// The embedded built-in suite.
    pub fn builtin() -> Result<Self> {
        Self::parse_str(BUILTIN_SUITE).context("built-in suite")
    }

    fn validate(&self) -> Result<()> {
        validate_suite_id(&self.suite.id)?;
        if self.suite.description.trim().is_empty() {
            bail!("suite.description must be non-empty");
        }
        if self.checks.is_empty() {
            bail!("checks must be a non-empty array");
        }
        for (index, check) in self.checks.iter().enumerate() {
            check
                .validate()
                .with_context(|| format!("checks[{}] invalid", index))?;
        }
        Ok(())
    }
}

impl Check {
    fn validate(&self) -> Result<()> {
        if let Check::CubeDisplay { expected, .. } = self
            && expected.is_empty()
        {
            bail!("cube_display.expected must be non-empty");
        }
        Ok(())
    }
}

/// A suite file found on disk, with the path it was loaded from.
#[derive(Debug, Clone)]
pub struct DiscoveredSuite {
    pub path: PathBuf,
    pub file: SuiteFile,
}

/// Load every `*.toml` suite in `dir`, ordered by file name.
///
/// Suites are addressed by path on the command line, so two files may share
/// an id. A missing directory holds no suites.
pub fn discover_suites(dir: &Path) -> Result<Vec<DiscoveredSuite>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            return Err(err).with_context(|| format!("read suites dir {}", dir.display()));
        }
    };
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("read suite entry")?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("toml") {
            paths.push(path);
        }
    }
    paths.sort();
    paths
        .into_iter()
        .map(|path| {
            let file = SuiteFile::load(&path)?;
            Ok(DiscoveredSuite { path, file })
        })
        .collect()
}

fn validate_suite_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("suite.id must be non-empty");
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        bail!("suite.id must use [a-z0-9_-] only");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_suite_parses() {
        let suite = SuiteFile::builtin().expect("builtin");
        assert_eq!(suite.suite.id, "cube-fixture");
        assert_eq!(
            suite.checks[0],
            Check::CubeDisplay {
                n: 7,
                expected: "[Cube 7]".to_string(),
            }
        );
    }

    #[test]
    fn parses_every_check_type() {
        let input = r#"
[suite]
id = "all-types"
description = "one of each"

[[checks]]
type = "cube_display"
n = -3
expected = "[Cube -3]"

[[checks]]
type = "delegated_equivalence"
n = 7

[[checks]]
type = "probe"
name = ""
expect = false

[[checks]]
type = "probe_idempotent"
name = "cube.Cube"
"#;
        let suite = SuiteFile::parse_str(input).expect("suite parses");
        assert_eq!(suite.checks.len(), 4);
        assert_eq!(suite.checks[1], Check::DelegatedEquivalence { n: 7 });
    }

    #[test]
    fn rejects_invalid_id() {
        let input = r#"
[suite]
id = "Bad/Id"
description = "x"

[[checks]]
type = "probe_idempotent"
name = "cube.Cube"
"#;
        let err = SuiteFile::parse_str(input).expect_err("invalid id");
        assert!(err.to_string().contains("suite.id"));
    }

    #[test]
    fn rejects_empty_checks() {
        let input = r#"
[suite]
id = "empty"
description = "nothing to do"
"#;
        let err = SuiteFile::parse_str(input).expect_err("no checks");
        assert!(err.to_string().contains("checks"));
    }

    #[test]
    fn rejects_empty_expectation() {
        let input = r#"
[suite]
id = "blank"
description = "x"

[[checks]]
type = "cube_display"
n = 1
expected = ""
"#;
        let err = SuiteFile::parse_str(input).expect_err("blank expected");
        assert!(format!("{err:#}").contains("cube_display.expected"));
    }

    #[test]
    fn rejects_unknown_check_type() {
        let input = r#"
[suite]
id = "unknown"
description = "x"

[[checks]]
type = "file_exists"
path = "main.go"
"#;
        assert!(SuiteFile::parse_str(input).is_err());
    }

    #[test]
    fn discover_orders_by_file_name_and_keeps_shared_ids() {
        let temp = tempfile::tempdir().expect("tempdir");
        let suite = |id: &str| {
            format!(
                "[suite]\nid = \"{id}\"\ndescription = \"d\"\n\n[[checks]]\ntype = \"probe_idempotent\"\nname = \"x\"\n"
            )
        };
        fs::write(temp.path().join("b.toml"), suite("beta")).expect("write");
        fs::write(temp.path().join("a.toml"), suite("alpha")).expect("write");
        fs::write(temp.path().join("notes.md"), "ignored").expect("write");

        fs::write(temp.path().join("c.toml"), suite("alpha")).expect("write");

        let found = discover_suites(temp.path()).expect("discover");
        let ids: Vec<&str> = found.iter().map(|found| found.file.suite.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "beta", "alpha"]);
        assert_eq!(found[2].path, temp.path().join("c.toml"));
    }

    #[test]
    fn discover_reports_broken_suite_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("bad.toml"), "[suite]\nid = \"Bad Id\"\n").expect("write");
        assert!(discover_suites(temp.path()).is_err());
    }

    #[test]
    fn discover_missing_dir_is_empty() {
        let temp = tempfile::tempdir().expect("tempdir");
        let suites = discover_suites(&temp.path().join("missing")).expect("discover");
        assert!(suites.is_empty());
    }
}
