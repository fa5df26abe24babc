//! Check execution and outcome recording.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use cube::Cube;
use probe::CapabilityProbe;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::reference::EquivalentComputation;
use crate::suite::{Check, SuiteFile};

/// Everything a check needs besides its own parameters.
pub struct Verifier<'a> {
    pub probe: &'a CapabilityProbe,
    pub reference: &'a dyn EquivalentComputation,
}

/// Collected check outcomes for one suite run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Judgment {
    pub suite_id: String,
    pub started_at: String,
    pub finished_at: String,
    pub checks: Vec<CheckOutcome>,
}

/// Result of running a single check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckOutcome {
    CubeDisplay {
        n: i64,
        expected: String,
        actual: String,
        passed: bool,
    },
    DelegatedEquivalence {
        n: i64,
        tag: String,
        reference: String,
        expected: String,
        actual: String,
        passed: bool,
    },
    Probe {
        name: String,
        expect: bool,
        actual: bool,
        passed: bool,
    },
    ProbeIdempotent {
        name: String,
        first: bool,
        second: bool,
        passed: bool,
    },
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        match self {
            CheckOutcome::CubeDisplay { passed, .. }
            | CheckOutcome::DelegatedEquivalence { passed, .. }
            | CheckOutcome::Probe { passed, .. }
            | CheckOutcome::ProbeIdempotent { passed, .. } => *passed,
        }
    }

    /// Human-readable label, stable across runs.
    pub fn label(&self) -> String {
        match self {
            CheckOutcome::CubeDisplay { n, .. } => format!("cube_display({n})"),
            CheckOutcome::DelegatedEquivalence { n, tag, .. } => {
                format!("delegated_equivalence({n}, {tag})")
            }
            CheckOutcome::Probe { name, .. } => format!("probe({name:?})"),
            CheckOutcome::ProbeIdempotent { name, .. } => format!("probe_idempotent({name:?})"),
        }
    }
}

/// Run every check in `suite` and collect outcomes.
#[instrument(skip_all, fields(suite_id = %suite.suite.id, check_count = suite.checks.len()))]
pub fn run_suite(suite: &SuiteFile, verifier: &Verifier<'_>) -> Judgment {
    let started_at = Utc::now().to_rfc3339();
    let checks = suite
        .checks
        .iter()
        .map(|check| run_check(check, verifier))
        .collect();
    Judgment {
        suite_id: suite.suite.id.clone(),
        started_at,
        finished_at: Utc::now().to_rfc3339(),
        checks,
    }
}

/// Run a single check.
pub fn run_check(check: &Check, verifier: &Verifier<'_>) -> CheckOutcome {
    let outcome = match check {
        Check::CubeDisplay { n, expected } => {
            let actual = Cube::new(*n).to_string();
            CheckOutcome::CubeDisplay {
                n: *n,
                passed: &actual == expected,
                expected: expected.clone(),
                actual,
            }
        }
        Check::DelegatedEquivalence { n } => {
            let cube = Cube::new(*n);
            let tag = cube.delegated_tag();
            let expected = verifier.reference.compute(tag);
            let actual = cube.delegated_computation();
            CheckOutcome::DelegatedEquivalence {
                n: *n,
                tag: tag.to_string(),
                reference: verifier.reference.name().to_string(),
                passed: actual == expected,
                expected,
                actual,
            }
        }
        Check::Probe { name, expect } => {
            let actual = verifier.probe.probe(name);
            CheckOutcome::Probe {
                name: name.clone(),
                expect: *expect,
                actual,
                passed: actual == *expect,
            }
        }
        Check::ProbeIdempotent { name } => {
            let first = verifier.probe.probe(name);
            let second = verifier.probe.probe(name);
            CheckOutcome::ProbeIdempotent {
                name: name.clone(),
                first,
                second,
                passed: first == second,
            }
        }
    };
    if outcome.passed() {
        debug!(check = %outcome.label(), "check passed");
    } else {
        warn!(check = %outcome.label(), "check failed");
    }
    outcome
}

/// Write the judgment as pretty JSON with a trailing newline.
pub fn write_judgment(path: &Path, judgment: &Judgment) -> Result<()> {
    let contents = serde_json::to_string_pretty(judgment).context("serialize judgment")?;
    fs::write(path, format!("{contents}\n"))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
