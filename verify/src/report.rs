//! Rendering of a judgment for the terminal or as JSON.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::check::{CheckOutcome, Judgment};
use crate::outcome::{Outcome, classify_outcome};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunReport<'a> {
    pub outcome: Outcome,
    pub passed: usize,
    pub failed: usize,
    pub judgment: &'a Judgment,
}

impl<'a> RunReport<'a> {
    pub fn new(judgment: &'a Judgment) -> Self {
        let passed = judgment
            .checks
            .iter()
            .filter(|check| check.passed())
            .count();
        Self {
            outcome: classify_outcome(judgment),
            passed,
            failed: judgment.checks.len() - passed,
            judgment,
        }
    }
}

pub fn render_text(report: &RunReport<'_>) -> String {
    let mut out = format!(
        "suite: id={} checks={}\n",
        report.judgment.suite_id,
        report.judgment.checks.len()
    );
    for check in &report.judgment.checks {
        if check.passed() {
            out.push_str(&format!("check: {} ok\n", check.label()));
        } else {
            out.push_str(&format!("check: {} FAIL {}\n", check.label(), detail(check)));
        }
    }
    let outcome = match report.outcome {
        Outcome::Pass => "pass",
        Outcome::Fail => "fail",
    };
    out.push_str(&format!(
        "summary: outcome={} passed={} failed={}\n",
        outcome, report.passed, report.failed
    ));
    out
}

pub fn render_json(report: &RunReport<'_>) -> Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("serialize report")?;
    out.push('\n');
    Ok(out)
}

fn detail(check: &CheckOutcome) -> String {
    match check {
        CheckOutcome::CubeDisplay {
            expected, actual, ..
        } => format!("expected={expected:?} actual={actual:?}"),
        CheckOutcome::DelegatedEquivalence {
            reference,
            expected,
            actual,
            ..
        } => format!("reference={reference} expected={expected} actual={actual}"),
        CheckOutcome::Probe { expect, actual, .. } => {
            format!("expected={expect} actual={actual}")
        }
        CheckOutcome::ProbeIdempotent { first, second, .. } => {
            format!("first={first} second={second}")
        }
    }
}
