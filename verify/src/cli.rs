//! CLI command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cube::Cube;
use probe::CapabilityProbe;
use probe::dependency::Sha256Reference;
use tracing::{debug, info};

use crate::check::{Verifier, run_suite, write_judgment};
use crate::config::{ReportFormat, VerifyConfig, load_config, write_config};
use crate::exit_codes;
use crate::report::{RunReport, render_json, render_text};
use crate::startup::install_registry;
use crate::suite::{BUILTIN_SUITE, BUILTIN_SUITE_FILE, SuiteFile, discover_suites};

/// Options for `verify run`.
#[derive(Debug, Clone, Default)]
pub struct RunOptions<'a> {
    /// Suite file to run; the built-in suite when `None`.
    pub suite: Option<&'a Path>,
    /// Force JSON output regardless of config.
    pub json: bool,
    /// Also write the judgment to this path.
    pub out: Option<&'a Path>,
}

/// Write a default config and the built-in suite under `root`.
///
/// Existing files are left alone unless `force` is set.
pub fn init(root: &Path, config_path: &Path, force: bool) -> Result<()> {
    let config_path = root.join(config_path);
    if force || !config_path.exists() {
        write_config(&config_path, &VerifyConfig::default())
            .with_context(|| format!("write {}", config_path.display()))?;
    }

    let suites_dir = root.join("suites");
    fs::create_dir_all(&suites_dir)
        .with_context(|| format!("create {}", suites_dir.display()))?;
    let suite_path = suites_dir.join(BUILTIN_SUITE_FILE);
    if force || !suite_path.exists() {
        fs::write(&suite_path, BUILTIN_SUITE)
            .with_context(|| format!("write {}", suite_path.display()))?;
    }

    println!(
        "init: config={} suite={}",
        config_path.display(),
        suite_path.display()
    );
    Ok(())
}

/// Print a cube's display form and its delegated computation.
pub fn show_cube(n: i64) {
    let cube = Cube::new(n);
    println!("{}", cube);
    println!("delegated: {}", cube.delegated_computation());
}

/// Probe each name and print the answer.
pub fn probe_names(probe: &CapabilityProbe, names: &[String]) {
    for name in names {
        println!("probe: name={:?} present={}", name, probe.probe(name));
    }
}

/// Run a suite and report. Returns the exit code for the outcome.
pub fn run(probe: &CapabilityProbe, config: &VerifyConfig, options: &RunOptions<'_>) -> Result<i32> {
    let suite = match options.suite {
        Some(path) => SuiteFile::load(path)?,
        None => SuiteFile::builtin()?,
    };
    debug!(suite_id = %suite.suite.id, checks = suite.checks.len(), "suite loaded");

    let reference = Sha256Reference;
    let verifier = Verifier {
        probe,
        reference: &reference,
    };
    let judgment = run_suite(&suite, &verifier);
    let report = RunReport::new(&judgment);
    info!(
        suite_id = %judgment.suite_id,
        passed = report.passed,
        failed = report.failed,
        "suite finished"
    );

    let format = if options.json {
        ReportFormat::Json
    } else {
        config.report.format
    };
    match format {
        ReportFormat::Text => print!("{}", render_text(&report)),
        ReportFormat::Json => print!("{}", render_json(&report)?),
    }

    if let Some(out) = options.out {
        write_judgment(out, &judgment)?;
    }
    Ok(report.outcome.exit_code())
}

/// List the suites found in `dir` as `<id> <file>` lines.
pub fn list(dir: &Path) -> Result<()> {
    for found in discover_suites(dir)? {
        let file = found
            .path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        println!("{} {}", found.file.suite.id, file);
    }
    Ok(())
}

/// Load config and install the startup registry.
pub fn startup(config_path: &Path) -> Result<(VerifyConfig, CapabilityProbe)> {
    let config = load_config(config_path)?;
    let probe = install_registry(&config)?;
    Ok((config, probe))
}

/// Map the result of a command that has no outcome of its own.
pub fn done(result: Result<()>) -> Result<i32> {
    result.map(|()| exit_codes::OK)
}
