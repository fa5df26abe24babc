//! `verify`: run cross-module verification suites.
//!
//! At startup the type registry is built from every module's registration
//! function and installed once; probes then answer from that registry for the
//! rest of the process.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use verify::cli::{self, RunOptions};
use verify::config::CONFIG_FILE;
use verify::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "verify",
    version,
    about = "Cross-module capability verification harness"
)]
struct Cli {
    /// Path to the config file.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write `verify.toml` and `suites/cube.toml` if missing.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Print `[Cube N]` and the delegated computation.
    Cube {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Report whether each named type is resolvable.
    Probe {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Run a suite (the built-in one when no path is given).
    Run {
        suite: Option<PathBuf>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
        /// Also write the judgment JSON to this path.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List suite ids in a directory.
    List {
        #[arg(default_value = "suites")]
        dir: PathBuf,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let args = Cli::parse();
    let config_path = args.config;
    match args.command {
        Command::Init { force } => cli::done(cli::init(Path::new("."), &config_path, force)),
        Command::Cube { n } => {
            cli::show_cube(n);
            Ok(exit_codes::OK)
        }
        Command::Probe { names } => {
            let (_, probe) = cli::startup(&config_path)?;
            cli::probe_names(&probe, &names);
            Ok(exit_codes::OK)
        }
        Command::Run { suite, json, out } => {
            let (config, probe) = cli::startup(&config_path)?;
            let options = RunOptions {
                suite: suite.as_deref(),
                json,
                out: out.as_deref(),
            };
            cli::run(&probe, &config, &options)
        }
        Command::List { dir } => cli::done(cli::list(&dir)),
    }
}
