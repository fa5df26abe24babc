//! Diagnostics for the verifier, on stderr.
//!
//! Reports and judgments go to stdout or the `--out` file; nothing here
//! changes them. `VERIFY_LOG` takes precedence over `RUST_LOG`.

use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable read before `RUST_LOG`.
pub const LOG_ENV: &str = "VERIFY_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Install the stderr subscriber.
///
/// ```bash
/// VERIFY_LOG=probe=debug,verify=debug verify run
/// ```
pub fn init() {
    let directives = filter_directives(env::var(LOG_ENV).ok(), env::var("RUST_LOG").ok());
    let filter =
        EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(true)
                .compact(),
        )
        .init();
}

fn filter_directives(verify_log: Option<String>, rust_log: Option<String>) -> String {
    [verify_log, rust_log]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
}
