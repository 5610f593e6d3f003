//! mdsplit: split a markdown file into multiple files based on header levels.
#![allow(clippy::multiple_crate_versions)]

use mdsplit::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // WARN by default, RUST_LOG overrides; stderr keeps stdout for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
