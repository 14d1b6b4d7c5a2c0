//! main.rs - Binary entry point for omni-quiet
//!
//! Comments out console diagnostics under the fixed frontend source root.
//! There are no arguments; `RUST_LOG` only tunes log verbosity.
//!
//! Usage:
//!   omni-quiet
//!   RUST_LOG=omni_quiet=debug omni-quiet   # also print spans and diffs

use tracing_subscriber::EnvFilter;

use omni_quiet::{CommenterConfig, LineCommenter};

fn main() {
    // Console report: plain lines on stdout, RUST_LOG overrides the default filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("omni_quiet=info,omni_io=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_level(false)
        .try_init();

    let config = CommenterConfig::default();

    println!("Starting to comment out console statements...");
    println!("Target directory: {}\n", config.root.display());

    let summary = LineCommenter::process_directory(&config);

    if !summary.errors.is_empty() {
        println!("\n{} files could not be processed", summary.errors.len());
    }
    println!("\n✅ Done! Modified {} files", summary.modified_count());
}
