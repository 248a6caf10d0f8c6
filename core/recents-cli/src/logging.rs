//! Stderr logging for the CLI.
//!
//! The core only emits `tracing` events; this is the one place a subscriber
//! is installed. Stdout stays reserved for listing output.

use std::env;
use tracing_subscriber::EnvFilter;

const DEBUG_ENV: &str = "RECENTS_DEBUG_LOG";

pub fn init() {
    let filter = if debug_forced(env::var(DEBUG_ENV).ok().as_deref()) {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Fails only if a global subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn debug_forced(value: Option<&str>) -> bool {
    matches!(value, Some("1" | "true" | "TRUE" | "yes" | "YES"))
}
