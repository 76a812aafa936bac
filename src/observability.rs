//! Tracing initialization.
//!
//! `MM_LOG` takes an EnvFilter directive and wins over `-v`; `MM_LOG_JSON=1`
//! switches the stderr layer to JSON lines.

use tracing_subscriber::{prelude::*, EnvFilter};

const LOG_ENV: &str = "MM_LOG";
const LOG_JSON_ENV: &str = "MM_LOG_JSON";

/// Default directive for a verbosity count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "mm_cli=warn,mm=warn",
        1 => "mm_cli=info,mm=info",
        2 => "mm_cli=debug,mm=debug",
        _ => "mm_cli=trace,mm=trace",
    }
}

fn is_truthy(value: Option<String>) -> bool {
    matches!(value.as_deref(), Some("1") | Some("true") | Some("yes"))
}

/// Initialize tracing. Call once at process startup.
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = if is_truthy(std::env::var(LOG_JSON_ENV).ok()) {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    };
}
