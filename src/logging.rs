//! Helpers related to tracing, used by the binary entrypoint.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Install a compact stderr subscriber filtered by `RUST_LOG` (default `warn`).
pub fn initialize_tracing() {
    let format = tracing_subscriber::fmt::format()
        .without_time()
        .with_target(false)
        .compact();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(format)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}
