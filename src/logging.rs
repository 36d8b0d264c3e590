//! Logging setup for the binary.

use std::env;

use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Default filter: our crate at info, everything else at warn.
const DEFAULT_FILTER: &str = "warn,hopper=info";

/// Install a stdout `tracing` subscriber. `RUST_LOG` directives are appended
/// to the default filter, so `RUST_LOG=hopper=trace` shows every tick.
pub fn init_logging() -> anyhow::Result<()> {
    let mut filter = DEFAULT_FILTER.to_owned();
    if let Ok(env_filter) = env::var(EnvFilter::DEFAULT_ENV) {
        filter.push(',');
        filter.push_str(&env_filter);
    }

    let stdout_log = fmt::layer().compact().with_target(false);
    let subscriber = Registry::default()
        .with(EnvFilter::try_new(&filter)?)
        .with(stdout_log);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
