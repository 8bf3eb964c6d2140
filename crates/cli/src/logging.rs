//! Logging setup
//!
//! `LINEUP_LOG_FORMAT=json` switches to JSON lines, anything else is pretty.
//! Filter comes from `RUST_LOG`. Everything goes to stderr so the board on
//! stdout stays readable.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Targets match by prefix, so this covers the `lineup` binary and `lineup_core`
const DEFAULT_FILTER: &str = "lineup=info";

pub fn init() -> Result<()> {
    let log_format = std::env::var("LINEUP_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    match log_format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
