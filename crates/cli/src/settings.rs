//! Configuration loading
//!
//! Layers, lowest first: built-in defaults, TOML file, `LINEUP_*` environment
//! variables. Nested keys use `__` (`LINEUP_WINDOW__DEFAULT_CAPACITY=2`);
//! `LINEUP_WINDOW__PER_LINE` takes a comma-separated list.

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use lineup_core::config::DeskConfig;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_PREFIX: &str = "LINEUP";
const CONFIG_FILE_NAME: &str = "lineup.toml";

/// Platform config location, e.g. `~/.config/lineup/lineup.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lineup").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load from the given file (must exist) or the default location (optional),
/// then apply process environment overrides
pub fn load(explicit: Option<&Path>) -> Result<DeskConfig> {
    load_from(explicit, None)
}

/// Same as [`load`], with the environment supplied as a map instead of read
/// from the process
pub fn load_from(
    explicit: Option<&Path>,
    env: Option<HashMap<String, String>>,
) -> Result<DeskConfig> {
    let mut builder = Config::builder();

    match explicit {
        Some(path) => {
            debug!(path = %path.display(), "Loading config file");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        None => {
            if let Some(path) = default_config_path() {
                debug!(path = %path.display(), "Checking default config file");
                builder =
                    builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
            }
        }
    }

    let environment = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("window.per_line")
        .try_parsing(true)
        .source(env);

    let desk_config: DeskConfig = builder
        .add_source(environment)
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")?;

    desk_config.validate()?;
    Ok(desk_config)
}
