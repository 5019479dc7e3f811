//! Scoring configuration loaded from a file and the environment.
//!
//! Layers, lowest precedence first:
//! 1. built-in defaults ([`ScoringConfig::default`])
//! 2. a config file (TOML, JSON, YAML; format from extension)
//! 3. environment variables, e.g. `LENDSCORE_WEIGHTS__REPAY=7.5` or
//!    `LENDSCORE_RANGE__MAX=850`
//!
//! The merged config is validated before it is returned.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, Map};
use lendscore_core::config::ScoringConfig;
use lendscore_core::error::ConfigError;
use tracing::debug;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "LENDSCORE";

/// `<config_dir>/lendscore/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lendscore").join("config.toml"))
}

/// Load from `path` (required if given; otherwise the optional default
/// location) and the process environment.
pub fn load_scoring_config(path: Option<&Path>) -> Result<ScoringConfig, ConfigError> {
    load_with_env(path, None)
}

/// Like [`load_scoring_config`], but reads environment overrides from `env`
/// instead of the process environment when `env` is `Some`.
pub fn load_with_env(
    path: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<ScoringConfig, ConfigError> {
    let mut builder = Config::builder();

    match path {
        Some(p) => {
            debug!(path = %p.display(), "settings: loading config file");
            builder = builder.add_source(File::from(p));
        }
        None => {
            if let Some(default) = default_config_path() {
                builder = builder.add_source(File::from(default).required(false));
            }
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env),
    );

    let scoring: ScoringConfig = builder
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    scoring.validate()?;
    debug!(?scoring, "settings: scoring config loaded");
    Ok(scoring)
}
