use crate::conf::error::ConfigError;
use crate::conf::types::LogtallyConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "logtally.toml";

/// Load and validate a config file. A relative `output.dir` is checked
/// against `cwd`, the directory reports will be written from.
pub fn load_config(path: &Path, cwd: &Path) -> Result<LogtallyConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let cfg: LogtallyConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    validate(&cfg, cwd)?;

    debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

/// Load an explicit config file, or `logtally.toml` from `cwd` if it exists,
/// or fall back to defaults.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<LogtallyConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path, cwd);
    }

    let discovered = cwd.join(DEFAULT_CONFIG_FILE);
    if discovered.is_file() {
        return load_config(&discovered, cwd);
    }

    Ok(LogtallyConfig::default())
}

fn validate(cfg: &LogtallyConfig, cwd: &Path) -> Result<(), ConfigError> {
    let dir = cwd.join(&cfg.output.dir);
    if dir.exists() && !dir.is_dir() {
        return Err(ConfigError::OutputDirNotADirectory { path: dir });
    }
    Ok(())
}
