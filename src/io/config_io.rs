use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::{AppConfig, RoutineConfig};
use crate::model::routine::Routine;
use crate::ops::form::{FormError, NewTask};

/// Error type for loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid starting task #{index} ({name:?}): {source}")]
    InvalidTask {
        index: usize,
        name: String,
        source: FormError,
    },
}

/// Directory holding config.toml and preferences.json, respecting XDG_CONFIG_HOME
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"));
    base.join("ruttin")
}

/// Directory for log files, respecting XDG_STATE_HOME
pub fn state_dir() -> PathBuf {
    let base = std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local").join("state"));
    base.join("ruttin")
}

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn default_prefs_path() -> PathBuf {
    config_dir().join("preferences.json")
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Load config from an explicit path (must exist) or from the default
/// location (optional: defaults apply when it is missing).
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = default_config_path();
            if path.exists() {
                read_config(&path)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

/// Preferences file: command-line override, then config, then default
pub fn resolve_prefs_path(cli_override: Option<&Path>, config: &AppConfig) -> PathBuf {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| config.ui.prefs_file.clone())
        .unwrap_or_else(default_prefs_path)
}

/// Build the starting routine, validating each configured task the same way
/// the add-task form does.
pub fn build_routine(config: &RoutineConfig) -> Result<Routine, ConfigError> {
    let mut routine = Routine::with_seed(config.id_seed);
    for (i, task) in config.tasks.iter().enumerate() {
        let new = NewTask::from_parts(&task.name, &task.icon, task.points).map_err(|source| {
            ConfigError::InvalidTask {
                index: i + 1,
                name: task.name.clone(),
                source,
            }
        })?;
        routine.add_task(new.name, new.icon, new.points);
    }
    Ok(routine)
}
