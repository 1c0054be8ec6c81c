use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub routine: RoutineConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoutineConfig {
    /// First id handed out
    #[serde(default = "default_id_seed")]
    pub id_seed: u64,
    /// Tasks the routine starts with
    #[serde(default = "default_tasks")]
    pub tasks: Vec<TaskConfig>,
}

impl Default for RoutineConfig {
    fn default() -> Self {
        RoutineConfig {
            id_seed: default_id_seed(),
            tasks: default_tasks(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskConfig {
    pub name: String,
    pub icon: String,
    pub points: u32,
}

fn default_id_seed() -> u64 {
    1
}

/// The daily tasks a fresh routine starts with
fn default_tasks() -> Vec<TaskConfig> {
    vec![
        TaskConfig {
            name: "Escovar os Dentes".into(),
            icon: "tooth".into(),
            points: 10,
        },
        TaskConfig {
            name: "Tomar Café da Manhã".into(),
            icon: "coffee".into(),
            points: 15,
        },
        TaskConfig {
            name: "Hora da Aula/Trabalho".into(),
            icon: "book".into(),
            points: 20,
        },
    ]
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Where preferences are stored (default: next to config.toml)
    #[serde(default)]
    pub prefs_file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            prefs_file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// flexi_logger spec, overridden by RUTTIN_LOG / RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}
