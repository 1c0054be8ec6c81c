//! File logging bootstrap.
//!
//! The TUI owns the terminal, so log output always goes to a rotating file
//! under the state directory (or `[log] dir`), never to stdout.

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode,
};

use crate::io::config_io::state_dir;
use crate::model::config::LogConfig;

pub const LOG_FILE_BASENAME: &str = "ruttin";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Start the file logger. Keep the returned handle alive for the whole
/// process; dropping it flushes and stops logging.
pub fn init_logging(config: &LogConfig) -> Result<LoggerHandle, FlexiLoggerError> {
    let dir = config.dir.clone().unwrap_or_else(state_dir);
    std::fs::create_dir_all(&dir)?;

    let spec = pick_spec(
        env_spec("RUTTIN_LOG"),
        env_spec("RUST_LOG"),
        &config.level,
    );
    let handle = Logger::try_with_str(&spec)?
        .log_to_file(
            FileSpec::default()
                .directory(dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .duplicate_to_stderr(Duplicate::None)
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    log::info!("logger initialized dir={} spec={}", dir.display(), spec);
    Ok(handle)
}

fn env_spec(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// RUTTIN_LOG wins over RUST_LOG, which wins over the config level
fn pick_spec(ruttin: Option<String>, rust: Option<String>, config_level: &str) -> String {
    ruttin
        .or(rust)
        .unwrap_or_else(|| config_level.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_precedence() {
        assert_eq!(pick_spec(None, None, "info"), "info");
        assert_eq!(pick_spec(None, Some("warn".into()), "info"), "warn");
        assert_eq!(
            pick_spec(Some("debug".into()), Some("warn".into()), "info"),
            "debug"
        );
    }
}
