use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::config::APP_DIR;

/// Environment variable selecting the log level (`off`, `error` .. `trace`).
pub const LOG_ENV: &str = "TUI_SELECT_LOG";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join("tui-select.log"))
}

pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Send log records to a file; the terminal belongs to the UI.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let level = level_from_env(std::env::var(LOG_ENV).ok().as_deref());
    if level == LevelFilter::Off {
        return Ok(());
    }

    let path = log_path().ok_or("Could not find the cache directory")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_info() {
        assert_eq!(level_from_env(None), LevelFilter::Info);
        assert_eq!(level_from_env(Some("nonsense")), LevelFilter::Info);
        assert_eq!(level_from_env(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from_env(Some("TRACE")), LevelFilter::Trace);
        assert_eq!(level_from_env(Some("off")), LevelFilter::Off);
    }
}
