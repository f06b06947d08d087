pub mod delay;
pub mod schema;
pub mod watcher;

pub use delay::{parse_delay, validate_delay, MIN_DELAY};
pub use schema::{
    BattopConfig, ChartConfig, ChartsConfig, GlobalConfig, ThemeConfig, ThresholdConfig, Units,
};
pub use watcher::ConfigWatcher;

use battop_core::{BattopError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Load configuration from a TOML file.  Returns `BattopConfig::default()` if
/// the file doesn't exist so the dashboard always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<BattopConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(BattopConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| BattopError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config: BattopConfig =
        toml::from_str(&raw).map_err(|e| BattopError::Config(format!("TOML parse error: {e}")))?;

    validate_delay(Duration::from_millis(config.global.interval_ms))?;
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("battop").join("battop.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.global.interval_ms, 1_000);
        assert_eq!(cfg.charts.charge.unit, "%");
    }

    #[test]
    fn loads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[global]\ninterval_ms = 250\n\n[charts]\ncapacity = 60").unwrap();
        let cfg = load(file.path()).unwrap();
        assert_eq!(cfg.global.interval_ms, 250);
        assert_eq!(cfg.charts.capacity, 60);
    }

    #[test]
    fn parse_errors_are_config_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[global\ninterval_ms = ").unwrap();
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, BattopError::Config(_)));
    }

    #[test]
    fn too_short_interval_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[global]\ninterval_ms = 10").unwrap();
        assert!(load(file.path()).is_err());
    }
}
