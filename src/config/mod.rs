pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

pub use model::{AppConfig, ClockConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swipelock")
        .join("config.toml")
}

/// Load the user config, writing out the defaults on first run so there is a
/// file to edit.
pub fn load_config() -> Result<AppConfig> {
    load_or_init(&config_path())
}

/// A missing file yields the defaults. Failing to write them out is logged
/// and does not stop startup.
fn load_or_init(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let config = AppConfig::default();
        if let Err(e) = save_config_to(path, &config) {
            warn!(error = %format!("{:#}", e), "could not write default config");
        }
        return Ok(config);
    }
    load_config_from(path)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swipelock").join("config.toml");

        let cfg = load_or_init(&path).unwrap();
        assert_eq!(cfg.screen.height_px, 480.0);
        assert!(path.exists());

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.screen.swipe_threshold_px, 240.0);
    }

    #[test]
    fn test_unwritable_config_dir_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file where the config directory should be
        let blocker = dir.path().join("swipelock");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("config.toml");

        let cfg = load_or_init(&path).unwrap();
        assert_eq!(cfg.clock.refresh_interval_secs, 60.0);
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[screen]\nswipe_threshold_px = -5\n").unwrap();

        let err = load_or_init(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("swipe_threshold_px"));
    }
}
