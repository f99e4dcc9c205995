//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::lock::gesture::GestureGeometry;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("screen.height_px must be positive, got {0}")]
    ScreenHeight(f64),
    #[error("screen.swipe_threshold_px must be within (0, height_px), got {0}")]
    SwipeThreshold(f64),
    #[error("{field} must be a positive number of seconds, got {value}")]
    Interval { field: &'static str, value: f64 },
    #[error("{field} is not a valid strftime format: {format:?}")]
    TimeFormat { field: &'static str, format: String },
    #[error("input.keyboard_step_px must be positive, got {0}")]
    KeyboardStep(f64),
    #[error("logging.level {0:?} is not one of trace, debug, info, warn, error")]
    LogLevel(String),
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let screen = &self.screen;
        if !(screen.height_px.is_finite() && screen.height_px > 0.0) {
            return Err(ConfigError::ScreenHeight(screen.height_px));
        }
        if !(screen.swipe_threshold_px > 0.0 && screen.swipe_threshold_px < screen.height_px) {
            return Err(ConfigError::SwipeThreshold(screen.swipe_threshold_px));
        }

        check_interval("clock.refresh_interval_secs", self.clock.refresh_interval_secs)?;
        if let Some(secs) = self.debug.poll_interval_secs {
            check_interval("debug.poll_interval_secs", secs)?;
        }

        check_format("clock.time_format", &self.clock.time_format)?;
        check_format("clock.date_format", &self.clock.date_format)?;

        if !(self.input.keyboard_step_px.is_finite() && self.input.keyboard_step_px > 0.0) {
            return Err(ConfigError::KeyboardStep(self.input.keyboard_step_px));
        }
        self.logging.level()?;
        Ok(())
    }
}

fn check_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    match Duration::try_from_secs_f64(value) {
        Ok(d) if !d.is_zero() => Ok(()),
        _ => Err(ConfigError::Interval { field, value }),
    }
}

fn check_format(field: &'static str, format: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::TimeFormat {
            field,
            format: format.to_string(),
        });
    }
    Ok(())
}

/// Simulated screen geometry, in pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    #[serde(default = "default_height")]
    pub height_px: f64,
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold_px: f64,
    /// Clamp the lock layer to the screen while dragging instead of only at
    /// drag end.
    #[serde(default)]
    pub clamp_drag: bool,
}

impl ScreenConfig {
    pub fn geometry(&self) -> GestureGeometry {
        GestureGeometry {
            screen_height: self.height_px,
            swipe_threshold: self.swipe_threshold_px,
            clamp_drag: self.clamp_drag,
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            height_px: default_height(),
            swipe_threshold_px: default_swipe_threshold(),
            clamp_drag: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: f64,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_true")]
    pub uppercase_date: bool,
}

impl ClockConfig {
    /// Only meaningful on a validated config.
    pub fn refresh_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.refresh_interval_secs).unwrap_or(Duration::ZERO)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
            time_format: default_time_format(),
            date_format: default_date_format(),
            uppercase_date: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Upward distance applied per key press when dragging with the keyboard.
    #[serde(default = "default_keyboard_step")]
    pub keyboard_step_px: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            keyboard_step_px: default_keyboard_step(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_pill: bool,
    #[serde(default = "default_home_title")]
    pub home_title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_pill: true,
            home_title: default_home_title(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.level.clone()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebugConfig {
    /// When set, a second refresher logs the gesture snapshot this often.
    #[serde(default)]
    pub poll_interval_secs: Option<f64>,
}

impl DebugConfig {
    pub fn poll_interval(&self) -> Option<Duration> {
        self.poll_interval_secs
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .filter(|d| !d.is_zero())
    }
}

fn default_height() -> f64 {
    480.0
}
fn default_swipe_threshold() -> f64 {
    240.0
}
fn default_true() -> bool {
    true
}
fn default_refresh_interval() -> f64 {
    60.0
}
fn default_time_format() -> String {
    "%H:%M".into()
}
fn default_date_format() -> String {
    "%A, %B %d".into()
}
fn default_keyboard_step() -> f64 {
    40.0
}
fn default_home_title() -> String {
    "Home".into()
}
fn default_log_dir() -> String {
    "~/.local/share/swipelock".into()
}
fn default_log_level() -> String {
    "info".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.screen.height_px, 480.0);
        assert_eq!(cfg.screen.swipe_threshold_px, 240.0);
        assert!(!cfg.screen.clamp_drag);
        assert_eq!(cfg.clock.refresh_interval(), Duration::from_secs(60));
        assert_eq!(cfg.debug.poll_interval(), None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [screen]
            height_px = 1280
            swipe_threshold_px = 200

            [debug]
            poll_interval_secs = 2.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.screen.height_px, 1280.0);
        assert_eq!(cfg.clock.time_format, "%H:%M");
        assert_eq!(cfg.debug.poll_interval(), Some(Duration::from_millis(2500)));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let mut cfg = AppConfig::default();
        cfg.screen.swipe_threshold_px = 480.0;
        assert_eq!(cfg.validate(), Err(ConfigError::SwipeThreshold(480.0)));

        cfg.screen.height_px = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::ScreenHeight(0.0)));
    }

    #[test]
    fn test_rejects_bad_intervals() {
        let mut cfg = AppConfig::default();
        cfg.clock.refresh_interval_secs = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Interval { field: "clock.refresh_interval_secs", .. })
        ));

        cfg.clock.refresh_interval_secs = 1.0;
        cfg.debug.poll_interval_secs = Some(-3.0);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Interval { field: "debug.poll_interval_secs", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_format_and_level() {
        let mut cfg = AppConfig::default();
        cfg.clock.time_format = "%H:%!".into();
        assert!(matches!(cfg.validate(), Err(ConfigError::TimeFormat { .. })));

        let mut cfg = AppConfig::default();
        cfg.logging.level = "loud".into();
        assert_eq!(cfg.validate(), Err(ConfigError::LogLevel("loud".into())));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut cfg = AppConfig::default();
        cfg.debug.poll_interval_secs = Some(10.0);
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.debug.poll_interval_secs, Some(10.0));
        assert_eq!(back.ui.home_title, "Home");
    }
}
