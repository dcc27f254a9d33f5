// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from an optional
//! `settings.toml` file at startup.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[timing]` - Every UI delay, in milliseconds
//! - `[decoration]` - Background particles
//!
//! Missing keys fall back to the defaults in [`defaults`]. The file is never
//! written by the application.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` CLI argument or `BRANDLY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use brandly_login::config;
//!
//! let (settings, warning) = config::load();
//! if let Some(message) = warning {
//!     eprintln!("{message}");
//! }
//! println!("submissions take {:?}", settings.timings().submit_delay);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::{DelayMs, ParticleCount};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// UI delays in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub submit_delay_ms: u64,
    pub submit_cooldown_ms: u64,
    pub notification_display_ms: u64,
    pub notification_exit_ms: u64,
    pub toggle_press_ms: u64,
    pub password_pulse_ms: u64,
    pub input_pulse_ms: u64,
    pub social_pulse_ms: u64,
    pub ripple_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            submit_cooldown_ms: DEFAULT_SUBMIT_COOLDOWN_MS,
            notification_display_ms: DEFAULT_NOTIFICATION_DISPLAY_MS,
            notification_exit_ms: DEFAULT_NOTIFICATION_EXIT_MS,
            toggle_press_ms: DEFAULT_TOGGLE_PRESS_MS,
            password_pulse_ms: DEFAULT_PASSWORD_PULSE_MS,
            input_pulse_ms: DEFAULT_INPUT_PULSE_MS,
            social_pulse_ms: DEFAULT_SOCIAL_PULSE_MS,
            ripple_ms: DEFAULT_RIPPLE_MS,
        }
    }
}

/// Background decoration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecorationConfig {
    /// Number of floating particles.
    #[serde(default = "default_particle_count")]
    pub particle_count: u32,

    /// Fixed seed for a reproducible particle layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particle_seed: Option<u64>,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            particle_seed: None,
        }
    }
}

fn default_particle_count() -> u32 {
    DEFAULT_PARTICLE_COUNT
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub decoration: DecorationConfig,
}

impl Config {
    /// Resolves the timing section into clamped durations.
    ///
    /// The submit cooldown never ends before the simulated request, so a
    /// second submission cannot start while the first one is still loading.
    #[must_use]
    pub fn timings(&self) -> Timings {
        let t = &self.timing;
        let ms = |value: u64| DelayMs::new(value).as_duration();
        let submit_delay = ms(t.submit_delay_ms);
        Timings {
            submit_delay,
            submit_cooldown: ms(t.submit_cooldown_ms).max(submit_delay),
            notification_display: ms(t.notification_display_ms),
            notification_exit: ms(t.notification_exit_ms),
            toggle_press: ms(t.toggle_press_ms),
            password_pulse: ms(t.password_pulse_ms),
            input_pulse: ms(t.input_pulse_ms),
            social_pulse: ms(t.social_pulse_ms),
            ripple: ms(t.ripple_ms),
        }
    }

    /// Returns the clamped particle count.
    #[must_use]
    pub fn particle_count(&self) -> ParticleCount {
        ParticleCount::new(self.decoration.particle_count)
    }
}

/// Every UI delay, resolved from [`TimingConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub submit_delay: Duration,
    pub submit_cooldown: Duration,
    pub notification_display: Duration,
    pub notification_exit: Duration,
    pub toggle_press: Duration,
    pub password_pulse: Duration,
    pub input_pulse: Duration,
    pub social_pulse: Duration,
    pub ripple: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Config::default().timings()
    }
}

// =============================================================================
// Load Functions
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::debug!("loaded configuration from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("{err}; using default settings");
                    return (
                        Config::default(),
                        Some(format!(
                            "Could not read {}, using default settings",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_reference_timings() {
        let timings = Config::default().timings();
        assert_eq!(timings.submit_delay, Duration::from_millis(2000));
        assert_eq!(timings.submit_cooldown, Duration::from_millis(3000));
        assert_eq!(timings.notification_display, Duration::from_millis(3000));
        assert_eq!(timings.notification_exit, Duration::from_millis(500));
        assert_eq!(timings.toggle_press, Duration::from_millis(600));
        assert_eq!(timings.password_pulse, Duration::from_millis(200));
    }

    #[test]
    fn cooldown_is_raised_to_submit_delay() {
        let config: Config = toml::from_str(
            r#"
            [timing]
            submit_delay_ms = 5000
            submit_cooldown_ms = 1000
            "#,
        )
        .expect("valid toml");

        let timings = config.timings();
        assert_eq!(timings.submit_delay, Duration::from_secs(5));
        assert_eq!(timings.submit_cooldown, Duration::from_secs(5));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [timing]
            submit_delay_ms = 50
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.timing.submit_delay_ms, 50);
        assert_eq!(config.timing.submit_cooldown_ms, DEFAULT_SUBMIT_COOLDOWN_MS);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.decoration.particle_count, DEFAULT_PARTICLE_COUNT);
    }

    #[test]
    fn oversized_values_are_clamped() {
        let mut config = Config::default();
        config.timing.ripple_ms = u64::MAX;
        config.decoration.particle_count = u32::MAX;

        assert_eq!(config.timings().ripple, Duration::from_secs(60));
        assert_eq!(config.particle_count().value(), 500);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[timing\nsubmit_delay_ms = ").expect("write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_bad_file_warns_and_falls_back() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "theme_mode = [").expect("write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn theme_mode_is_read_from_general_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[general]\ntheme_mode = \"light\"\n",
        )
        .expect("write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }
}
