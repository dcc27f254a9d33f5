// SPDX-License-Identifier: MPL-2.0
//! Loading `settings.toml` from a directory on disk.

use brandly_login::config::{self, Config, DEFAULT_PARTICLE_COUNT};
use brandly_login::ui::theming::ThemeMode;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults_without_warning() {
    let dir = tempdir().expect("create temp dir");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert!(warning.is_none());
}

#[test]
fn settings_file_overrides_sections() {
    let dir = tempdir().expect("create temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
        [general]
        theme_mode = "dark"

        [timing]
        submit_delay_ms = 250
        ripple_ms = 1000

        [decoration]
        particle_count = 12
        particle_seed = 7
        "#,
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    assert_eq!(config.timings().submit_delay, Duration::from_millis(250));
    assert_eq!(config.timings().ripple, Duration::from_secs(1));
    assert_eq!(config.particle_count().value(), 12);
    assert_eq!(config.decoration.particle_seed, Some(7));
    // Untouched keys keep their defaults
    assert_eq!(config.timings().submit_cooldown, Duration::from_secs(3));
}

#[test]
fn malformed_file_falls_back_with_warning() {
    let dir = tempdir().expect("create temp dir");
    fs::write(dir.path().join("settings.toml"), "[timing\nsubmit_delay_ms = ")
        .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    let warning = warning.expect("malformed file produces a warning");
    assert!(warning.contains("settings.toml"));
}

#[test]
fn out_of_range_values_are_clamped() {
    let dir = tempdir().expect("create temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        "[timing]\nsubmit_delay_ms = 999999999\n[decoration]\nparticle_count = 100000\n",
    )
    .expect("write settings");

    let (config, _) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config.timings().submit_delay, Duration::from_secs(60));
    assert_eq!(config.particle_count().value(), 500);
    assert_ne!(config.particle_count().value(), DEFAULT_PARTICLE_COUNT);
}
