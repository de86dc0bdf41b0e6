// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[share]` - Address encoded in the QR dialog
//! - `[browser]` - Initial century filter
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PANDEMIC_ATLAS_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pandemic_atlas::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("en-US".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::CenturyFilter;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when the config file cannot be used.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "ru", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Sharing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShareConfig {
    /// Address encoded in the QR dialog when neither `--url` nor
    /// `PANDEMIC_ATLAS_PAGE_URL` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
}

/// Browser settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BrowserConfig {
    /// Century filter applied at startup (`"all"` or a century number).
    #[serde(
        default,
        deserialize_with = "deserialize_century_filter",
        serialize_with = "serialize_century_filter",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_century: Option<CenturyFilter>,
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
    pub share: ShareConfig,

    #[serde(default)]
    pub browser: BrowserConfig,
}

// =============================================================================
// Serde Helpers
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

/// Accepts either `"all"` / `"14"` strings or bare integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCenturyFilter {
    Number(i64),
    Text(String),
}

fn deserialize_century_filter<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<CenturyFilter>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match RawCenturyFilter::deserialize(deserializer)? {
        RawCenturyFilter::Number(value) => i32::try_from(value)
            .map(|century| Some(CenturyFilter::Century(century)))
            .map_err(|_| D::Error::custom(format!("century out of range: {}", value))),
        RawCenturyFilter::Text(text) => text.parse().map(Some).map_err(D::Error::custom),
    }
}

// Only called for `Some` thanks to `skip_serializing_if`.
#[allow(clippy::ref_option)]
fn serialize_century_filter<S>(
    filter: &Option<CenturyFilter>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match filter {
        Some(CenturyFilter::Century(century)) => serializer.serialize_i32(*century),
        Some(CenturyFilter::All) | None => serializer.serialize_str("all"),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        tracing::debug!("no config directory available, using defaults");
        return (Config::default(), None);
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded configuration");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default configuration");
            (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_config() -> Config {
        Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Light,
            },
            share: ShareConfig {
                page_url: Some("https://example.org/pandemics".to_string()),
            },
            browser: BrowserConfig {
                initial_century: Some(CenturyFilter::Century(20)),
            },
        }
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = sample_config();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let err = load_from_path(&config_path).expect_err("invalid toml should fail");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_with_override_returns_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("deep").join("path");

        save_with_override(&sample_config(), Some(base.clone())).expect("save should succeed");
        assert!(base.join(CONFIG_FILE).exists());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[share]\npage_url = \"https://a.example\"\n")
            .expect("partial config should parse");
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.browser.initial_century, None);
        assert_eq!(config.share.page_url.as_deref(), Some("https://a.example"));
    }

    #[test]
    fn initial_century_accepts_numbers_and_strings() {
        let numeric: Config = toml::from_str("[browser]\ninitial_century = 14\n").expect("parse");
        assert_eq!(numeric.browser.initial_century, Some(CenturyFilter::Century(14)));

        let textual: Config =
            toml::from_str("[browser]\ninitial_century = \"all\"\n").expect("parse");
        assert_eq!(textual.browser.initial_century, Some(CenturyFilter::All));
    }

    #[test]
    fn initial_century_rejects_garbage() {
        let result = toml::from_str::<Config>("[browser]\ninitial_century = \"soon\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }
}
