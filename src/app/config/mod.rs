// SPDX-License-Identifier: MPL-2.0
//! Loading of the `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[business]` - Contact data shown on the page
//! - `[media]` - Hero and video thumbnail images
//! - `[comparison]` - Before/after images of the portfolio slider
//! - `[location]` - Location lookup service
//!
//! Every field is optional; missing fields fall back to the constants in
//! [`defaults`]. The file is never written by the application.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` flag or `VERTICAL_COR_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::content::{copy, BusinessInfo};
use crate::error::Result;
use crate::infrastructure::gemini::{self, GeminiSettings};
use crate::media::ImageSource;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Business contact data overrides.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct BusinessConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_display: Option<String>,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub whatsapp_floating_number: Option<String>,
    #[serde(default)]
    pub whatsapp_message: Option<String>,
}

impl BusinessConfig {
    /// Merges the overrides onto the built-in contact data.
    #[must_use]
    pub fn to_info(&self) -> BusinessInfo {
        let defaults = BusinessInfo::default();
        let pick = |value: &Option<String>, fallback: String| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map_or(fallback, str::to_string)
        };
        BusinessInfo {
            name: pick(&self.name, defaults.name),
            address: pick(&self.address, defaults.address),
            phone_display: pick(&self.phone_display, defaults.phone_display),
            whatsapp_number: pick(&self.whatsapp_number, defaults.whatsapp_number),
            whatsapp_floating_number: pick(
                &self.whatsapp_floating_number,
                defaults.whatsapp_floating_number,
            ),
            whatsapp_message: pick(&self.whatsapp_message, defaults.whatsapp_message),
            copyright_year: defaults.copyright_year,
        }
    }
}

/// Page imagery.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct MediaConfig {
    #[serde(default)]
    pub hero: Option<String>,
    #[serde(default)]
    pub video_thumbnail: Option<String>,
}

impl MediaConfig {
    #[must_use]
    pub fn hero_source(&self) -> Option<ImageSource> {
        source_or(self.hero.as_deref(), DEFAULT_HERO_IMAGE)
    }

    #[must_use]
    pub fn video_thumbnail_source(&self) -> Option<ImageSource> {
        source_or(self.video_thumbnail.as_deref(), DEFAULT_VIDEO_THUMBNAIL)
    }
}

/// Image pair of the comparison slider.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ComparisonConfig {
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub after: Option<String>,
}

impl ComparisonConfig {
    #[must_use]
    pub fn before_source(&self) -> Option<ImageSource> {
        source_or(self.before.as_deref(), DEFAULT_BEFORE_IMAGE)
    }

    #[must_use]
    pub fn after_source(&self) -> Option<ImageSource> {
        source_or(self.after.as_deref(), DEFAULT_AFTER_IMAGE)
    }
}

/// Location lookup settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct LocationConfig {
    /// Whether the page queries the location service at all.
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub model: Option<String>,
    /// Name of the environment variable holding the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl LocationConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_LOCATION_TIMEOUT_SECS)
            .clamp(MIN_LOCATION_TIMEOUT_SECS, MAX_LOCATION_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    #[must_use]
    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or(DEFAULT_LOCATION_API_KEY_ENV)
    }

    /// Builds adapter settings, reading the API key through `lookup_env`.
    /// Returns `None` when the lookup is disabled.
    pub fn gemini_settings(
        &self,
        lookup_env: impl Fn(&str) -> Option<String>,
    ) -> Option<GeminiSettings> {
        if !self.is_enabled() {
            return None;
        }
        Some(GeminiSettings {
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| gemini::DEFAULT_BASE_URL.to_string()),
            model: self
                .model
                .clone()
                .unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string()),
            api_key: lookup_env(self.api_key_env()).unwrap_or_default(),
            timeout: self.timeout(),
        })
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub business: BusinessConfig,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub comparison: ComparisonConfig,
    #[serde(default)]
    pub location: LocationConfig,
}

// =============================================================================
// Helpers
// =============================================================================

/// A configured blank string disables the image; an absent one uses the
/// built-in default.
fn source_or(configured: Option<&str>, fallback: &str) -> Option<ImageSource> {
    match configured {
        Some(raw) => ImageSource::parse(raw),
        None => ImageSource::parse(fallback),
    }
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
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
                    tracing::info!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "invalid configuration, using defaults");
                    return (
                        Config::default(),
                        Some(copy::notice::CONFIG_FALLBACK.to_string()),
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
    Ok(toml::from_str(&content)?)
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
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "[general\ntheme_mode = ").expect("failed to write");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(config.location.is_enabled());
        assert_eq!(
            config.location.timeout(),
            Duration::from_secs(DEFAULT_LOCATION_TIMEOUT_SECS)
        );
        assert_eq!(config.business.to_info(), BusinessInfo::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"").is_err());
    }

    #[test]
    fn business_overrides_merge_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            [business]
            phone_display = "(27) 3333-4444"
            address = "   "
            "#,
        )
        .unwrap();
        let info = config.business.to_info();
        assert_eq!(info.phone_display, "(27) 3333-4444");
        assert_eq!(info.address, BusinessInfo::default().address);
    }

    #[test]
    fn blank_media_entry_disables_image() {
        let config: Config = toml::from_str("[comparison]\nbefore = \"\"").unwrap();
        assert_eq!(config.comparison.before_source(), None);
        assert_eq!(
            config.comparison.after_source(),
            ImageSource::parse(DEFAULT_AFTER_IMAGE)
        );
    }

    #[test]
    fn location_timeout_is_clamped() {
        let config: Config = toml::from_str("[location]\ntimeout_secs = 9000").unwrap();
        assert_eq!(
            config.location.timeout(),
            Duration::from_secs(MAX_LOCATION_TIMEOUT_SECS)
        );
    }

    #[test]
    fn gemini_settings_read_key_from_named_variable() {
        let config: Config = toml::from_str(
            r#"
            [location]
            api_key_env = "MY_KEY"
            model = "gemini-test"
            "#,
        )
        .unwrap();
        let settings = config
            .location
            .gemini_settings(|name| (name == "MY_KEY").then(|| "secret".to_string()))
            .unwrap();
        assert_eq!(settings.api_key, "secret");
        assert_eq!(settings.model, "gemini-test");
        assert_eq!(settings.base_url, gemini::DEFAULT_BASE_URL);
    }

    #[test]
    fn disabled_location_yields_no_settings() {
        let config: Config = toml::from_str("[location]\nenabled = false").unwrap();
        assert!(config.location.gemini_settings(|_| None).is_none());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "this is [[ not toml")
            .expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(copy::notice::CONFIG_FALLBACK));
    }
}
