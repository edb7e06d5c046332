// SPDX-License-Identifier: MPL-2.0
use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use vertical_cor::app::config::{self, Config, DEFAULT_LOCATION_API_KEY_ENV};
use vertical_cor::domain::content::BusinessInfo;
use vertical_cor::media::ImageSource;
use vertical_cor::ui::theming::ThemeMode;

#[test]
fn missing_file_yields_defaults_without_warning() {
    let dir = tempdir().expect("failed to create temp dir");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert!(warning.is_none());
}

#[test]
fn invalid_file_yields_defaults_with_warning() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("settings.toml"), "[business\nname = ").expect("failed to write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}

#[test]
fn full_file_overrides_every_section() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[general]
theme_mode = "dark"

[business]
name = "Pinturas Teste"
address = "Rua A, 10 - Centro"
whatsapp_number = "5511999990000"

[media]
hero = "/srv/hero.jpg"
video_thumbnail = ""

[comparison]
before = "https://example.com/before.jpg"

[location]
enabled = false
timeout_secs = 3
"#,
    )
    .expect("failed to write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    assert_eq!(config.general.theme_mode, ThemeMode::Dark);

    let info = config.business.to_info();
    assert_eq!(info.name, "Pinturas Teste");
    assert_eq!(info.address, "Rua A, 10 - Centro");
    assert_eq!(info.whatsapp_number, "5511999990000");
    assert_eq!(info.phone_display, BusinessInfo::default().phone_display);

    assert_eq!(
        config.media.hero_source(),
        Some(ImageSource::Path("/srv/hero.jpg".into()))
    );
    assert_eq!(config.media.video_thumbnail_source(), None);
    assert_eq!(
        config.comparison.before_source(),
        Some(ImageSource::Url("https://example.com/before.jpg".to_string()))
    );
    assert!(config.comparison.after_source().is_some());

    assert!(!config.location.is_enabled());
    assert_eq!(config.location.timeout(), Duration::from_secs(3));
    assert!(config.location.gemini_settings(|_| Some("key".into())).is_none());
}

#[test]
fn location_settings_read_key_from_configured_variable() {
    let config: Config = toml::from_str(
        r#"
[location]
api_key_env = "PAINT_MAPS_KEY"
model = "gemini-test"
"#,
    )
    .expect("valid toml");

    let settings = config
        .location
        .gemini_settings(|name| (name == "PAINT_MAPS_KEY").then(|| "secret".to_string()))
        .expect("lookup is enabled by default");

    assert_eq!(settings.api_key, "secret");
    assert_eq!(settings.model, "gemini-test");
}

#[test]
fn default_key_variable_is_used_when_unset() {
    let config = Config::default();
    let settings = config
        .location
        .gemini_settings(|name| (name == DEFAULT_LOCATION_API_KEY_ENV).then(|| "k".to_string()))
        .expect("lookup is enabled by default");
    assert_eq!(settings.api_key, "k");
}
