// SPDX-License-Identifier: MPL-2.0
use pandemic_atlas::app::page_url::resolve_page_url;
use pandemic_atlas::config::{self, BrowserConfig, Config, GeneralConfig, ShareConfig};
use pandemic_atlas::domain::{
    distinct_centuries, visible_records, CenturyFilter, RecordId, Severity, SeverityCounts,
    PANDEMICS,
};
use pandemic_atlas::i18n::fluent::I18n;
use pandemic_atlas::ui::browser;
use pandemic_atlas::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let english_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    config::save_to_path(&english_config, &temp_config_file_path)
        .expect("Failed to write english config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load english config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let russian_config = Config {
        general: GeneralConfig {
            language: Some("ru".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&russian_config, &temp_config_file_path)
        .expect("Failed to write russian config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load russian config from path");
    let i18n_ru = I18n::new(None, &loaded);
    assert_eq!(i18n_ru.current_locale().to_string(), "ru");
    assert_ne!(i18n_en.tr("stats-title"), i18n_ru.tr("stats-title"));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("ru".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_full_config_survives_disk_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        share: ShareConfig {
            page_url: Some("https://example.org/pandemics".to_string()),
        },
        browser: BrowserConfig {
            initial_century: Some(CenturyFilter::Century(20)),
        },
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);
}

#[test]
fn test_corrupt_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ")
        .expect("Failed to write corrupt config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(config::CONFIG_LOAD_WARNING_KEY));
}

#[test]
fn test_catalog_summary_matches_dataset() {
    assert_eq!(PANDEMICS.len(), 11);
    assert_eq!(distinct_centuries(&PANDEMICS), vec![6, 14, 16, 19, 20, 21]);

    let counts = SeverityCounts::tally(&PANDEMICS);
    assert_eq!(counts.get(Severity::Critical), 6);
    assert_eq!(counts.get(Severity::High), 4);
    assert_eq!(counts.get(Severity::Moderate), 1);
    assert_eq!(counts.total(), PANDEMICS.len());
}

#[test]
fn test_every_century_filter_partitions_the_dataset() {
    let total: usize = distinct_centuries(&PANDEMICS)
        .into_iter()
        .map(|century| visible_records(&PANDEMICS, CenturyFilter::Century(century)).len())
        .sum();
    assert_eq!(total, PANDEMICS.len());
    assert_eq!(
        visible_records(&PANDEMICS, CenturyFilter::All).len(),
        PANDEMICS.len()
    );
}

#[test]
fn test_browser_session() {
    let mut state = browser::State::new();

    let event = browser::update(
        &mut state,
        browser::Message::SetFilter(CenturyFilter::Century(20)),
    );
    assert_eq!(event, browser::Event::None);
    let years: Vec<i32> = state.visible_records().iter().map(|r| r.year).collect();
    assert_eq!(years, vec![1918, 1957, 1981]);

    browser::update(
        &mut state,
        browser::Message::SelectRecord(RecordId::new("5")),
    );
    assert!(state.is_selected(RecordId::new("5")));

    browser::update(
        &mut state,
        browser::Message::SelectRecord(RecordId::new("6")),
    );
    assert!(!state.is_selected(RecordId::new("5")));
    assert!(state.is_selected(RecordId::new("6")));

    browser::update(&mut state, browser::Message::SetFilter(CenturyFilter::All));
    assert_eq!(state.visible_records().len(), PANDEMICS.len());
    assert_eq!(state.selected_id(), Some(RecordId::new("6")));
    assert_eq!(state.severity_counts(), SeverityCounts::tally(&PANDEMICS));

    assert_eq!(
        browser::update(&mut state, browser::Message::ShowQrCode),
        browser::Event::OpenQrDialog
    );
}

#[test]
fn test_page_url_precedence() {
    assert_eq!(
        resolve_page_url(Some("https://cli"), Some("https://env"), Some("https://cfg")),
        Some("https://cli".to_string())
    );
    assert_eq!(
        resolve_page_url(None, Some("  "), Some("https://cfg")),
        Some("https://cfg".to_string())
    );
    assert_eq!(resolve_page_url(None, None, None), None);
}
