//! Observable local preferences.
//!
//! [`SettingsStore`] keeps the current [`Settings`] in a `tokio::sync::watch`
//! channel. Setters write the new value to the `settings` table first and
//! publish it only after the write succeeded.

use std::str::FromStr;

use log::{debug, warn};
use tokio::sync::watch;

use crate::{
    documents::DocumentStore,
    error::{ExploreoError, Result},
    models::{ImageQuality, MapDisplayMode, Settings},
};

/// A single named preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    DarkMode,
    Language,
    MapDisplayMode,
    TrafficOverlay,
    ImageQuality,
}

impl SettingKey {
    pub const ALL: [SettingKey; 5] = [
        SettingKey::DarkMode,
        SettingKey::Language,
        SettingKey::MapDisplayMode,
        SettingKey::TrafficOverlay,
        SettingKey::ImageQuality,
    ];

    /// Column value in the `settings` table.
    pub fn storage_key(&self) -> &'static str {
        match self {
            SettingKey::DarkMode => "dark_mode",
            SettingKey::Language => "language",
            SettingKey::MapDisplayMode => "map_type",
            SettingKey::TrafficOverlay => "traffic_enabled",
            SettingKey::ImageQuality => "image_quality",
        }
    }

    /// Name shown to users.
    pub fn name(&self) -> &'static str {
        match self {
            SettingKey::DarkMode => "dark-mode",
            SettingKey::Language => "language",
            SettingKey::MapDisplayMode => "map-mode",
            SettingKey::TrafficOverlay => "traffic",
            SettingKey::ImageQuality => "image-quality",
        }
    }
}

impl FromStr for SettingKey {
    type Err = ExploreoError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        SettingKey::ALL
            .into_iter()
            .find(|key| key.name() == wanted || key.storage_key().replace('_', "-") == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = SettingKey::ALL.iter().map(SettingKey::name).collect();
                ExploreoError::validation("key")
                    .with_reason(format!("Unknown setting '{s}', expected one of {}", names.join(", ")))
            })
    }
}

/// Persisted, observable preferences.
pub struct SettingsStore {
    store: DocumentStore,
    sender: watch::Sender<Settings>,
}

impl SettingsStore {
    /// Loads the stored preferences, falling back to defaults per value.
    pub async fn open(store: DocumentStore) -> Result<Self> {
        let rows = store.with_db(|db| db.load_settings()).await?;
        let settings = settings_from_rows(&rows);
        debug!("Loaded {} stored settings", rows.len());

        let (sender, _) = watch::channel(settings);
        Ok(Self { store, sender })
    }

    pub fn current(&self) -> Settings {
        self.sender.borrow().clone()
    }

    /// Receiver that observes every published change.
    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.sender.subscribe()
    }

    pub async fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.persist(SettingKey::DarkMode, enabled.to_string(), |s| {
            s.dark_mode = enabled;
        })
        .await
    }

    pub async fn set_language(&self, language: &str) -> Result<()> {
        let language = language.trim().to_string();
        if language.is_empty() {
            return Err(ExploreoError::validation("language").with_reason("Language cannot be empty"));
        }
        let stored = language.clone();
        self.persist(SettingKey::Language, stored, move |s| s.language = language)
            .await
    }

    pub async fn set_map_display_mode(&self, mode: MapDisplayMode) -> Result<()> {
        self.persist(SettingKey::MapDisplayMode, mode.as_str().to_string(), |s| {
            s.map_display_mode = mode;
        })
        .await
    }

    pub async fn set_traffic_overlay(&self, enabled: bool) -> Result<()> {
        self.persist(SettingKey::TrafficOverlay, enabled.to_string(), |s| {
            s.traffic_overlay = enabled;
        })
        .await
    }

    pub async fn set_image_quality(&self, quality: ImageQuality) -> Result<()> {
        self.persist(SettingKey::ImageQuality, quality.as_str().to_string(), |s| {
            s.image_quality = quality;
        })
        .await
    }

    /// Parses `value` for `key` and applies it through the matching setter.
    pub async fn set(&self, key: SettingKey, value: &str) -> Result<()> {
        let invalid = |reason: String| ExploreoError::validation(key.name()).with_reason(reason);
        match key {
            SettingKey::DarkMode => self.set_dark_mode(parse_bool(value).map_err(invalid)?).await,
            SettingKey::Language => self.set_language(value).await,
            SettingKey::MapDisplayMode => {
                self.set_map_display_mode(value.parse().map_err(invalid)?)
                    .await
            }
            SettingKey::TrafficOverlay => {
                self.set_traffic_overlay(parse_bool(value).map_err(invalid)?)
                    .await
            }
            SettingKey::ImageQuality => {
                self.set_image_quality(value.parse().map_err(invalid)?)
                    .await
            }
        }
    }

    async fn persist<F>(&self, key: SettingKey, value: String, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Settings),
    {
        let storage_key = key.storage_key();
        self.store
            .with_db(move |db| db.put_setting(storage_key, &value))
            .await?;
        self.sender.send_modify(apply);
        debug!("Updated setting {}", key.name());
        Ok(())
    }
}

fn parse_bool(value: &str) -> std::result::Result<bool, String> {
    value
        .trim()
        .to_lowercase()
        .parse()
        .map_err(|_| format!("Expected true or false, got '{value}'"))
}

fn settings_from_rows(rows: &[(String, String)]) -> Settings {
    let mut settings = Settings::default();
    for (key, value) in rows {
        let Some(setting) = SettingKey::ALL
            .into_iter()
            .find(|k| k.storage_key() == key.as_str())
        else {
            warn!("Ignoring unknown stored setting '{key}'");
            continue;
        };
        let applied = match setting {
            SettingKey::DarkMode => parse_bool(value).map(|v| settings.dark_mode = v),
            SettingKey::Language if !value.trim().is_empty() => {
                settings.language = value.clone();
                Ok(())
            }
            SettingKey::Language => Err("empty language".to_string()),
            SettingKey::MapDisplayMode => value.parse().map(|v| settings.map_display_mode = v),
            SettingKey::TrafficOverlay => parse_bool(value).map(|v| settings.traffic_overlay = v),
            SettingKey::ImageQuality => value.parse().map(|v| settings.image_quality = v),
        };
        if let Err(reason) = applied {
            warn!("Using default for setting '{key}': {reason}");
        }
    }
    settings
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::documents::DocumentStoreBuilder;

    async fn create_test_store() -> (TempDir, DocumentStore) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = DocumentStoreBuilder::new()
            .with_database_path(Some(temp_dir.path().join("settings.db")))
            .build()
            .await
            .expect("Failed to create store");
        (temp_dir, store)
    }

    #[tokio::test]
    async fn test_defaults_when_nothing_stored() {
        let (_dir, store) = create_test_store().await;
        let settings = SettingsStore::open(store).await.unwrap();
        assert_eq!(settings.current(), Settings::default());
    }

    #[tokio::test]
    async fn test_setters_persist_and_publish() {
        let (_dir, store) = create_test_store().await;
        let settings = SettingsStore::open(store.clone()).await.unwrap();
        let mut receiver = settings.subscribe();

        settings.set_dark_mode(false).await.unwrap();
        assert!(receiver.has_changed().unwrap());
        assert!(!receiver.borrow_and_update().dark_mode);

        settings
            .set_map_display_mode(MapDisplayMode::Terrain)
            .await
            .unwrap();
        settings.set_language("isiZulu").await.unwrap();

        let reopened = SettingsStore::open(store).await.unwrap().current();
        assert!(!reopened.dark_mode);
        assert_eq!(reopened.map_display_mode, MapDisplayMode::Terrain);
        assert_eq!(reopened.language, "isiZulu");
        assert!(reopened.traffic_overlay);
    }

    #[tokio::test]
    async fn test_set_by_key() {
        let (_dir, store) = create_test_store().await;
        let settings = SettingsStore::open(store).await.unwrap();

        settings
            .set("image-quality".parse().unwrap(), "standard")
            .await
            .unwrap();
        settings
            .set("traffic_enabled".parse().unwrap(), "FALSE")
            .await
            .unwrap();

        let current = settings.current();
        assert_eq!(current.image_quality, ImageQuality::Standard);
        assert!(!current.traffic_overlay);
    }

    #[tokio::test]
    async fn test_invalid_value_is_rejected_without_change() {
        let (_dir, store) = create_test_store().await;
        let settings = SettingsStore::open(store).await.unwrap();

        let err = settings
            .set(SettingKey::MapDisplayMode, "hybrid")
            .await
            .unwrap_err();
        assert!(matches!(err, ExploreoError::Validation { .. }));
        assert_eq!(settings.current().map_display_mode, MapDisplayMode::Normal);
    }

    #[test]
    fn test_unknown_key() {
        assert!("volume".parse::<SettingKey>().is_err());
        assert_eq!("Map-Mode".parse::<SettingKey>().unwrap(), SettingKey::MapDisplayMode);
    }

    #[test]
    fn test_corrupt_rows_fall_back_to_defaults() {
        let rows = vec![
            ("dark_mode".to_string(), "maybe".to_string()),
            ("map_type".to_string(), "Satellite".to_string()),
            ("image_quality".to_string(), "ultra".to_string()),
            ("legacy".to_string(), "x".to_string()),
        ];
        let settings = settings_from_rows(&rows);

        assert!(settings.dark_mode);
        assert_eq!(settings.map_display_mode, MapDisplayMode::Satellite);
        assert_eq!(settings.image_quality, ImageQuality::High);
    }
}
