//! Settings persistence coordination.
//!
//! Settings are stored as JSON strings in eframe's persistent storage. The
//! interaction settings go through validation on the way in; a stored value
//! that no longer validates is replaced by the defaults.

use ecosite::SiteSettings;
use serde::{Deserialize, Serialize};

const SITE_SETTINGS_KEY: &str = "site_settings";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        serde_json::from_str(&json_str).ok()
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("could not store setting `{}`: {}", key, e),
        }
    }

    /// Loads the interaction settings, falling back to defaults when the
    /// stored value is missing or invalid.
    pub fn load_site_settings(storage: Option<&dyn eframe::Storage>) -> SiteSettings {
        let Some(json_str) = storage.and_then(|s| s.get_string(SITE_SETTINGS_KEY)) else {
            return SiteSettings::default();
        };
        match SiteSettings::from_json(&json_str) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("stored site settings rejected, using defaults: {}", e);
                SiteSettings::default()
            }
        }
    }

    pub fn save_site_settings(storage: &mut dyn eframe::Storage, settings: &SiteSettings) {
        Self::save_setting(storage, SITE_SETTINGS_KEY, settings);
    }
}
