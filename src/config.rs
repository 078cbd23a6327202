//! Persistent application settings.
//!
//! Stored as a small JSON file in the platform config directory. Loading is
//! lenient: a missing or unreadable file just yields the defaults so the app
//! always starts; saving reports errors to the caller.

use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Colour theme applied to the whole UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light]
    }

    /// The egui visuals this theme maps to.
    pub fn visuals(&self) -> eframe::egui::Visuals {
        match self {
            Theme::Dark => eframe::egui::Visuals::dark(),
            Theme::Light => eframe::egui::Visuals::light(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
}

/// Default settings file path.
fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stockroom")
        .join("settings.json")
}

impl Settings {
    /// Loads settings from the platform config directory.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Loads settings from `path`, falling back to defaults on any failure.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(settings) => return settings,
                    Err(e) => {
                        log::warn!("Failed to parse settings file, using defaults: {}", e);
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read settings file, using defaults: {}", e);
                }
            }
        }
        log::info!("Starting with default settings");
        Self::default()
    }

    /// Saves settings to the platform config directory.
    pub fn save(&self) -> AppResult<()> {
        self.save_to(&settings_path())
    }

    /// Saves settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::debug!("Saved settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_dark() {
        assert_eq!(Settings::default().theme, Theme::Dark);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings { theme: Theme::Light };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn theme_serializes_lowercase() {
        let json = serde_json::to_string(&Settings { theme: Theme::Light }).unwrap();
        assert!(json.contains("\"light\""));
    }
}
