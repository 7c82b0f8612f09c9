//! Settings persistence
//!
//! Loads UI settings from ~/.tinted.toml (or %USERPROFILE%\.tinted.toml on Windows)
//!
//! Format: a flat TOML table. Theme switches merge the theme roles and
//! the derived appearance values into it and save it back in one write.
//!
//! Example:
//! ```text
//! font_family = "Fira Code"
//! font_size = 14
//! keyword_color = "#C678DD"
//! menu_bg = "#282C34"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::theme::{Appearance, ThemeConfig};

/// Flat key-value settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: toml::Table,
}

impl Settings {
    /// Create empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a string setting
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|value| value.as_str())
    }

    /// Get a setting of any type
    pub fn value(&self, key: &str) -> Option<&toml::Value> {
        self.values.get(key)
    }

    /// Set a string setting
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), toml::Value::String(value.into()));
    }

    /// Number of settings
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no settings
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy of these settings with a theme's roles and derived
    /// appearance merged in
    pub fn merged_with_theme(&self, theme: &ThemeConfig) -> Self {
        let mut merged = self.clone();
        for (key, value) in theme.to_entries() {
            merged.set(key, value);
        }
        for (key, value) in Appearance::derive(theme).to_entries() {
            merged.set(key, value);
        }
        merged
    }

    /// Parse settings file contents
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Settings(e.to_string()))
    }

    /// Render settings as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Loader/saver for persisted settings
pub trait SettingsStore {
    /// Read the stored settings
    fn load(&self) -> Result<Settings>;

    /// Replace the stored settings
    fn save(&mut self, settings: &Settings) -> Result<()>;
}

/// Settings kept in a TOML file
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default per-user location
    pub fn user() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    /// Get the default settings file path
    pub fn default_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".tinted.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".tinted.toml"))
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    /// A missing file reads as empty settings
    fn load(&self) -> Result<Settings> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Settings::parse(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        fs::write(&self.path, settings.to_toml()?)?;
        Ok(())
    }
}

/// Settings held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    settings: Settings,
    saves: usize,
}

impl MemorySettingsStore {
    /// Create a store preloaded with settings
    pub fn new(settings: Settings) -> Self {
        Self { settings, saves: 0 }
    }

    /// Currently stored settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of completed saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Settings> {
        Ok(self.settings.clone())
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        self.settings = settings.clone();
        self.saves += 1;
        Ok(())
    }
}
