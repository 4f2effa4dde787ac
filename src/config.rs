use color_eyre::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::slider::DEFAULT_SWIPE_THRESHOLD_PX;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Embedded catalog database location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Relative paths resolve against the working directory
    pub data_dir: PathBuf,
    pub namespace: String,
    pub database: String,
}

/// Carousel timing and gesture settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub artist_interval_ms: u64,
    pub album_interval_ms: u64,
    pub swipe_threshold_px: u32,
}

/// Terminal-to-pixel conversion for the viewport breakpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub cell_width_px: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub preloader_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            namespace: "cena".to_string(),
            database: "catalog".to_string(),
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            artist_interval_ms: 2000,
            album_interval_ms: 5000,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { cell_width_px: 8 }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { preloader_ms: 3000 }
    }
}

impl SliderConfig {
    #[must_use]
    pub fn artist_interval(&self) -> Duration {
        Duration::from_millis(self.artist_interval_ms)
    }

    #[must_use]
    pub fn album_interval(&self) -> Duration {
        Duration::from_millis(self.album_interval_ms)
    }
}

impl UiConfig {
    #[must_use]
    pub fn preloader_duration(&self) -> Duration {
        Duration::from_millis(self.preloader_ms)
    }
}

impl Config {
    /// Loads configuration from disk or creates default if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Returns the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "cena")
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Directory holding the database and the log file
    pub fn data_dir(&self) -> Result<PathBuf> {
        if self.storage.data_dir.is_absolute() {
            return Ok(self.storage.data_dir.clone());
        }
        Ok(std::env::current_dir()?.join(&self.storage.data_dir))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.slider.artist_interval_ms, 2000);
        assert_eq!(config.slider.album_interval_ms, 5000);
        assert_eq!(config.slider.swipe_threshold_px, 50);
        assert_eq!(config.viewport.cell_width_px, 8);
        assert_eq!(config.ui.preloader_ms, 3000);
        assert_eq!(config.storage.namespace, "cena");
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            "[slider]\nartist_interval_ms = 1500\nalbum_interval_ms = 3000\nswipe_threshold_px = 40\n",
        )
        .unwrap();
        assert_eq!(config.slider.artist_interval(), Duration::from_millis(1500));
        assert_eq!(config.slider.album_interval(), Duration::from_millis(3000));
        assert_eq!(config.viewport.cell_width_px, 8);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let written = toml::to_string_pretty(&Config::default()).unwrap();
        let config = Config::from_toml(&written).unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        assert_eq!(config.ui.preloader_duration(), Duration::from_secs(3));
    }
}
