// Configuration loading.
// Reads config.json from the platform config directory and applies
// environment overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{BloomError, Result};
use crate::image::ImageSource;
use crate::state::Theme;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "bloom")
}

/// Path to the config file (~/.config/bloom/config.json on Linux).
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}

/// Directory for the log file.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Default directory holding the catalog images.
pub fn default_asset_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("images"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme at startup.
    pub theme: Theme,
    /// Base URL for catalog images. Takes precedence over `asset_dir`.
    pub image_base_url: Option<String>,
    /// Local directory for catalog images.
    pub asset_dir: Option<PathBuf>,
    /// Event poll interval in milliseconds.
    pub tick_rate_ms: u64,
    /// env_logger filter directives.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            image_base_url: None,
            asset_dir: None,
            tick_rate_ms: 100,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from the default location, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| BloomError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `BLOOM_*` overrides looked up through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(name) = lookup("BLOOM_THEME") {
            self.theme = Theme::parse(&name)
                .ok_or_else(|| BloomError::Config(format!("unknown theme '{}'", name)))?;
        }
        if let Some(url) = lookup("BLOOM_IMAGE_BASE_URL") {
            self.image_base_url = Some(url);
        }
        if let Some(dir) = lookup("BLOOM_ASSET_DIR") {
            self.asset_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(BloomError::Config("tick_rate_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Where catalog images are resolved from.
    pub fn image_source(&self) -> ImageSource {
        let dir = self.asset_dir.clone().or_else(default_asset_dir);
        ImageSource::new(self.image_base_url.as_deref(), dir)
    }
}
