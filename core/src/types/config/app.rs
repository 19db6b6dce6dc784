use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory the viewer lists and reads from unless configured otherwise.
pub const DEFAULT_ROOT_DIR: &str = "/ext/txt_viewer";

/// User-facing application configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub shortcuts: ShortcutsConfig,
}

impl AppConfig {
    /// Returns the config file path within the given config directory.
    pub fn path(config_dir: &Path) -> PathBuf {
        config_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.general.root_dir.as_os_str().is_empty() {
            errors.push("root_dir must not be empty".to_string());
        }

        if self.viewer.read_chunk_bytes == 0 {
            errors.push("read_chunk_bytes must be at least 1".to_string());
        }

        if self.viewer.max_content_bytes == 0 {
            errors.push("max_content_bytes must be at least 1".to_string());
        }

        let keys = [
            &self.shortcuts.back,
            &self.shortcuts.favorite,
            &self.shortcuts.quit,
        ];
        if keys.iter().any(|key| key.trim().is_empty()) {
            errors.push("shortcuts must not be empty".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let or_default = |value: &String, default: String| {
            if value.trim().is_empty() {
                default
            } else {
                value.clone()
            }
        };

        Self {
            general: GeneralConfig {
                root_dir: if self.general.root_dir.as_os_str().is_empty() {
                    defaults.general.root_dir
                } else {
                    self.general.root_dir.clone()
                },
                ..self.general.clone()
            },
            viewer: ViewerConfig {
                read_chunk_bytes: if self.viewer.read_chunk_bytes == 0 {
                    defaults.viewer.read_chunk_bytes
                } else {
                    self.viewer.read_chunk_bytes
                },
                max_content_bytes: if self.viewer.max_content_bytes == 0 {
                    defaults.viewer.max_content_bytes
                } else {
                    self.viewer.max_content_bytes
                },
                recents_limit: self.viewer.recents_limit,
            },
            shortcuts: ShortcutsConfig {
                back: or_default(&self.shortcuts.back, defaults.shortcuts.back),
                favorite: or_default(&self.shortcuts.favorite, defaults.shortcuts.favorite),
                quit: or_default(&self.shortcuts.quit, defaults.shortcuts.quit),
            },
        }
    }
}

/// General application settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,
    #[serde(default = "default_true")]
    pub show_welcome: bool,
    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            show_welcome: true,
            log_level: default_log_level(),
        }
    }
}

/// Text viewer limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Size of each read issued while loading a file.
    #[serde(default = "default_read_chunk_bytes")]
    pub read_chunk_bytes: usize,
    /// Files longer than this are cut off and flagged as truncated.
    #[serde(default = "default_max_content_bytes")]
    pub max_content_bytes: usize,
    /// Oldest recents are evicted past this count. 0 keeps everything.
    #[serde(default)]
    pub recents_limit: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            read_chunk_bytes: default_read_chunk_bytes(),
            max_content_bytes: default_max_content_bytes(),
            recents_limit: 0,
        }
    }
}

/// Key bindings for line-oriented hosts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutsConfig {
    #[serde(default = "default_back")]
    pub back: String,
    #[serde(default = "default_favorite")]
    pub favorite: String,
    #[serde(default = "default_quit")]
    pub quit: String,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        Self {
            back: default_back(),
            favorite: default_favorite(),
            quit: default_quit(),
        }
    }
}

fn default_root_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT_DIR)
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Info
}

fn default_read_chunk_bytes() -> usize {
    256
}

fn default_max_content_bytes() -> usize {
    64 * 1024
}

fn default_back() -> String {
    "b".to_string()
}

fn default_favorite() -> String {
    "f".to_string()
}

fn default_quit() -> String {
    "q".to_string()
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
