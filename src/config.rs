use crate::image_classifier::models::model_config::ModelConfig;
use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("timezone offset out of range: {0}h")]
    InvalidTimezone(i32),
    #[error("crop size must be greater than zero")]
    InvalidCropSize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub logger_timezone: FixedOffset,
    /// Cropped images are written here.
    pub cache_dir: PathBuf,
    pub gallery_dir: PathBuf,
    pub crop_max_size: u32,
    pub model: ModelConfig,
    /// Analyze right after cropping and exit once a result or failure has
    /// been shown.
    pub run_once: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_timezone: western_indonesian_time(),
            cache_dir: std::env::temp_dir().join("asclepius"),
            gallery_dir: PathBuf::from("./gallery"),
            crop_max_size: 224,
            model: ModelConfig::default(),
            run_once: false,
        }
    }
}

/// Every field optional; present fields replace the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub timezone_offset_hours: Option<i32>,
    pub cache_dir: Option<PathBuf>,
    pub gallery_dir: Option<PathBuf>,
    pub crop_max_size: Option<u32>,
    pub model: Option<ModelConfig>,
    pub run_once: Option<bool>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Config::default().apply(file)
    }

    pub fn apply(mut self, file: ConfigFile) -> Result<Self, ConfigError> {
        if let Some(hours) = file.timezone_offset_hours {
            self.logger_timezone =
                FixedOffset::east_opt(hours * 3600).ok_or(ConfigError::InvalidTimezone(hours))?;
        }
        if let Some(cache_dir) = file.cache_dir {
            self.cache_dir = cache_dir;
        }
        if let Some(gallery_dir) = file.gallery_dir {
            self.gallery_dir = gallery_dir;
        }
        if let Some(crop_max_size) = file.crop_max_size {
            if crop_max_size == 0 {
                return Err(ConfigError::InvalidCropSize);
            }
            self.crop_max_size = crop_max_size;
        }
        if let Some(model) = file.model {
            self.model = model;
        }
        if let Some(run_once) = file.run_once {
            self.run_once = run_once;
        }
        Ok(self)
    }
}

fn western_indonesian_time() -> FixedOffset {
    FixedOffset::east_opt(7 * 3600).unwrap_or_else(|| Utc.fix())
}
