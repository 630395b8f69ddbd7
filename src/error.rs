use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid color for theme.{key}: {value:?}")]
    InvalidColor { key: &'static str, value: String },
    #[error("strip.max_label_width must be at least 1, got {0}")]
    InvalidWidth(u16),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
