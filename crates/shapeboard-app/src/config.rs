//! Application configuration.

use kurbo::Size;
use peniko::Color;
use serde::{Deserialize, Serialize};
use shapeboard_core::canvas::CanvasSettings;
use shapeboard_core::color::{ColorError, ShapeColor};
use shapeboard_core::generator::{GeneratorConfig, ShapeSizes};
use shapeboard_core::shapes::{HitTolerance, LINE_HIT_TOLERANCE, ShapeError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV: &str = "SHAPEBOARD_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid background color: {0}")]
    Color(#[from] ColorError),
    #[error("Window size must be non-zero, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("Line tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
    #[error("Invalid random shape size: {0}")]
    ShapeSize(#[from] ShapeError),
}

/// Application configuration. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    /// Initial logical surface width.
    pub width: u32,
    /// Initial logical surface height.
    pub height: u32,
    /// Color token the surface is cleared to.
    pub background_color: String,
    /// Distance in pixels within which a click hits a line.
    pub line_tolerance: f64,
    /// Fixed RNG seed for reproducible sessions.
    pub seed: Option<u64>,
    /// Kinds randomly added shapes are drawn from.
    pub random_kinds: Vec<String>,
    /// Dimensions of randomly added shapes.
    pub random_sizes: ShapeSizes,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Shapeboard".to_string(),
            width: 800,
            height: 600,
            background_color: "#ffffff".to_string(),
            line_tolerance: LINE_HIT_TOLERANCE,
            seed: None,
            random_kinds: GeneratorConfig::default().kinds,
            random_sizes: ShapeSizes::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from the file named by `SHAPEBOARD_CONFIG`, or use defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if !self.line_tolerance.is_finite() || self.line_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.line_tolerance));
        }
        self.random_sizes.validate()?;
        self.background()?;
        Ok(())
    }

    /// The parsed background color.
    pub fn background(&self) -> Result<Color, ConfigError> {
        Ok(ShapeColor::parse(&self.background_color)?.into())
    }

    /// Settings for the canvas at the configured window size.
    pub fn canvas_settings(&self) -> CanvasSettings {
        self.canvas_settings_for(Size::new(self.width as f64, self.height as f64))
    }

    /// Settings for a canvas on a surface of the given logical size.
    pub fn canvas_settings_for(&self, surface_size: Size) -> CanvasSettings {
        CanvasSettings {
            surface_size,
            tolerance: HitTolerance {
                stroke: self.line_tolerance,
                ..HitTolerance::default()
            },
            generator: GeneratorConfig {
                kinds: self.random_kinds.clone(),
                sizes: self.random_sizes,
            },
            seed: self.seed,
        }
    }
}
