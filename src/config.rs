//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority
//! (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`GW_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output canvas configuration
    #[serde(default)]
    pub canvas: CanvasConfig,
    /// Shape configuration
    #[serde(default)]
    pub shape: ShapeConfig,
    /// Scene file configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`GW_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // GW_CANVAS__SIZE=21 -> canvas.size = 21
        figment = figment.merge(Env::prefixed("GW_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Output canvas configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Grid width and height in characters
    pub size: usize,
    /// Cells kept free between the shape's worst-case extent and the edge
    pub margin: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { size: 41, margin: 4 }
    }
}

/// Shape configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeConfig {
    /// Hypercube dimension (2 = square, 3 = cube, 4 = tesseract)
    pub dimension: usize,
    /// Full side length in shape-space units
    pub size: f32,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self { dimension: 4, size: 21.0 }
    }
}

/// Scene file configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Path to a RON scene file; when set it replaces the `[shape]` section
    /// and any per-plane spins it carries replace the uniform spin rate
    #[serde(default)]
    pub path: Option<String>,
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Frames per second
    pub frame_rate: f32,
    /// Angular rate for every canonical plane (radians/second)
    pub spin_rate: f32,
    /// Number of frames to render; 0 runs until interrupted
    pub frames: u64,
    /// Randomize glyphs within each brightness band; fresh entropy per run
    /// unless `texture_seed` pins it
    #[serde(default)]
    pub textured: bool,
    /// Seed for the glyph texture; implies `textured`
    #[serde(default)]
    pub texture_seed: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_rate: 12.0,
            spin_rate: 0.9,
            frames: 0,
            textured: false,
            texture_seed: None,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError { message: e.to_string() }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.canvas.size, 41);
        assert_eq!(config.shape.dimension, 4);
        assert_eq!(config.animation.frames, 0);
        assert!(!config.animation.textured);
        assert_eq!(config.animation.texture_seed, None);
        assert!(config.scene.path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("size"));
        assert!(toml.contains("spin_rate"));
    }

    #[test]
    fn test_load_from_missing_dir_uses_defaults() {
        let config = AppConfig::load_from("no/such/dir").unwrap();
        assert_eq!(config.canvas.size, 41);
    }
}
