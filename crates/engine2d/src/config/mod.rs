//! Configuration system
//!
//! Serializable settings for the camera and text elements, loadable from
//! TOML or RON files.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

use crate::foundation::math::{Vec2, Vec3};
use crate::render::{Camera2D, RenderResult};
use crate::text::FontProps;

/// File formats a [`Config`] can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick the format from the file extension
    ///
    /// # Errors
    /// [`ConfigError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Settings that can be loaded from and saved to TOML or RON files
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load settings from `path`, choosing the format by extension
    ///
    /// # Errors
    /// [`ConfigError::UnsupportedFormat`] before touching the file when the
    /// extension is unknown, otherwise I/O or parse errors.
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;

        let config = match format {
            ConfigFormat::Toml => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
            ConfigFormat::Ron => {
                ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
        };
        log::debug!("Loaded {:?} settings from {}", format, path.display());
        Ok(config)
    }

    /// Write settings to `path`, choosing the format by extension
    ///
    /// # Errors
    /// [`ConfigError::UnsupportedFormat`] for an unknown extension, otherwise
    /// serialization or I/O errors.
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the settings file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents do not match the settings type
    #[error("Parse error: {0}")]
    Parse(String),

    /// Settings could not be encoded
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// File extension is neither `.toml` nor `.ron`
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Camera settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Initial zoom factor
    pub zoom: f32,
    /// Whether the camera position is the view center
    pub centered: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            zoom: 1.0,
            centered: false,
        }
    }
}

impl Config for CameraConfig {}

impl CameraConfig {
    /// Build a camera from these settings
    ///
    /// # Errors
    /// Same as [`Camera2D::new`].
    pub fn build(&self) -> RenderResult<Camera2D> {
        Camera2D::new(self.width, self.height, self.zoom, self.centered)
    }
}

/// Placement and style of a text element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// World position
    pub position: [f32; 3],
    /// Layout scale, roughly the font size in world units
    pub size: [f32; 2],
    /// Rendering properties
    pub props: FontProps,
}

impl Config for TextConfig {}

impl TextConfig {
    /// Position as a vector
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    /// Size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::from(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("engine2d-config-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_camera_config_from_toml() {
        let config: CameraConfig =
            toml::from_str("width = 1024\nzoom = 2.0\ncentered = true").unwrap();

        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 600);
        assert_eq!(config.zoom, 2.0);
        assert!(config.centered);

        let camera = config.build().unwrap();
        assert_eq!(camera.width(), 1024.0);
        assert!(camera.is_centered());
    }

    #[test]
    fn test_camera_config_rejects_zero_zoom() {
        let config = CameraConfig { zoom: 0.0, ..Default::default() };
        assert!(config.build().is_err());
    }

    #[test]
    fn test_text_config_from_ron() {
        let config: TextConfig = ron::from_str(
            "(position: (10.0, 20.0, 0.0), size: (32.0, 32.0), \
             props: (color: (1.0, 0.0, 0.0, 1.0)))",
        )
        .unwrap();

        assert_eq!(config.position(), Vec3::new(10.0, 20.0, 0.0));
        assert_eq!(config.size(), Vec2::new(32.0, 32.0));
        assert_eq!(config.props.color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(config.props.stroke_width, 0.5);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path("camera.toml");
        let config = CameraConfig { width: 320, height: 200, zoom: 4.0, centered: true };

        config.save_to_file(&path).unwrap();
        let loaded = CameraConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = CameraConfig::default().save_to_file(&temp_path("camera.json"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/b.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("text.ron")).unwrap(), ConfigFormat::Ron);
        assert!(ConfigFormat::from_path(Path::new("toml")).is_err());
    }

    #[test]
    fn test_unknown_extension_fails_before_reading() {
        let result = CameraConfig::load_from_file("/nonexistent/camera.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_text_config_ron_round_trip() {
        let path = temp_path("text.ron");
        let config = TextConfig {
            position: [1.0, 2.0, 3.0],
            size: [24.0, 24.0],
            props: FontProps::default(),
        };

        config.save_to_file(path.as_path()).unwrap();
        let loaded = TextConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
