//! Configuration management for the exercise motion detector

use crate::{
    constants::{
        DEFAULT_BLUR_KERNEL, DEFAULT_CAMERA_BUFFER_SIZE, DEFAULT_CAMERA_INDEX, DEFAULT_MOTION_THRESHOLD,
        DEFAULT_PIXEL_DELTA, DEFAULT_TRACKBAR_MAX, DEFAULT_WAIT_KEY_MS, DEFAULT_WINDOW_NAME,
    },
    motion_detector::DetectionParams,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Camera configuration
    pub camera: CameraConfig,

    /// Motion detection configuration
    pub detection: DetectionConfig,

    /// Display configuration
    pub display: DisplayConfig,
}

/// Capture device settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera device index
    pub index: i32,

    /// Capture buffer size (frames); 0 leaves the backend default
    pub buffer_size: i32,
}

/// Motion detection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Initial motion score threshold
    pub threshold: i32,

    /// Per-pixel intensity change that counts as motion
    pub pixel_delta: u8,

    /// Gaussian kernel size for mask smoothing (odd)
    pub blur_kernel: i32,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Window title
    pub window_name: String,

    /// Show the window; false runs headless
    pub gui: bool,

    /// Upper bound of the threshold slider
    pub trackbar_max: i32,

    /// Key polling delay per frame in milliseconds
    pub wait_key_ms: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            detection: DetectionConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            index: DEFAULT_CAMERA_INDEX,
            buffer_size: DEFAULT_CAMERA_BUFFER_SIZE,
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MOTION_THRESHOLD,
            pixel_delta: DEFAULT_PIXEL_DELTA,
            blur_kernel: DEFAULT_BLUR_KERNEL,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_name: DEFAULT_WINDOW_NAME.to_string(),
            gui: true,
            trackbar_max: DEFAULT_TRACKBAR_MAX,
            wait_key_ms: DEFAULT_WAIT_KEY_MS,
        }
    }
}

impl DetectionConfig {
    /// Differencing parameters for the detector
    #[must_use]
    pub fn params(&self) -> DetectionParams {
        DetectionParams {
            pixel_delta: self.pixel_delta,
            blur_kernel: self.blur_kernel,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.detection.threshold < 0 {
            return Err(Error::ConfigError("Motion threshold must not be negative".to_string()));
        }
        self.detection
            .params()
            .validate()
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        if self.camera.buffer_size < 0 {
            return Err(Error::ConfigError("Camera buffer size must not be negative".to_string()));
        }

        if self.display.window_name.trim().is_empty() {
            return Err(Error::ConfigError("Window name must not be empty".to_string()));
        }
        if self.display.trackbar_max <= 0 {
            return Err(Error::ConfigError("Trackbar maximum must be greater than 0".to_string()));
        }
        if self.display.wait_key_ms <= 0 {
            return Err(Error::ConfigError("Key wait delay must be greater than 0".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Exercise motion detection configuration

# Capture device
camera:
  index: 0
  buffer_size: 1

# Frame differencing
detection:
  threshold: 1500
  pixel_delta: 25
  blur_kernel: 5

# Display settings
display:
  window_name: "Exercise Detection"
  gui: true
  trackbar_max: 5000
  wait_key_ms: 30
"#;
