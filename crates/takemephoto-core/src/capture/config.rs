//! Widget configuration passed in by the host page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default video and canvas width.
pub const DEFAULT_WIDTH: u32 = 400;
/// Default video and canvas height.
pub const DEFAULT_HEIGHT: u32 = 400;
/// Default capture button text.
pub const DEFAULT_CAPTURE_MSG: &str = "Capturer";

/// Errors for unusable configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("container id must not be empty")]
    MissingContainer,

    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Options for one capture widget.
///
/// Field names are camelCase on the JavaScript side; every field except
/// `containerId` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureConfig {
    /// Id of the element the widget is mounted in.
    pub container_id: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Video played instead of the camera when access fails.
    #[serde(default)]
    pub default_video_path: Option<String>,
    #[serde(default = "default_capture_msg")]
    pub capture_msg: String,
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_capture_msg() -> String {
    DEFAULT_CAPTURE_MSG.to_string()
}

impl CaptureConfig {
    /// Configuration with defaults for everything but the container.
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            default_video_path: None,
            capture_msg: default_capture_msg(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.container_id.trim().is_empty() {
            return Err(ConfigError::MissingContainer);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
