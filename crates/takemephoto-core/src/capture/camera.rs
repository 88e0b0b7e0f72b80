//! Classifying camera failures and choosing the fallback.
//!
//! Camera access can fail once, when permission is requested. The failure is
//! shown to the user and, if configured, a static video plays instead. There
//! is no retry.

use log::warn;
use thiserror::Error;

use super::config::CaptureConfig;

/// Why the camera could not be opened.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaptureError {
    /// The user or browser refused access.
    #[error("Camera permission denied: {0}")]
    PermissionDenied(String),

    /// No camera matches the requested constraints.
    #[error("No camera available: {0}")]
    NoDevice(String),

    /// Any other failure, including browsers without media device support.
    #[error("Camera unavailable: {0}")]
    Unavailable(String),
}

impl CaptureError {
    /// Map a `DOMException` name and message from `getUserMedia`.
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        let message = message.to_string();
        match name {
            "NotAllowedError" | "SecurityError" => CaptureError::PermissionDenied(message),
            "NotFoundError" | "OverconstrainedError" => CaptureError::NoDevice(message),
            _ => CaptureError::Unavailable(message),
        }
    }
}

/// What the widget shows after a camera failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraFallback {
    /// Text for the timer label.
    pub message: String,
    /// Video to play in place of the stream.
    pub video_path: Option<String>,
}

impl CameraFallback {
    pub fn for_error(config: &CaptureConfig, error: &CaptureError) -> Self {
        warn!("camera request failed: {error}");
        Self {
            message: error.to_string(),
            video_path: config.default_video_path.clone(),
        }
    }
}
