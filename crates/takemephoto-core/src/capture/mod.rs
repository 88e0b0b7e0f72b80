//! Capture session plumbing around the camera.
//!
//! The browser side (camera stream, video element, timers) lives in the WASM
//! bindings. This module holds the parts that are plain state:
//! - [`CaptureConfig`] - host-supplied options with defaults
//! - [`CaptureState`] / [`Countdown`] - capture button flow
//! - [`CaptureError`] / [`CameraFallback`] - camera failure handling

mod camera;
mod config;
mod state;

pub use camera::{CameraFallback, CaptureError};
pub use config::{CaptureConfig, ConfigError, DEFAULT_CAPTURE_MSG, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use state::{CaptureState, Countdown, CountdownStep, COUNTDOWN_INTERVAL_MS, COUNTDOWN_START};
