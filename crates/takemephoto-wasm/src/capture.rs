//! The capture widget object.
//!
//! Owns the configuration, the capture flags and the camera stream. DOM
//! construction stays in JavaScript; this type decides what happens when the
//! camera opens or fails, when the capture button is pressed and when the
//! countdown runs out.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const widget = new TakeMePhoto({ containerId: 'photo', defaultVideoPath: 'idle.mp4' });
//! if (widget.start()) {
//!   try {
//!     widget.set_stream(await request_camera(widget.width, widget.height));
//!   } catch (err) {
//!     const fallback = widget.camera_failed(err);
//!     timer.textContent = fallback.message;
//!   }
//! }
//! button.onclick = () => {
//!   const countdown = widget.request_capture();
//!   if (!countdown) return;
//!   const id = setInterval(() => {
//!     timer.textContent = countdown.tick();
//!     if (countdown.is_finished) {
//!       clearInterval(id);
//!       if (widget.snapshot(video, master)) buildToolbar();
//!     }
//!   }, countdown_interval_ms());
//! };
//! ```

use crate::camera::{classify_error, stop_stream};
use crate::canvas::draw_video;
use crate::types::to_js_error;
use log::debug;
use takemephoto_core::capture::{
    CameraFallback as CoreFallback, CaptureConfig, CaptureState, Countdown, COUNTDOWN_INTERVAL_MS,
};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlVideoElement, MediaStream};

/// Milliseconds between countdown ticks.
#[wasm_bindgen]
pub fn countdown_interval_ms() -> u32 {
    COUNTDOWN_INTERVAL_MS
}

/// One capture widget.
#[wasm_bindgen]
pub struct TakeMePhoto {
    config: CaptureConfig,
    state: CaptureState,
    stream: Option<MediaStream>,
}

#[wasm_bindgen]
impl TakeMePhoto {
    /// Create a widget from an options object such as
    /// `{ containerId, width, height, defaultVideoPath, captureMsg }`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<TakeMePhoto, JsValue> {
        let config: CaptureConfig = serde_wasm_bindgen::from_value(options)?;
        config.validate().map_err(to_js_error)?;
        Ok(Self::from_config(config))
    }

    #[wasm_bindgen(getter)]
    pub fn container_id(&self) -> String {
        self.config.container_id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.config.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// Capture button label.
    #[wasm_bindgen(getter)]
    pub fn capture_msg(&self) -> String {
        self.config.capture_msg.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn is_capturing(&self) -> bool {
        self.state.is_capturing()
    }

    #[wasm_bindgen(getter)]
    pub fn has_stream(&self) -> bool {
        self.stream.is_some()
    }

    /// Mark the widget started. Returns `false` on every call after the first,
    /// so the camera is only requested once.
    pub fn start(&mut self) -> bool {
        self.state.start()
    }

    /// Keep the opened camera stream, replacing and stopping any earlier one.
    pub fn set_stream(&mut self, stream: MediaStream) {
        debug!("camera stream attached");
        if let Some(old) = self.stream.replace(stream) {
            stop_stream(&old);
        }
    }

    /// The camera stream, for `video.srcObject`.
    #[wasm_bindgen(getter)]
    pub fn stream(&self) -> Option<MediaStream> {
        self.stream.clone()
    }

    /// Turn a `request_camera` rejection into the message and fallback video
    /// to show.
    pub fn camera_failed(&self, error: JsValue) -> CameraFallback {
        let error = classify_error(&error);
        CameraFallback::from(CoreFallback::for_error(&self.config, &error))
    }

    /// Start the pre-shot countdown. Returns `undefined` while one is already
    /// running.
    pub fn request_capture(&mut self) -> Option<JsCountdown> {
        self.state
            .request_capture()
            .map(|inner| JsCountdown { inner })
    }

    /// Draw the current video frame onto `canvas` at its natural size and
    /// end the capture.
    ///
    /// Returns `true` after the first capture, when the filter and crop
    /// toolbar should be built.
    pub fn snapshot(
        &mut self,
        video: &HtmlVideoElement,
        canvas: &HtmlCanvasElement,
    ) -> Result<bool, JsValue> {
        let drawn = draw_video(canvas, video);
        // The countdown is over either way.
        let first = self.state.finish_capture();
        drawn?;
        debug!("captured {}x{} frame", canvas.width(), canvas.height());
        Ok(first)
    }

    /// Stop the camera. Also happens when the widget is freed.
    pub fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            stop_stream(&stream);
        }
    }
}

impl TakeMePhoto {
    pub(crate) fn from_config(config: CaptureConfig) -> Self {
        Self {
            config,
            state: CaptureState::new(),
            stream: None,
        }
    }
}

impl Drop for TakeMePhoto {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The pre-shot countdown.
#[wasm_bindgen]
pub struct JsCountdown {
    inner: Countdown,
}

#[wasm_bindgen]
impl JsCountdown {
    /// Advance one step and return the timer label (`"Be Ready! 3"` ...
    /// `"done"`).
    pub fn tick(&mut self) -> String {
        self.inner.tick().label().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn remaining(&self) -> u32 {
        self.inner.remaining()
    }

    /// Whether the shot should be taken now.
    #[wasm_bindgen(getter)]
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

/// What to show after the camera could not be opened.
#[wasm_bindgen]
pub struct CameraFallback {
    message: String,
    video_path: Option<String>,
}

#[wasm_bindgen]
impl CameraFallback {
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Video to play instead of the camera, if one was configured.
    #[wasm_bindgen(getter)]
    pub fn video_path(&self) -> Option<String> {
        self.video_path.clone()
    }
}

impl From<CoreFallback> for CameraFallback {
    fn from(fallback: CoreFallback) -> Self {
        Self {
            message: fallback.message,
            video_path: fallback.video_path,
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_options_object() {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"containerId".into(), &"photo".into()).unwrap();
        js_sys::Reflect::set(&options, &"width".into(), &JsValue::from(640)).unwrap();

        let widget = TakeMePhoto::new(options.into()).unwrap();
        assert_eq!(widget.width(), 640);
        assert_eq!(widget.height(), 400);
    }

    #[wasm_bindgen_test]
    fn test_missing_container_rejected() {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"containerId".into(), &"".into()).unwrap();
        assert!(TakeMePhoto::new(options.into()).is_err());
    }

    #[wasm_bindgen_test]
    fn test_camera_failed_classifies() {
        let widget = TakeMePhoto::from_config(CaptureConfig::new("photo"));
        let fallback = widget.camera_failed(JsValue::from_str("no window"));
        assert_eq!(fallback.message(), "Camera unavailable: no window");
        assert!(fallback.video_path().is_none());
    }
}
