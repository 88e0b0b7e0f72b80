//! Camera access through `getUserMedia`.
//!
//! This is the only asynchronous call in the widget. It resolves once, before
//! anything else can happen, and a failure is not retried.

use serde::Serialize;
use takemephoto_core::CaptureError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DomException, MediaStream, MediaStreamConstraints, MediaStreamTrack};

#[derive(Serialize)]
struct VideoConstraints {
    width: u32,
    height: u32,
}

/// Ask for a video-only stream of the given size.
///
/// Rejects with the browser's `DOMException` (or a message string when the
/// page has no media devices). Pass the rejection to
/// `TakeMePhoto.camera_failed` to get the fallback.
#[wasm_bindgen]
pub async fn request_camera(width: u32, height: u32) -> Result<MediaStream, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let devices = window.navigator().media_devices()?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::FALSE);
    let video = serde_wasm_bindgen::to_value(&VideoConstraints { width, height })?;
    constraints.set_video(&video);

    let promise = devices.get_user_media_with_constraints(&constraints)?;
    let stream = JsFuture::from(promise).await?;
    stream.dyn_into::<MediaStream>()
}

/// Classify a rejection from [`request_camera`].
pub(crate) fn classify_error(error: &JsValue) -> CaptureError {
    if let Some(exception) = error.dyn_ref::<DomException>() {
        return CaptureError::from_dom_exception(&exception.name(), &exception.message());
    }
    let message = error.as_string().unwrap_or_else(|| format!("{error:?}"));
    CaptureError::Unavailable(message)
}

/// Stop every track on `stream`, turning the camera light off.
pub(crate) fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}
