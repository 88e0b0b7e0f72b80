//! Export WASM bindings.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode a frame to PNG bytes
//! - [`download_url`] - PNG-encode a frame and wrap it as a download URL
//! - [`random_file_name`] - Five random lowercase letters plus `.png`
//!
//! # Example
//!
//! ```typescript
//! link.href = download_url(master);
//! link.download = random_file_name();
//! ```

use crate::types::{to_js_error, JsFrame};
use takemephoto_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a frame to PNG bytes.
///
/// # Errors
///
/// Returns an error if the frame has zero dimensions or its pixel buffer
/// length doesn't match width * height * 4.
#[wasm_bindgen]
pub fn encode_png(frame: &JsFrame) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&frame.to_frame()).map_err(to_js_error)
}

/// PNG-encode `frame` as an `application/octet-stream` data URL, so the
/// browser saves it rather than opening it.
#[wasm_bindgen]
pub fn download_url(frame: &JsFrame) -> Result<String, JsValue> {
    let png = encode::encode_png(&frame.to_frame()).map_err(to_js_error)?;
    Ok(encode::download_data_url(&png))
}

/// Random download name such as `qhzba.png`, drawn from `Math.random`.
#[wasm_bindgen]
pub fn random_file_name() -> String {
    encode::random_file_name(js_sys::Math::random)
}
