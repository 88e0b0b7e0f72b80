//! TakeMePhoto WASM - WebAssembly bindings for TakeMePhoto
//!
//! This crate exposes the takemephoto-core crop engine, filters and export to
//! JavaScript, plus the small amount of browser glue the widget needs.
//!
//! # Module Structure
//!
//! - `capture` - The widget object: config, countdown, camera stream
//! - `camera` - `getUserMedia` request and failure classification
//! - `canvas` - Reading and writing `<canvas>` pixels
//! - `crop` - Interactive crop sessions
//! - `filter` - Filter catalogue, previews and application
//! - `encode` - PNG export and download naming
//! - `types` - WASM-compatible wrapper types for frame data
//!
//! # Usage
//!
//! ```typescript
//! import init, { TakeMePhoto, request_camera } from '@takemephoto/wasm';
//!
//! await init();
//! const widget = new TakeMePhoto({ containerId: 'photo' });
//! widget.set_stream(await request_camera(widget.width, widget.height));
//! ```

use wasm_bindgen::prelude::*;

mod camera;
mod canvas;
mod capture;
mod crop;
mod encode;
mod filter;
mod types;

// Re-export public types
pub use camera::request_camera;
pub use canvas::{read_canvas, write_canvas};
pub use capture::{countdown_interval_ms, CameraFallback, JsCountdown, TakeMePhoto};
pub use crop::JsCropSession;
pub use encode::{download_url, encode_png, random_file_name};
pub use filter::{apply_filter, css_filter, filter_catalogue, filter_value_label, preview_filter};
pub use types::JsFrame;

/// Initialize the WASM module (called automatically on load)
///
/// Routes panics and `log` records to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Already initialised if the module is instantiated twice.
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
