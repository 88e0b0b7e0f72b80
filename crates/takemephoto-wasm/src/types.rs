//! WASM-compatible wrapper types for frame data.
//!
//! This module provides JavaScript-friendly types that wrap the core frame
//! type, handling the conversion between Rust and JavaScript representations.

use takemephoto_core::Frame;
use wasm_bindgen::prelude::*;

/// An RGBA frame wrapper for JavaScript.
///
/// The layout matches canvas `ImageData`: 4 bytes per pixel, row-major.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsFrame {
    /// Create a new JsFrame from dimensions and RGBA pixel data.
    ///
    /// # Arguments
    /// * `width` - Frame width in pixels
    /// * `height` - Frame height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsFrame {
        JsFrame {
            width,
            height,
            pixels,
        }
    }

    /// Get the frame width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the frame height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsFrame {
    /// Wrap a core frame without copying.
    pub(crate) fn from_frame(frame: Frame) -> Self {
        Self {
            width: frame.width,
            height: frame.height,
            pixels: frame.pixels,
        }
    }

    /// Convert back to a core frame.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_frame(&self) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }

    /// Move the pixel buffer out into a core frame.
    pub(crate) fn into_frame(self) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            pixels: self.pixels,
        }
    }
}

impl From<Frame> for JsFrame {
    fn from(frame: Frame) -> Self {
        Self::from_frame(frame)
    }
}

/// Convert any displayable error into a JavaScript string value.
pub(crate) fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
