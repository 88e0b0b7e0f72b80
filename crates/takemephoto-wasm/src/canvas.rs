//! Moving frames between `<canvas>` elements and WASM memory.

use crate::types::JsFrame;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, ImageData};

/// The canvas's 2D rendering context.
pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("canvas context is not 2d"))
}

/// Copy the whole canvas into a frame.
#[wasm_bindgen]
pub fn read_canvas(canvas: &HtmlCanvasElement) -> Result<JsFrame, JsValue> {
    let (width, height) = (canvas.width(), canvas.height());
    let data = context_2d(canvas)?.get_image_data(0.0, 0.0, width as f64, height as f64)?;
    Ok(JsFrame::new(data.width(), data.height(), data.data().0))
}

/// Draw `frame` at the canvas origin, resizing the canvas to match first.
#[wasm_bindgen]
pub fn write_canvas(canvas: &HtmlCanvasElement, frame: &JsFrame) -> Result<(), JsValue> {
    let pixels = frame.pixels();
    let data = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(pixels.as_slice()),
        frame.width(),
        frame.height(),
    )?;

    if canvas.width() != frame.width() {
        canvas.set_width(frame.width());
    }
    if canvas.height() != frame.height() {
        canvas.set_height(frame.height());
    }
    context_2d(canvas)?.put_image_data(&data, 0.0, 0.0)
}

/// Draw the current video frame at the canvas origin, at the video's own
/// size. Anything past the canvas edge is clipped.
pub(crate) fn draw_video(
    canvas: &HtmlCanvasElement,
    video: &HtmlVideoElement,
) -> Result<(), JsValue> {
    context_2d(canvas)?.draw_image_with_html_video_element(video, 0.0, 0.0)
}
