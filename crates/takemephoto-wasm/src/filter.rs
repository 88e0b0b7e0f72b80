//! Filter WASM bindings.
//!
//! The toolbar is built from [`filter_catalogue`]; each slider input calls
//! [`preview_filter`] and the apply button replaces the master frame with
//! [`apply_filter`].
//!
//! # Example
//!
//! ```typescript
//! import { filter_catalogue, preview_filter } from '@takemephoto/wasm';
//!
//! for (const f of filter_catalogue()) {
//!   addButton(f.label, f.min, f.max, f.default);
//! }
//! slider.oninput = () => putFrame(preview, preview_filter(master, 'sepia', slider.value));
//! ```

use crate::types::{to_js_error, JsFrame};
use takemephoto_core::filter::{self, FilterKind, FILTERS};
use wasm_bindgen::prelude::*;

/// The filter toolbar as an array of
/// `{ kind, label, name, unit, default, min, max }`.
#[wasm_bindgen]
pub fn filter_catalogue() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&FILTERS).map_err(to_js_error)
}

/// Render a filtered copy of `master`. The master is not modified.
///
/// # Arguments
///
/// * `master` - The frame the preview is rendered from
/// * `name` - CSS filter name, e.g. `"hue-rotate"`
/// * `value` - Slider value in the filter's unit; clamped to its range
#[wasm_bindgen]
pub fn preview_filter(master: &JsFrame, name: &str, value: f32) -> Result<JsFrame, JsValue> {
    let kind: FilterKind = name.parse().map_err(to_js_error)?;
    filter::render_preview(&master.to_frame(), kind, value)
        .map(JsFrame::from_frame)
        .map_err(to_js_error)
}

/// Apply a filter, consuming `frame` and returning the result.
#[wasm_bindgen]
pub fn apply_filter(frame: JsFrame, name: &str, value: f32) -> Result<JsFrame, JsValue> {
    let kind: FilterKind = name.parse().map_err(to_js_error)?;
    let mut frame = frame.into_frame();
    filter::apply_filter(&mut frame, kind, value).map_err(to_js_error)?;
    Ok(JsFrame::from_frame(frame))
}

/// CSS `filter` value for a slider position, e.g. `"blur(4px)"`.
#[wasm_bindgen]
pub fn css_filter(name: &str, value: f32) -> Result<String, JsValue> {
    let kind: FilterKind = name.parse().map_err(to_js_error)?;
    Ok(kind.css(value))
}

/// Label shown next to the slider, e.g. `"150%"`.
#[wasm_bindgen]
pub fn filter_value_label(name: &str, value: f32) -> Result<String, JsValue> {
    let kind: FilterKind = name.parse().map_err(to_js_error)?;
    Ok(kind.value_label(value))
}
