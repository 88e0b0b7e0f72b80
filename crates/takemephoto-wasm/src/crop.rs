//! WASM bindings for the interactive crop.
//!
//! The page forwards pointer events to a [`JsCropSession`] in page
//! coordinates and restyles the selection box from its getters after each
//! move. Getters report canvas-local values.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const rect = canvas.getBoundingClientRect();
//! const session = new JsCropSession(
//!   rect.left + window.scrollX, rect.top + window.scrollY, canvas.width, canvas.height);
//! box.onmousedown = (e) => session.begin_drag('body', e.pageX, e.pageY);
//! window.onmousemove = (e) => { session.update_drag(e.pageX, e.pageY); render(); };
//! window.onmouseup = () => session.end_drag();
//!
//! applyButton.onclick = () => {
//!   const cropped = session.commit(preview, master);
//!   putFrame(masterCanvas, cropped);
//! };
//! ```

use crate::types::{to_js_error, JsFrame};
use takemephoto_core::crop::{Bounds, CropSession, DragTarget, Point, ScaleFilter};
use wasm_bindgen::prelude::*;

const CLOSED: &str = "crop session is closed";

/// A crop session driven from JavaScript.
///
/// After `commit` or `discard` the session is closed and every further call
/// that needs it returns an error (queries return neutral values).
#[wasm_bindgen]
pub struct JsCropSession {
    inner: Option<CropSession>,
}

#[wasm_bindgen]
impl JsCropSession {
    /// Open a session over a `width` x `height` canvas whose top-left corner
    /// is at (`left`, `top`) in page coordinates.
    #[wasm_bindgen(constructor)]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Result<JsCropSession, JsValue> {
        let bounds = Bounds::new(left, top, width, height);
        let session = CropSession::open(bounds).map_err(to_js_error)?;
        Ok(Self {
            inner: Some(session),
        })
    }

    /// Use nearest-neighbour sampling on commit instead of bilinear.
    pub fn set_pixelated(&mut self, pixelated: bool) -> Result<(), JsValue> {
        let session = self.inner.take().ok_or_else(|| JsValue::from_str(CLOSED))?;
        let filter = if pixelated {
            ScaleFilter::Nearest
        } else {
            ScaleFilter::Bilinear
        };
        self.inner = Some(session.with_filter(filter));
        Ok(())
    }

    /// Start dragging `target` (`"body"` or a handle: `"nw"`, `"n"`, `"ne"`,
    /// `"w"`, `"e"`, `"sw"`, `"s"`, `"se"`) from the page position
    /// (`page_x`, `page_y`).
    ///
    /// Returns `false` if another drag is already in progress or the
    /// position is not a finite number.
    pub fn begin_drag(&mut self, target: &str, page_x: f64, page_y: f64) -> Result<bool, JsValue> {
        let target: DragTarget = target.parse().map_err(to_js_error)?;
        let session = self.session_mut()?;
        let pointer = session.bounds().to_local(Point::new(page_x, page_y));
        Ok(session.begin_drag(target, pointer))
    }

    /// Feed a pointer move in page coordinates. Ignored when no drag is
    /// active, the session is closed, or the position is NaN or infinite.
    pub fn update_drag(&mut self, page_x: f64, page_y: f64) {
        if let Some(session) = self.inner.as_mut() {
            let pointer = session.bounds().to_local(Point::new(page_x, page_y));
            session.update_drag(pointer);
        }
    }

    /// End the current drag. Safe to call repeatedly.
    pub fn end_drag(&mut self) {
        if let Some(session) = self.inner.as_mut() {
            session.end_drag();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.as_ref().is_some_and(CropSession::is_dragging)
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.as_ref().map_or(0.0, |s| s.selection().x)
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.as_ref().map_or(0.0, |s| s.selection().y)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.inner.as_ref().map_or(0.0, |s| s.selection().width)
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.inner.as_ref().map_or(0.0, |s| s.selection().height)
    }

    /// Handle boxes as `[{ handle, left, top, size, cursor }, ...]`,
    /// positioned relative to the selection box.
    pub fn handles(&self) -> Result<JsValue, JsValue> {
        let session = self.session()?;
        serde_wasm_bindgen::to_value(&session.handle_boxes()).map_err(to_js_error)
    }

    /// Crop `source` to the selection and stretch it over `dest`'s size.
    ///
    /// Closes the session. On error `dest` is not used and the session is
    /// still closed, so the crop is abandoned.
    pub fn commit(&mut self, source: &JsFrame, dest: &JsFrame) -> Result<JsFrame, JsValue> {
        let session = self.inner.take().ok_or_else(|| JsValue::from_str(CLOSED))?;
        let mut target = dest.to_frame();
        session
            .commit(&source.to_frame(), &mut target)
            .map_err(to_js_error)?;
        Ok(JsFrame::from_frame(target))
    }

    /// Close the session without drawing.
    pub fn discard(&mut self) {
        if let Some(session) = self.inner.take() {
            session.discard();
        }
    }
}

impl JsCropSession {
    fn session(&self) -> Result<&CropSession, JsValue> {
        self.inner.as_ref().ok_or_else(|| JsValue::from_str(CLOSED))
    }

    fn session_mut(&mut self) -> Result<&mut CropSession, JsValue> {
        self.inner.as_mut().ok_or_else(|| JsValue::from_str(CLOSED))
    }
}
