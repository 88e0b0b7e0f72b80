//! Pointer-driven selection geometry.
//!
//! [`CropRegion`] turns press/move/release events into a selection rectangle
//! that always stays inside its bounds and never shrinks below
//! [`MIN_SIZE`](super::MIN_SIZE).
//!
//! # Moving vs. resizing
//!
//! Dragging the body translates the snapshot taken at press time and pins
//! each axis against the walls, so the box "stops at the wall" instead of
//! refusing the move. Dragging a handle recomputes the affected edges from the
//! snapshot; each axis is checked on its own and an axis that would break a
//! constraint simply keeps its current value for that move.

use super::geometry::{Bounds, Point, Selection, MIN_SIZE};
use super::handle::{DragTarget, Handle, HandleBox};

/// State captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub target: DragTarget,
    /// Pointer position at press time.
    pub anchor: Point,
    /// Selection at press time.
    pub snapshot: Selection,
}

/// A selection rectangle constrained to fixed bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct CropRegion {
    bounds: Bounds,
    selection: Selection,
    drag: Option<DragSession>,
}

impl CropRegion {
    /// Start with a selection covering all of `bounds`.
    ///
    /// The caller must ensure the bounds can hold a minimum-size selection;
    /// [`CropSession::open`](super::CropSession::open) checks this.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            selection: Selection::full(&bounds),
            drag: None,
        }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin dragging `target` from `pointer`.
    ///
    /// Returns `false` and changes nothing if a drag is already active or
    /// the pointer is not a finite position.
    pub fn begin_drag(&mut self, target: DragTarget, pointer: Point) -> bool {
        if self.drag.is_some() || !pointer.is_finite() {
            return false;
        }
        self.drag = Some(DragSession {
            target,
            anchor: pointer,
            snapshot: self.selection,
        });
        true
    }

    /// Apply a pointer move to the active drag. No-op when idle or when the
    /// pointer is NaN or infinite.
    pub fn update_drag(&mut self, pointer: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        if !pointer.is_finite() {
            return;
        }

        let dx = pointer.x - drag.anchor.x;
        let dy = pointer.y - drag.anchor.y;

        match drag.target {
            DragTarget::Body => self.move_body(&drag.snapshot, dx, dy),
            DragTarget::Resize(handle) => self.resize(handle, &drag.snapshot, dx, dy),
        }
    }

    /// Finish the active drag, if any. Calling it again has no effect.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Current placement of every handle, relative to the selection origin.
    pub fn handle_boxes(&self) -> [HandleBox; 8] {
        Handle::ALL.map(|handle| HandleBox::for_selection(handle, &self.selection))
    }

    fn move_body(&mut self, snapshot: &Selection, dx: f64, dy: f64) {
        let max_x = last_start(self.bounds.width, snapshot.width);
        let max_y = last_start(self.bounds.height, snapshot.height);
        self.selection.x = pin_to_wall(snapshot.x + dx, max_x);
        self.selection.y = pin_to_wall(snapshot.y + dy, max_y);
    }

    fn resize(&mut self, handle: Handle, snapshot: &Selection, dx: f64, dy: f64) {
        let coeff = handle.coefficients();

        if let Some((x, width)) = resize_axis(
            snapshot.x,
            snapshot.width,
            self.bounds.width,
            coeff.width,
            coeff.x,
            dx,
        ) {
            self.selection.x = x;
            self.selection.width = width;
        }

        if let Some((y, height)) = resize_axis(
            snapshot.y,
            snapshot.height,
            self.bounds.height,
            coeff.height,
            coeff.y,
            dy,
        ) {
            self.selection.y = y;
            self.selection.height = height;
        }
    }
}

/// Largest start with `start + size <= extent` once rounded.
///
/// `extent - size` alone can come back one ulp too large.
fn last_start(extent: f64, size: f64) -> f64 {
    let mut start = extent - size;
    while start > 0.0 && start + size > extent {
        start = f64::from_bits(start.to_bits() - 1);
    }
    start
}

/// Clamp a start position into `[0, max]`, overflow past `max` winning.
#[inline]
fn pin_to_wall(start: f64, max: f64) -> f64 {
    if start > max {
        max
    } else if start < 0.0 {
        0.0
    } else {
        start
    }
}

/// Resize one axis, returning the new `(start, size)` or `None` to reject.
///
/// A negative size coefficient means the start edge is moving and the far
/// edge stays put, so the size is measured back from that fixed edge.
/// Both edges are checked either way; with fractional pointers the sum can
/// land one ulp past the wall.
fn resize_axis(
    start: f64,
    size: f64,
    extent: f64,
    size_coeff: i8,
    start_coeff: i8,
    delta: f64,
) -> Option<(f64, f64)> {
    if size_coeff == 0 {
        return None;
    }

    let new_start = start + f64::from(start_coeff) * delta;
    let new_size = if size_coeff < 0 {
        ((start + size) - new_start).min(extent - new_start)
    } else {
        size + f64::from(size_coeff) * delta
    };

    let in_bounds = new_start >= 0.0 && new_start + new_size <= extent;
    (new_size >= MIN_SIZE && in_bounds).then_some((new_start, new_size))
}
