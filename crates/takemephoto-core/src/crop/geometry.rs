//! Rectangles and points in canvas-local coordinates.

use serde::{Deserialize, Serialize};

/// Smallest width or height a selection may be resized to.
pub const MIN_SIZE: f64 = 20.0;

/// A pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Neither coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The fixed canvas area a selection lives in.
///
/// `left`/`top` give the canvas origin in page space and are only used to
/// translate page-space pointers into local space; all selection arithmetic
/// happens against `width`/`height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bounds for a canvas of the given pixel size at the local origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f64, height as f64)
    }

    /// Translate a page-space position into this canvas' local space.
    pub fn to_local(&self, page: Point) -> Point {
        Point::new(page.x - self.left, page.y - self.top)
    }

    /// Whether a selection of at least `MIN_SIZE` fits inside.
    pub fn can_hold_min_selection(&self) -> bool {
        self.width >= MIN_SIZE && self.height >= MIN_SIZE
    }
}

/// The crop rectangle, in the same local space as its [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Selection {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A selection covering the whole of `bounds`.
    pub fn full(bounds: &Bounds) -> Self {
        Self::new(0.0, 0.0, bounds.width, bounds.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the selection satisfies every placement and size constraint.
    pub fn is_valid_within(&self, bounds: &Bounds) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.right() <= bounds.width
            && self.bottom() <= bounds.height
            && self.width >= MIN_SIZE
            && self.height >= MIN_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_selection_matches_bounds() {
        let bounds = Bounds::from_size(400, 300);
        let sel = Selection::full(&bounds);
        assert_eq!(sel, Selection::new(0.0, 0.0, 400.0, 300.0));
        assert!(sel.is_valid_within(&bounds));
    }

    #[test]
    fn test_to_local() {
        let bounds = Bounds::new(100.0, 50.0, 400.0, 400.0);
        let local = bounds.to_local(Point::new(130.0, 70.0));
        assert_eq!(local, Point::new(30.0, 20.0));
    }

    #[test]
    fn test_invalid_selections() {
        let bounds = Bounds::from_size(100, 100);
        assert!(!Selection::new(-1.0, 0.0, 50.0, 50.0).is_valid_within(&bounds));
        assert!(!Selection::new(60.0, 0.0, 50.0, 50.0).is_valid_within(&bounds));
        assert!(!Selection::new(0.0, 0.0, 10.0, 50.0).is_valid_within(&bounds));
        assert!(Selection::new(80.0, 80.0, 20.0, 20.0).is_valid_within(&bounds));
    }

    #[test]
    fn test_min_selection_fit() {
        assert!(Bounds::from_size(20, 20).can_hold_min_selection());
        assert!(!Bounds::from_size(400, 19).can_hold_min_selection());
    }
}
