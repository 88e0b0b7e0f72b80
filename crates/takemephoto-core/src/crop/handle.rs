//! The eight resize handles and what each one moves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::geometry::Selection;

/// Half the side length of a handle's square.
pub const HANDLE_HALF_SIZE: f64 = 5.0;

/// A resize grip on a corner or edge of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    NW,
    N,
    NE,
    W,
    E,
    SW,
    S,
    SE,
}

/// How a handle's pointer delta feeds into the selection.
///
/// Each field is -1, 0 or +1: the new value is `base + coefficient * delta`,
/// with `dx` driving `width`/`x` and `dy` driving `height`/`y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeCoefficients {
    pub width: i8,
    pub height: i8,
    pub x: i8,
    pub y: i8,
}

impl ResizeCoefficients {
    const fn new(width: i8, height: i8, x: i8, y: i8) -> Self {
        Self {
            width,
            height,
            x,
            y,
        }
    }
}

impl Handle {
    /// All handles, in the order they are laid out around the selection.
    pub const ALL: [Handle; 8] = [
        Handle::NW,
        Handle::N,
        Handle::NE,
        Handle::W,
        Handle::E,
        Handle::SW,
        Handle::S,
        Handle::SE,
    ];

    /// Delta coefficients for this handle.
    pub const fn coefficients(self) -> ResizeCoefficients {
        match self {
            Handle::NW => ResizeCoefficients::new(-1, -1, 1, 1),
            Handle::N => ResizeCoefficients::new(0, -1, 0, 1),
            Handle::NE => ResizeCoefficients::new(1, -1, 0, 1),
            Handle::W => ResizeCoefficients::new(-1, 0, 1, 0),
            Handle::E => ResizeCoefficients::new(1, 0, 0, 0),
            Handle::SW => ResizeCoefficients::new(-1, 1, 1, 0),
            Handle::S => ResizeCoefficients::new(0, 1, 0, 0),
            Handle::SE => ResizeCoefficients::new(1, 1, 0, 0),
        }
    }

    /// CSS cursor shown while hovering the handle.
    pub fn cursor(self) -> &'static str {
        match self {
            Handle::NW | Handle::SE => "nwse-resize",
            Handle::NE | Handle::SW => "nesw-resize",
            Handle::N | Handle::S => "ns-resize",
            Handle::W | Handle::E => "ew-resize",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Handle::NW => "nw",
            Handle::N => "n",
            Handle::NE => "ne",
            Handle::W => "w",
            Handle::E => "e",
            Handle::SW => "sw",
            Handle::S => "s",
            Handle::SE => "se",
        }
    }

    /// Top-left corner of this handle's square, relative to the selection's
    /// own top-left corner.
    ///
    /// Edge handles sit at the middle of their edge, so they follow the
    /// selection size after every resize.
    pub fn offset(self, selection: &Selection) -> (f64, f64) {
        let left = -HANDLE_HALF_SIZE;
        let center_x = selection.width / 2.0 - HANDLE_HALF_SIZE;
        let right = selection.width - HANDLE_HALF_SIZE;
        let top = -HANDLE_HALF_SIZE;
        let center_y = selection.height / 2.0 - HANDLE_HALF_SIZE;
        let bottom = selection.height - HANDLE_HALF_SIZE;

        match self {
            Handle::NW => (left, top),
            Handle::N => (center_x, top),
            Handle::NE => (right, top),
            Handle::W => (left, center_y),
            Handle::E => (right, center_y),
            Handle::SW => (left, bottom),
            Handle::S => (center_x, bottom),
            Handle::SE => (right, bottom),
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown drag target: {0}")]
pub struct UnknownTarget(pub String);

impl FromStr for Handle {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Handle::ALL
            .into_iter()
            .find(|handle| handle.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTarget(s.to_string()))
    }
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// The selection itself: the whole rectangle moves.
    Body,
    /// One of the resize handles.
    Resize(Handle),
}

impl FromStr for DragTarget {
    type Err = UnknownTarget;

    /// Parses `"body"` or a handle name such as `"nw"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("body") {
            return Ok(DragTarget::Body);
        }
        s.parse().map(DragTarget::Resize)
    }
}

/// Where to draw one handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandleBox {
    pub handle: Handle,
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub cursor: &'static str,
}

impl HandleBox {
    pub fn for_selection(handle: Handle, selection: &Selection) -> Self {
        let (left, top) = handle.offset(selection);
        Self {
            handle,
            left,
            top,
            size: HANDLE_HALF_SIZE * 2.0,
            cursor: handle.cursor(),
        }
    }
}
