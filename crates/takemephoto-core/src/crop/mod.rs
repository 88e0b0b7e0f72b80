//! Interactive crop: selection geometry and the commit blit.
//!
//! A [`CropSession`] owns a [`CropRegion`], the selection rectangle that the
//! user drags and resizes inside the fixed canvas [`Bounds`]. Committing
//! stretches the selected pixels over the whole destination frame.
//!
//! # Coordinate System
//!
//! - Selection and pointer coordinates are canvas-local, in CSS pixels
//! - Origin is the top-left corner of the canvas
//! - Selections never leave the bounds and never shrink below [`MIN_SIZE`]
//!
//! # Session Lifecycle
//!
//! ```text
//! open -> (begin_drag -> update_drag* -> end_drag)* -> commit | discard
//! ```

mod blit;
mod engine;
mod geometry;
mod handle;
mod session;

use thiserror::Error;

use crate::frame::FrameError;

pub use blit::{draw_region_scaled, PixelRect, ScaleFilter};
pub use engine::CropRegion;
pub use geometry::{Bounds, Point, Selection, MIN_SIZE};
pub use handle::{
    DragTarget, Handle, HandleBox, ResizeCoefficients, UnknownTarget, HANDLE_HALF_SIZE,
};
pub use session::CropSession;

/// Errors from opening or committing a crop.
///
/// Out-of-range drags are not errors; they are clamped or rejected silently.
#[derive(Debug, Error, PartialEq)]
pub enum CropError {
    /// The canvas is smaller than the minimum selection.
    #[error("Bounds {width}x{height} cannot hold a minimum-size selection")]
    BoundsTooSmall { width: f64, height: f64 },

    /// A source or destination frame is malformed.
    #[error("Invalid surface: {0}")]
    InvalidSurface(#[from] FrameError),

    /// The region to copy, or the destination, has no pixels.
    #[error("Crop region is empty")]
    EmptyRegion,

    /// The region extends past the source frame.
    #[error("Crop region {region:?} exceeds source {width}x{height}")]
    RegionOutOfBounds {
        region: PixelRect,
        width: u32,
        height: u32,
    },
}
