//! TakeMePhoto Core - capture widget library
//!
//! This crate provides the browser-independent parts of the TakeMePhoto
//! widget: the interactive crop engine, pixel filters, PNG export and the
//! capture session state. The WASM bindings drive it from the page.
//!
//! # Module Structure
//!
//! - `crop` - Selection dragging/resizing and the commit blit
//! - `filter` - Filter catalogue and pixel implementations
//! - `encode` - PNG export and download naming
//! - `capture` - Configuration, countdown and camera failure handling
//! - `frame` - RGBA pixel surfaces

pub mod capture;
pub mod crop;
pub mod encode;
pub mod filter;
pub mod frame;

pub use capture::{CaptureConfig, CaptureError, CaptureState};
pub use crop::{Bounds, CropError, CropSession, DragTarget, Handle, Point, Selection, MIN_SIZE};
pub use filter::{apply_filter, FilterKind, FILTERS};
pub use frame::{Frame, FrameError};
