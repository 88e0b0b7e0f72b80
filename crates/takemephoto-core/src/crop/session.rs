//! A single open crop: drag cycles followed by one commit or discard.

use log::debug;

use super::blit::{draw_region_scaled, PixelRect, ScaleFilter};
use super::engine::CropRegion;
use super::geometry::{Bounds, Point, Selection};
use super::handle::{DragTarget, HandleBox};
use super::CropError;
use crate::frame::Frame;

/// An open crop session over a fixed canvas.
///
/// Closing is done by value: [`commit`](Self::commit) and
/// [`discard`](Self::discard) consume the session, so a closed session
/// cannot be dragged or committed again.
#[derive(Debug, Clone, PartialEq)]
pub struct CropSession {
    region: CropRegion,
    filter: ScaleFilter,
}

impl CropSession {
    /// Open a session with the selection covering all of `bounds`.
    ///
    /// # Errors
    ///
    /// Returns `BoundsTooSmall` if the bounds cannot hold a minimum-size
    /// selection.
    pub fn open(bounds: Bounds) -> Result<Self, CropError> {
        if !bounds.can_hold_min_selection() {
            return Err(CropError::BoundsTooSmall {
                width: bounds.width,
                height: bounds.height,
            });
        }
        debug!("crop session opened over {}x{}", bounds.width, bounds.height);
        Ok(Self {
            region: CropRegion::new(bounds),
            filter: ScaleFilter::default(),
        })
    }

    /// Use `filter` when stretching the selection on commit.
    pub fn with_filter(mut self, filter: ScaleFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn selection(&self) -> &Selection {
        self.region.selection()
    }

    pub fn bounds(&self) -> &Bounds {
        self.region.bounds()
    }

    pub fn begin_drag(&mut self, target: DragTarget, pointer: Point) -> bool {
        self.region.begin_drag(target, pointer)
    }

    pub fn update_drag(&mut self, pointer: Point) {
        self.region.update_drag(pointer);
    }

    pub fn end_drag(&mut self) {
        self.region.end_drag();
    }

    pub fn is_dragging(&self) -> bool {
        self.region.is_dragging()
    }

    pub fn handle_boxes(&self) -> [HandleBox; 8] {
        self.region.handle_boxes()
    }

    /// The selection in whole pixels of a `source_width` x `source_height`
    /// surface.
    ///
    /// Selection coordinates are scaled by the ratio between the surface and
    /// the bounds (1:1 when the source is the bounds canvas), then rounded
    /// edge by edge and clamped into the surface.
    pub fn source_rect(
        &self,
        source_width: u32,
        source_height: u32,
    ) -> Result<PixelRect, CropError> {
        let bounds = self.region.bounds();
        let sel = self.region.selection();

        let scale_x = source_width as f64 / bounds.width;
        let scale_y = source_height as f64 / bounds.height;
        let (x, width) = snap_span(sel.x, sel.right(), scale_x, source_width);
        let (y, height) = snap_span(sel.y, sel.bottom(), scale_y, source_height);

        if width == 0 || height == 0 {
            return Err(CropError::EmptyRegion);
        }
        Ok(PixelRect::new(x, y, width, height))
    }

    /// Draw the selected part of `source` over the whole of `dest`.
    ///
    /// The result is computed in full before `dest` is touched; on error
    /// `dest` keeps its previous content.
    pub fn commit(self, source: &Frame, dest: &mut Frame) -> Result<(), CropError> {
        source.validate()?;
        dest.validate()?;

        let rect = self.source_rect(source.width, source.height)?;
        let output = draw_region_scaled(source, rect, dest.width, dest.height, self.filter)?;

        debug!(
            "crop committed: {}x{} at ({}, {}) -> {}x{}",
            rect.width, rect.height, rect.x, rect.y, dest.width, dest.height
        );
        *dest = output;
        Ok(())
    }

    /// Close the session without drawing anything.
    pub fn discard(self) {
        debug!("crop session discarded");
    }
}

/// Round `[start, end)` scaled by `scale` to whole pixels within `limit`.
fn snap_span(start: f64, end: f64, scale: f64, limit: u32) -> (u32, u32) {
    let limit = limit as f64;
    let lo = (start * scale).round().clamp(0.0, limit);
    let hi = (end * scale).round().clamp(lo, limit);
    (lo as u32, (hi - lo) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::Handle;

    fn position_frame(width: u32, height: u32) -> Frame {
        let mut frame = Frame::blank(width, height);
        for y in 0..height {
            for x in 0..width {
                let rgba = [(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255];
                frame.set_pixel(x, y, rgba);
            }
        }
        frame
    }

    /// Session whose selection has been dragged to `{x, y, w, h}` via the
    /// NW handle followed by the SE handle.
    fn session_with_selection(bounds: Bounds, x: f64, y: f64, w: f64, h: f64) -> CropSession {
        let mut session = CropSession::open(bounds).unwrap();
        let full = *session.selection();

        session.begin_drag(DragTarget::Resize(Handle::NW), Point::new(0.0, 0.0));
        session.update_drag(Point::new(x, y));
        session.end_drag();

        session.begin_drag(DragTarget::Resize(Handle::SE), Point::new(0.0, 0.0));
        session.update_drag(Point::new(x + w - full.width, y + h - full.height));
        session.end_drag();

        assert_eq!(*session.selection(), Selection::new(x, y, w, h));
        session
    }

    #[test]
    fn test_open_rejects_tiny_bounds() {
        let result = CropSession::open(Bounds::from_size(10, 400));
        assert!(matches!(result, Err(CropError::BoundsTooSmall { .. })));
    }

    #[test]
    fn test_commit_determinism() {
        let bounds = Bounds::from_size(400, 400);
        let session = session_with_selection(bounds, 10.0, 10.0, 100.0, 100.0)
            .with_filter(ScaleFilter::Nearest);

        let source = position_frame(400, 400);
        let mut dest = Frame::blank(400, 400);
        session.commit(&source, &mut dest).unwrap();

        assert_eq!((dest.width, dest.height), (400, 400));
        for y in 0..400 {
            for x in 0..400 {
                assert_eq!(dest.pixel(x, y), source.pixel(10 + x / 4, 10 + y / 4));
            }
        }
    }

    #[test]
    fn test_full_selection_commit_is_identity() {
        let source = position_frame(64, 48);
        let mut dest = Frame::blank(64, 48);
        let session = CropSession::open(Bounds::from_size(64, 48)).unwrap();
        session.commit(&source, &mut dest).unwrap();
        assert_eq!(dest, source);
    }

    #[test]
    fn test_discard_then_reopen_starts_fresh() {
        let bounds = Bounds::from_size(400, 400);
        let source = position_frame(400, 400);
        let mut dest = Frame::blank(400, 400);

        let mut session = CropSession::open(bounds).unwrap();
        session.begin_drag(DragTarget::Resize(Handle::SE), Point::new(400.0, 400.0));
        session.update_drag(Point::new(200.0, 150.0));
        session.end_drag();
        assert_eq!(*session.selection(), Selection::new(0.0, 0.0, 200.0, 150.0));
        session.discard();

        // The dragged selection is gone; a new session crops nothing away.
        let session = CropSession::open(bounds).unwrap();
        assert_eq!(*session.selection(), Selection::full(&bounds));
        session.commit(&source, &mut dest).unwrap();
        assert_eq!(dest, source);
    }

    #[test]
    fn test_failed_commit_leaves_destination_untouched() {
        let dest_before = position_frame(400, 400);
        let mut dest = dest_before.clone();
        let broken_source = Frame {
            width: 400,
            height: 400,
            pixels: vec![0; 100],
        };

        let session = CropSession::open(Bounds::from_size(400, 400)).unwrap();
        let result = session.commit(&broken_source, &mut dest);

        assert!(matches!(result, Err(CropError::InvalidSurface(_))));
        assert_eq!(dest, dest_before);
    }

    #[test]
    fn test_source_rect_scales_to_larger_source() {
        let bounds = Bounds::from_size(400, 400);
        let session = session_with_selection(bounds, 100.0, 50.0, 200.0, 100.0);
        let rect = session.source_rect(800, 800).unwrap();
        assert_eq!(rect, PixelRect::new(200, 100, 400, 200));
    }

    #[test]
    fn test_source_rect_rounds_fractional_edges() {
        let bounds = Bounds::from_size(400, 400);
        let mut session = CropSession::open(bounds).unwrap();
        session.begin_drag(DragTarget::Resize(Handle::NW), Point::new(0.0, 0.0));
        session.update_drag(Point::new(10.4, 20.6));
        session.end_drag();

        let rect = session.source_rect(400, 400).unwrap();
        assert_eq!(rect, PixelRect::new(10, 21, 390, 379));
    }

    #[test]
    fn test_commit_into_smaller_destination() {
        let session = session_with_selection(Bounds::from_size(100, 100), 0.0, 0.0, 50.0, 50.0)
            .with_filter(ScaleFilter::Nearest);
        let source = position_frame(100, 100);
        let mut dest = Frame::blank(25, 25);
        session.commit(&source, &mut dest).unwrap();

        assert_eq!((dest.width, dest.height), (25, 25));
        assert_eq!(dest.pixel(0, 0), source.pixel(1, 1));
        assert_eq!(dest.pixel(24, 24), source.pixel(49, 49));
    }
}
