//! Pixel surfaces shared by the crop, filter and export pipelines.
//!
//! A [`Frame`] mirrors the layout of a browser canvas `ImageData`: RGBA,
//! 4 bytes per pixel, row-major, no padding between rows.

use thiserror::Error;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Errors raised when a frame's buffer does not describe a usable surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match the dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// An RGBA image held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order.
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl Frame {
    /// Create a frame from dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            Self::expected_len(width, height),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a frame filled with a single RGBA colour.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(Self::expected_len(width, height))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a fully transparent frame, like a freshly created canvas.
    pub fn blank(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0, 0, 0, 0])
    }

    /// Buffer length required for the given dimensions.
    #[inline]
    pub fn expected_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * CHANNELS
    }

    /// Check that the frame has non-zero dimensions and a matching buffer.
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.width == 0 || self.height == 0 {
            return Err(FrameError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let expected = Self::expected_len(self.width, self.height);
        if self.pixels.len() != expected {
            return Err(FrameError::InvalidPixelData {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Read one pixel. Coordinates must be in range.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.index(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Write one pixel. Coordinates must be in range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.index(x, y);
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&rgba);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Create a frame from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbaImage` for further processing.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_frame() {
        let frame = Frame::filled(3, 2, [1, 2, 3, 4]);
        assert_eq!(frame.pixels.len(), 24);
        assert_eq!(frame.pixel(2, 1), [1, 2, 3, 4]);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_set_pixel() {
        let mut frame = Frame::blank(4, 4);
        frame.set_pixel(1, 2, [9, 8, 7, 6]);
        assert_eq!(frame.pixel(1, 2), [9, 8, 7, 6]);
        assert_eq!(frame.pixel(2, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn test_validate_zero_dimensions() {
        let frame = Frame {
            width: 0,
            height: 10,
            pixels: vec![],
        };
        assert_eq!(
            frame.validate(),
            Err(FrameError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_validate_short_buffer() {
        let frame = Frame {
            width: 2,
            height: 2,
            pixels: vec![0; 15],
        };
        assert_eq!(
            frame.validate(),
            Err(FrameError::InvalidPixelData {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn test_rgba_image_conversion() {
        let frame = Frame::filled(5, 3, [10, 20, 30, 255]);
        let img = frame.to_rgba_image().unwrap();
        assert_eq!(img.dimensions(), (5, 3));

        let back = Frame::from_rgba_image(img);
        assert_eq!(back, frame);
    }

    #[test]
    fn test_frame_error_display() {
        let err = FrameError::InvalidDimensions {
            width: 0,
            height: 0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: width (0) and height (0) must be non-zero"
        );
    }
}
