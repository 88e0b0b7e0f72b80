//! Scaled region copy between frames.
//!
//! This is the pixel half of a crop commit: a rectangle of the source is
//! stretched to exactly fill a destination size (no aspect preservation),
//! the same as `drawImage(src, sx, sy, sw, sh, 0, 0, dw, dh)` on a canvas.
//!
//! # Algorithm
//!
//! Inverse mapping: each destination pixel centre is projected back into the
//! source region and sampled there.
//!
//! ```text
//! src_x = region.x + (dst_x + 0.5) * region.width / dst_width
//! ```

use serde::{Deserialize, Serialize};

use super::CropError;
use crate::frame::{Frame, CHANNELS};

/// Sampling used when stretching a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleFilter {
    /// Pixel replication. Exact for integer upscales.
    Nearest,
    /// Bilinear interpolation, matching canvas image smoothing.
    #[default]
    Bilinear,
}

/// A rectangle in whole source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn fits_in(&self, frame: &Frame) -> bool {
        self.x as u64 + self.width as u64 <= frame.width as u64
            && self.y as u64 + self.height as u64 <= frame.height as u64
    }
}

/// Copy `region` of `source` into a new `dest_width` x `dest_height` frame.
///
/// # Errors
///
/// - `InvalidSurface` if the source buffer is malformed
/// - `EmptyRegion` if the region or destination size is zero
/// - `RegionOutOfBounds` if the region extends past the source
pub fn draw_region_scaled(
    source: &Frame,
    region: PixelRect,
    dest_width: u32,
    dest_height: u32,
    filter: ScaleFilter,
) -> Result<Frame, CropError> {
    source.validate()?;

    if region.width == 0 || region.height == 0 || dest_width == 0 || dest_height == 0 {
        return Err(CropError::EmptyRegion);
    }
    if !region.fits_in(source) {
        return Err(CropError::RegionOutOfBounds {
            region,
            width: source.width,
            height: source.height,
        });
    }

    let scale_x = region.width as f64 / dest_width as f64;
    let scale_y = region.height as f64 / dest_height as f64;

    let mut output = vec![0u8; Frame::expected_len(dest_width, dest_height)];

    for dst_y in 0..dest_height {
        let v = (dst_y as f64 + 0.5) * scale_y;
        for dst_x in 0..dest_width {
            let u = (dst_x as f64 + 0.5) * scale_x;

            let pixel = match filter {
                ScaleFilter::Nearest => sample_nearest(source, &region, u, v),
                ScaleFilter::Bilinear => sample_bilinear(source, &region, u, v),
            };

            let dst_idx = (dst_y as usize * dest_width as usize + dst_x as usize) * CHANNELS;
            output[dst_idx..dst_idx + CHANNELS].copy_from_slice(&pixel);
        }
    }

    Ok(Frame::new(dest_width, dest_height, output))
}

/// Sample the pixel containing region-relative position `(u, v)`.
#[inline]
fn sample_nearest(source: &Frame, region: &PixelRect, u: f64, v: f64) -> [u8; 4] {
    let px = (u.floor() as u32).min(region.width - 1);
    let py = (v.floor() as u32).min(region.height - 1);
    source.pixel(region.x + px, region.y + py)
}

/// Sample using the four pixels around region-relative position `(u, v)`.
///
/// Pixel centres sit at half-integers; samples near the region edge clamp
/// to the edge pixels so nothing outside the region bleeds in.
fn sample_bilinear(source: &Frame, region: &PixelRect, u: f64, v: f64) -> [u8; 4] {
    let max_x = (region.width - 1) as f64;
    let max_y = (region.height - 1) as f64;
    let x = (u - 0.5).clamp(0.0, max_x);
    let y = (v - 0.5).clamp(0.0, max_y);

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(region.width - 1);
    let y1 = (y0 + 1).min(region.height - 1);

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = source.pixel(region.x + x0, region.y + y0);
    let p10 = source.pixel(region.x + x1, region.y + y0);
    let p01 = source.pixel(region.x + x0, region.y + y1);
    let p11 = source.pixel(region.x + x1, region.y + y1);

    let mut result = [0u8; 4];
    for i in 0..CHANNELS {
        let v = p00[i] as f64 * (1.0 - fx) * (1.0 - fy)
            + p10[i] as f64 * fx * (1.0 - fy)
            + p01[i] as f64 * (1.0 - fx) * fy
            + p11[i] as f64 * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }
    result
}
