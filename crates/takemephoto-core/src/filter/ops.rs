//! Pixel implementations of the CSS filter functions.
//!
//! Colour filters follow the Filter Effects Module formulas:
//! - brightness/contrast are linear transfer functions
//! - grayscale/sepia/saturate/hue-rotate are 3x3 colour matrices
//! - opacity scales alpha
//!
//! Blur is a Gaussian with the CSS radius used as the standard deviation.

use log::debug;

use super::FilterKind;
use crate::frame::{Frame, FrameError};

type Matrix = [[f32; 3]; 3];

/// Apply `kind` at `value` (in the filter's own unit) to `frame` in place.
///
/// Values outside the slider range are clamped first. The filter's default
/// value is a no-op.
pub fn apply_filter(frame: &mut Frame, kind: FilterKind, value: f32) -> Result<(), FrameError> {
    frame.validate()?;

    let value = kind.clamp(value);
    if kind.is_identity(value) {
        return Ok(());
    }
    debug!("applying {}", kind.css(value));

    match kind {
        FilterKind::Blur => apply_blur(frame, value),
        FilterKind::Brightness => {
            let amount = value / 100.0;
            map_rgb(frame, |c| c * amount)
        }
        FilterKind::Contrast => {
            let amount = value / 100.0;
            map_rgb(frame, |c| (c - 0.5) * amount + 0.5)
        }
        FilterKind::Grayscale => apply_matrix(frame, &grayscale_matrix(value / 100.0)),
        FilterKind::HueRotate => apply_matrix(frame, &hue_rotate_matrix(value)),
        FilterKind::Opacity => apply_opacity(frame, value / 100.0),
        FilterKind::Saturate => apply_matrix(frame, &saturate_matrix(value / 100.0)),
        FilterKind::Sepia => apply_matrix(frame, &sepia_matrix(value / 100.0)),
    }
    Ok(())
}

#[inline]
fn to_unit(v: u8) -> f32 {
    v as f32 / 255.0
}

#[inline]
fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Apply the same transfer function to each colour channel.
fn map_rgb(frame: &mut Frame, f: impl Fn(f32) -> f32) {
    for chunk in frame.pixels.chunks_exact_mut(4) {
        for c in &mut chunk[..3] {
            *c = to_byte(f(to_unit(*c)));
        }
    }
}

fn apply_matrix(frame: &mut Frame, m: &Matrix) {
    for chunk in frame.pixels.chunks_exact_mut(4) {
        let r = to_unit(chunk[0]);
        let g = to_unit(chunk[1]);
        let b = to_unit(chunk[2]);

        chunk[0] = to_byte(m[0][0] * r + m[0][1] * g + m[0][2] * b);
        chunk[1] = to_byte(m[1][0] * r + m[1][1] * g + m[1][2] * b);
        chunk[2] = to_byte(m[2][0] * r + m[2][1] * g + m[2][2] * b);
    }
}

fn apply_opacity(frame: &mut Frame, amount: f32) {
    for chunk in frame.pixels.chunks_exact_mut(4) {
        chunk[3] = to_byte(to_unit(chunk[3]) * amount);
    }
}

fn apply_blur(frame: &mut Frame, radius: f32) {
    if let Some(img) = frame.to_rgba_image() {
        *frame = Frame::from_rgba_image(image::imageops::blur(&img, radius));
    }
}

/// Grayscale matrix for `amount` in 0.0..=1.0.
fn grayscale_matrix(amount: f32) -> Matrix {
    let inv = 1.0 - amount;
    [
        [0.2126 + 0.7874 * inv, 0.7152 - 0.7152 * inv, 0.0722 - 0.0722 * inv],
        [0.2126 - 0.2126 * inv, 0.7152 + 0.2848 * inv, 0.0722 - 0.0722 * inv],
        [0.2126 - 0.2126 * inv, 0.7152 - 0.7152 * inv, 0.0722 + 0.9278 * inv],
    ]
}

/// Sepia matrix for `amount` in 0.0..=1.0.
fn sepia_matrix(amount: f32) -> Matrix {
    let inv = 1.0 - amount;
    [
        [0.393 + 0.607 * inv, 0.769 - 0.769 * inv, 0.189 - 0.189 * inv],
        [0.349 - 0.349 * inv, 0.686 + 0.314 * inv, 0.168 - 0.168 * inv],
        [0.272 - 0.272 * inv, 0.534 - 0.534 * inv, 0.131 + 0.869 * inv],
    ]
}

/// Saturation matrix; 1.0 is unchanged, 0.0 fully desaturated.
fn saturate_matrix(s: f32) -> Matrix {
    [
        [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
    ]
}

/// Hue rotation matrix for an angle in degrees.
fn hue_rotate_matrix(degrees: f32) -> Matrix {
    let (sin, cos) = degrees.to_radians().sin_cos();
    [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FILTERS, MIN_BLUR_RADIUS};

    fn single(rgba: [u8; 4]) -> Frame {
        Frame::filled(1, 1, rgba)
    }

    fn filtered(rgba: [u8; 4], kind: FilterKind, value: f32) -> [u8; 4] {
        let mut frame = single(rgba);
        apply_filter(&mut frame, kind, value).unwrap();
        frame.pixel(0, 0)
    }

    #[test]
    fn test_defaults_are_identity() {
        let original = Frame::filled(3, 3, [12, 99, 201, 180]);
        for spec in FILTERS.iter() {
            let mut frame = original.clone();
            apply_filter(&mut frame, spec.kind, spec.default).unwrap();
            assert_eq!(frame, original, "{} default changed pixels", spec.name);
        }
    }

    #[test]
    fn test_brightness() {
        assert_eq!(
            filtered([100, 50, 0, 255], FilterKind::Brightness, 200.0),
            [200, 100, 0, 255]
        );
        assert_eq!(
            filtered([100, 50, 0, 255], FilterKind::Brightness, 0.0),
            [0, 0, 0, 255]
        );
        // Saturates at white
        assert_eq!(
            filtered([200, 200, 200, 255], FilterKind::Brightness, 200.0),
            [255, 255, 255, 255]
        );
    }

    #[test]
    fn test_contrast_zero_is_mid_gray() {
        let [r, g, b, a] = filtered([10, 128, 250, 255], FilterKind::Contrast, 0.0);
        assert_eq!((r, g, b, a), (128, 128, 128, 255));
    }

    #[test]
    fn test_contrast_reduction_moves_toward_middle() {
        let [r, _, b, _] = filtered([10, 128, 250, 255], FilterKind::Contrast, 50.0);
        assert!(r > 10 && r < 128);
        assert!(b < 250 && b > 128);
    }

    #[test]
    fn test_full_grayscale_equalises_channels() {
        let [r, g, b, a] = filtered([200, 40, 90, 77], FilterKind::Grayscale, 100.0);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 77);
    }

    #[test]
    fn test_zero_saturation_equalises_channels() {
        let [r, g, b, _] = filtered([200, 40, 90, 255], FilterKind::Saturate, 0.0);
        assert!((r as i32 - g as i32).abs() <= 1);
        assert!((g as i32 - b as i32).abs() <= 1);
    }

    #[test]
    fn test_full_sepia() {
        // White maps to the sepia matrix row sums, clamped.
        let [r, g, b, _] = filtered([255, 255, 255, 255], FilterKind::Sepia, 100.0);
        assert_eq!(r, 255);
        assert_eq!(g, 255);
        assert_eq!(b, 239); // (0.272 + 0.534 + 0.131) * 255
    }

    #[test]
    fn test_hue_rotate_full_turn_is_near_identity() {
        let [r, g, b, _] = filtered([200, 40, 90, 255], FilterKind::HueRotate, 360.0);
        assert!((r as i32 - 200).abs() <= 1);
        assert!((g as i32 - 40).abs() <= 1);
        assert!((b as i32 - 90).abs() <= 1);
    }

    #[test]
    fn test_hue_rotate_keeps_gray() {
        let [r, g, b, _] = filtered([128, 128, 128, 255], FilterKind::HueRotate, 120.0);
        assert!((r as i32 - 128).abs() <= 1);
        assert!((g as i32 - 128).abs() <= 1);
        assert!((b as i32 - 128).abs() <= 1);
    }

    #[test]
    fn test_opacity_scales_alpha_only() {
        assert_eq!(
            filtered([10, 20, 30, 200], FilterKind::Opacity, 50.0),
            [10, 20, 30, 100]
        );
        assert_eq!(
            filtered([10, 20, 30, 200], FilterKind::Opacity, 0.0),
            [10, 20, 30, 0]
        );
    }

    #[test]
    fn test_blur_spreads_a_bright_dot() {
        let mut frame = Frame::filled(21, 21, [0, 0, 0, 255]);
        frame.set_pixel(10, 10, [255, 255, 255, 255]);
        apply_filter(&mut frame, FilterKind::Blur, 2.0).unwrap();

        assert_eq!((frame.width, frame.height), (21, 21));
        assert!(frame.pixel(10, 10)[0] < 255);
        assert!(frame.pixel(11, 10)[0] > 0);
    }

    #[test]
    fn test_tiny_blur_keeps_corners() {
        let original = Frame::filled(400, 400, [10, 20, 30, 255]);
        for radius in [0.001, 0.01, 0.1, 0.4] {
            let mut frame = original.clone();
            apply_filter(&mut frame, FilterKind::Blur, radius).unwrap();
            assert_eq!(frame, original, "radius {radius}");
        }

        let mut small = Frame::filled(3, 2, [10, 20, 30, 255]);
        apply_filter(&mut small, FilterKind::Blur, 0.001).unwrap();
        assert_eq!(small.pixel(0, 0), [10, 20, 30, 255]);
    }

    #[test]
    fn test_smallest_blur_keeps_corners_opaque() {
        let mut frame = Frame::filled(40, 40, [10, 20, 30, 255]);
        apply_filter(&mut frame, FilterKind::Blur, MIN_BLUR_RADIUS).unwrap();
        for (x, y) in [(0, 0), (39, 0), (0, 39), (39, 39)] {
            assert!(frame.pixel(x, y)[3] >= 254, "corner ({x}, {y})");
        }
    }

    #[test]
    fn test_nan_value_leaves_frame() {
        let original = Frame::filled(4, 4, [10, 20, 30, 255]);
        for kind in [FilterKind::Blur, FilterKind::Sepia, FilterKind::Brightness] {
            let mut frame = original.clone();
            apply_filter(&mut frame, kind, f32::NAN).unwrap();
            assert_eq!(frame, original);
        }
    }

    #[test]
    fn test_blur_uniform_stays_uniform() {
        let mut frame = Frame::filled(16, 16, [90, 90, 90, 255]);
        apply_filter(&mut frame, FilterKind::Blur, 3.0).unwrap();
        assert!(frame
            .pixels
            .chunks_exact(4)
            .all(|p| (p[0] as i32 - 90).abs() <= 1 && p[3] >= 254));
    }

    #[test]
    fn test_invalid_frame_rejected() {
        let mut frame = Frame {
            width: 2,
            height: 2,
            pixels: vec![0; 3],
        };
        assert!(apply_filter(&mut frame, FilterKind::Sepia, 50.0).is_err());
    }
}
