//! Visual filters offered after a photo is captured.
//!
//! Each filter is one CSS filter function with a single slider value. The
//! catalogue below describes the slider (unit, range, starting value) and
//! [`apply_filter`] reproduces the effect on a [`Frame`] so previews and
//! exports do not depend on the browser's canvas `filter` support.
//!
//! ## Filters
//! - Blur (px)
//! - Brightness (%)
//! - Contrast (%)
//! - Grayscale (%)
//! - Hue rotate (deg)
//! - Opacity (%)
//! - Saturate (%)
//! - Sepia (%)

mod ops;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::frame::{Frame, FrameError};

pub use ops::apply_filter;

/// One of the supported filter functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    Blur,
    Brightness,
    Contrast,
    Grayscale,
    HueRotate,
    Opacity,
    Saturate,
    Sepia,
}

/// Slider description for one filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterSpec {
    pub kind: FilterKind,
    /// Button label.
    pub label: &'static str,
    /// CSS filter function name.
    pub name: &'static str,
    pub unit: &'static str,
    pub default: f32,
    pub min: f32,
    pub max: f32,
}

const fn spec(
    kind: FilterKind,
    label: &'static str,
    name: &'static str,
    unit: &'static str,
    default: f32,
    min: f32,
    max: f32,
) -> FilterSpec {
    FilterSpec {
        kind,
        label,
        name,
        unit,
        default,
        min,
        max,
    }
}

/// Blur radii below this, in px, leave the image unchanged.
pub const MIN_BLUR_RADIUS: f32 = 0.5;

/// Every filter, in toolbar order.
pub const FILTERS: [FilterSpec; 8] = [
    spec(FilterKind::Blur, "Blur", "blur", "px", 0.0, 0.0, 50.0),
    spec(FilterKind::Brightness, "Brightness", "brightness", "%", 100.0, 0.0, 200.0),
    spec(FilterKind::Contrast, "Contrast", "contrast", "%", 100.0, 0.0, 100.0),
    spec(FilterKind::Grayscale, "Grayscale", "grayscale", "%", 0.0, 0.0, 100.0),
    spec(FilterKind::HueRotate, "Hue rotate", "hue-rotate", "deg", 0.0, 0.0, 360.0),
    spec(FilterKind::Opacity, "Opacity", "opacity", "%", 100.0, 0.0, 100.0),
    spec(FilterKind::Saturate, "Saturate", "saturate", "%", 100.0, 0.0, 100.0),
    spec(FilterKind::Sepia, "Sepia", "sepia", "%", 0.0, 0.0, 100.0),
];

impl FilterKind {
    pub fn spec(self) -> &'static FilterSpec {
        let index = match self {
            FilterKind::Blur => 0,
            FilterKind::Brightness => 1,
            FilterKind::Contrast => 2,
            FilterKind::Grayscale => 3,
            FilterKind::HueRotate => 4,
            FilterKind::Opacity => 5,
            FilterKind::Saturate => 6,
            FilterKind::Sepia => 7,
        };
        &FILTERS[index]
    }

    /// Clamp `value` into the slider range.
    pub fn clamp(self, value: f32) -> f32 {
        let spec = self.spec();
        value.clamp(spec.min, spec.max)
    }

    /// Whether `value` leaves the image unchanged.
    ///
    /// NaN and infinite values are treated as unchanged, as are blur radii
    /// under [`MIN_BLUR_RADIUS`].
    pub fn is_identity(self, value: f32) -> bool {
        if !value.is_finite() {
            return true;
        }
        let value = self.clamp(value);
        match self {
            FilterKind::Blur => value < MIN_BLUR_RADIUS,
            _ => value == self.spec().default,
        }
    }

    /// CSS filter string, e.g. `blur(4px)`.
    pub fn css(self, value: f32) -> String {
        let spec = self.spec();
        format!("{}({}{})", spec.name, self.clamp(value), spec.unit)
    }

    /// Slider label text, e.g. `150%`.
    pub fn value_label(self, value: f32) -> String {
        format!("{}{}", self.clamp(value), self.spec().unit)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

/// Returned when a string names no filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown filter: {0}")]
pub struct UnknownFilter(pub String);

impl FromStr for FilterKind {
    type Err = UnknownFilter;

    /// Parses the CSS function name, e.g. `hue-rotate`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FILTERS
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(s))
            .map(|spec| spec.kind)
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}

/// Render a filtered copy of `master` for the slider preview.
///
/// The master frame is left untouched so cancelling costs nothing; applying
/// replaces the master with the returned frame.
pub fn render_preview(master: &Frame, kind: FilterKind, value: f32) -> Result<Frame, FrameError> {
    let mut preview = master.clone();
    apply_filter(&mut preview, kind, value)?;
    Ok(preview)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order_matches_kinds() {
        for spec in FILTERS.iter() {
            assert_eq!(spec.kind.spec(), spec);
            assert!(spec.min <= spec.default && spec.default <= spec.max);
        }
    }

    #[test]
    fn test_css_strings() {
        assert_eq!(FilterKind::Blur.css(4.0), "blur(4px)");
        assert_eq!(FilterKind::Brightness.css(150.0), "brightness(150%)");
        assert_eq!(FilterKind::HueRotate.css(90.0), "hue-rotate(90deg)");
    }

    #[test]
    fn test_css_clamps_to_slider_range() {
        assert_eq!(FilterKind::Blur.css(80.0), "blur(50px)");
        assert_eq!(FilterKind::Contrast.css(-5.0), "contrast(0%)");
    }

    #[test]
    fn test_value_label() {
        assert_eq!(FilterKind::Sepia.value_label(35.0), "35%");
        assert_eq!(FilterKind::Blur.value_label(2.5), "2.5px");
    }

    #[test]
    fn test_parse_filter_names() {
        assert_eq!("hue-rotate".parse::<FilterKind>(), Ok(FilterKind::HueRotate));
        assert_eq!("Sepia".parse::<FilterKind>(), Ok(FilterKind::Sepia));
        assert_eq!(
            "invert".parse::<FilterKind>(),
            Err(UnknownFilter("invert".to_string()))
        );
    }

    #[test]
    fn test_identity_values() {
        for spec in FILTERS.iter() {
            assert!(spec.kind.is_identity(spec.default));
        }
        assert!(!FilterKind::Grayscale.is_identity(10.0));
    }

    #[test]
    fn test_sub_pixel_blur_is_identity() {
        assert!(FilterKind::Blur.is_identity(0.01));
        assert!(FilterKind::Blur.is_identity(0.49));
        assert!(!FilterKind::Blur.is_identity(MIN_BLUR_RADIUS));
        assert!(FilterKind::Blur.is_identity(-3.0));
    }

    #[test]
    fn test_non_finite_values_are_identity() {
        for spec in FILTERS.iter() {
            assert!(spec.kind.is_identity(f32::NAN), "{}", spec.name);
            assert!(spec.kind.is_identity(f32::INFINITY), "{}", spec.name);
        }
    }

    #[test]
    fn test_render_preview_keeps_master() {
        let master = Frame::filled(4, 4, [100, 150, 200, 255]);
        let preview = render_preview(&master, FilterKind::Grayscale, 100.0).unwrap();
        assert_eq!(master.pixel(0, 0), [100, 150, 200, 255]);
        assert_ne!(preview, master);
    }
}
