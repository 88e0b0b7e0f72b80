//! PNG encoding for the download button.
//!
//! Uses the `image` crate's PNG encoder. The canvas is exported losslessly
//! with its alpha channel, the same as `canvas.toDataURL('image/png')`.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::frame::{Frame, FrameError};

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The frame's dimensions or buffer are unusable.
    #[error("Invalid frame: {0}")]
    InvalidFrame(#[from] FrameError),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an RGBA frame to PNG bytes.
///
/// # Errors
///
/// Returns an error if the frame has zero dimensions, its buffer length
/// doesn't match, or the encoder fails.
pub fn encode_png(frame: &Frame) -> Result<Vec<u8>, EncodeError> {
    frame.validate()?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(&frame.pixels, frame.width, frame.height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Same input always produces same output.
        #[test]
        fn prop_deterministic_output((width, height) in (1u32..=20, 1u32..=20)) {
            let frame = Frame::filled(width, height, [100, 100, 100, 255]);
            prop_assert_eq!(encode_png(&frame).unwrap(), encode_png(&frame).unwrap());
        }
    }
}
