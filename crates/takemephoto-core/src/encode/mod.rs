//! Export pipeline for the download button.
//!
//! This module provides functionality for:
//! - Encoding the master frame to PNG
//! - Wrapping the bytes in a download `data:` URL
//! - Generating a random file name
//!
//! # Examples
//!
//! ```ignore
//! use takemephoto_core::encode::{download_data_url, encode_png};
//!
//! let png = encode_png(&frame)?;
//! let href = download_data_url(&png);
//! ```

mod download;
mod png;

pub use download::{download_data_url, random_file_name, FILE_NAME_LEN};
pub use png::{encode_png, EncodeError};
