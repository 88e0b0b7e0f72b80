//! Turning encoded bytes into something the browser will download.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Length of the random part of a download name.
pub const FILE_NAME_LEN: usize = 5;

/// Build a `data:` URL for PNG bytes that browsers save instead of display.
///
/// The MIME type is `application/octet-stream` rather than `image/png` so
/// following the link triggers a download.
pub fn download_data_url(png: &[u8]) -> String {
    format!("data:application/octet-stream;base64,{}", BASE64.encode(png))
}

/// A random `xxxxx.png` name made of lowercase ASCII letters.
///
/// `next_random` must return values in `[0, 1)`, like `Math.random`; values
/// outside that range are clamped.
pub fn random_file_name(mut next_random: impl FnMut() -> f64) -> String {
    let mut name: String = (0..FILE_NAME_LEN)
        .map(|_| {
            let index = (next_random().clamp(0.0, 1.0) * 26.0) as u8;
            (b'a' + index.min(25)) as char
        })
        .collect();
    name.push_str(".png");
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_prefix_and_payload() {
        let url = download_data_url(&[0x89, b'P', b'N', b'G']);
        assert_eq!(url, "data:application/octet-stream;base64,iVBORw==");
    }

    #[test]
    fn test_random_file_name_from_sequence() {
        let mut values = [0.0, 0.5, 0.999, 0.04, 0.25].into_iter();
        let name = random_file_name(|| values.next().unwrap_or(0.0));
        assert_eq!(name, "anzbg.png");
    }

    #[test]
    fn test_random_file_name_clamps_out_of_range() {
        let name = random_file_name(|| 1.5);
        assert_eq!(name, "zzzzz.png");
        let name = random_file_name(|| -3.0);
        assert_eq!(name, "aaaaa.png");
    }

    #[test]
    fn test_random_file_name_shape() {
        let mut state = 7u32;
        let name = random_file_name(|| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 8) as f64 / (1u32 << 24) as f64
        });
        assert_eq!(name.len(), FILE_NAME_LEN + 4);
        assert!(name.ends_with(".png"));
        assert!(name[..FILE_NAME_LEN].chars().all(|c| c.is_ascii_lowercase()));
    }
}
