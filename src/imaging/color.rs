//! Color-mode normalization before resize and encode.
//!
//! libwebp accepts exactly two pixel layouts: 8-bit RGB and 8-bit RGBA. Every
//! decoded image is brought into one of them:
//!
//! | Source | Normalized to |
//! |---|---|
//! | palette-indexed PNG | `Rgba8` |
//! | `Rgb8` | unchanged |
//! | `Rgba8` | unchanged |
//! | anything with alpha (`LumaA8`, `Rgba16`, `Rgba32F`, …) | `Rgba8` |
//! | anything opaque (`Luma8`, `Rgb16`, …) | `Rgb8` |
//!
//! The `png` decoder expands palettes before a [`DynamicImage`] exists, so an
//! opaque indexed file arrives as `Rgb8`. Whether the source was indexed is
//! read from the PNG header with [`is_indexed_png`] and passed in separately.

use image::DynamicImage;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const PNG_COLOR_TYPE_INDEXED: u8 = 3;

/// True when `header` starts a PNG whose IHDR declares an indexed palette.
///
/// Needs the first 26 bytes of the file: signature, IHDR length and tag,
/// width, height, bit depth, color type.
pub fn is_indexed_png(header: &[u8]) -> bool {
    header.len() >= 26
        && header.starts_with(PNG_SIGNATURE)
        && &header[12..16] == b"IHDR"
        && header[25] == PNG_COLOR_TYPE_INDEXED
}

/// Convert `img` into an encoder-ready `Rgb8` or `Rgba8` image.
///
/// `indexed` forces `Rgba8` for images decoded from a palette.
pub fn normalize_color(img: DynamicImage, indexed: bool) -> DynamicImage {
    if indexed || img.color().has_alpha() {
        match img {
            DynamicImage::ImageRgba8(_) => img,
            other => DynamicImage::ImageRgba8(other.to_rgba8()),
        }
    } else {
        match img {
            DynamicImage::ImageRgb8(_) => img,
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        }
    }
}
