//! Pure Rust decode/resize plus libwebp encoding.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader::into_dimensions` (header only) |
//! | Decode (JPEG, PNG) | `image` crate, format sniffed from file content |
//! | Palette detection | PNG IHDR color type via [`is_indexed_png`](super::color::is_indexed_png) |
//! | Color normalization | [`normalize_color`](super::color::normalize_color) |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → WebP (lossy) | `webp::Encoder::encode_advanced` with `WebPConfig { quality, method }` |
//!
//! The `image` crate's own WebP encoder only produces lossless output, which
//! is why encoding goes through libwebp.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::color::{is_indexed_png, normalize_color};
use super::params::{ConvertParams, Method, Quality};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::fs::File;
use std::io::{BufReader, Cursor, Write};
use std::path::Path;

/// Backend using `image` for pixels and libwebp for encoding.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>, BackendError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?)
}

/// Load an image from disk and bring it into an encodable color mode.
///
/// The file is read once; its header decides whether it came from a palette.
fn decode_normalized(path: &Path) -> Result<DynamicImage, BackendError> {
    let bytes = std::fs::read(path)?;
    let indexed = is_indexed_png(&bytes);
    let img = ImageReader::new(Cursor::new(bytes.as_slice()))
        .with_guessed_format()?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })?;
    Ok(normalize_color(img, indexed))
}

/// Encode a normalized image as lossy WebP in memory.
fn encode_webp(
    img: &DynamicImage,
    quality: Quality,
    method: Method,
) -> Result<Vec<u8>, BackendError> {
    let (layout, pixels) = match img {
        DynamicImage::ImageRgb8(buf) => (webp::PixelLayout::Rgb, buf.as_raw().as_slice()),
        DynamicImage::ImageRgba8(buf) => (webp::PixelLayout::Rgba, buf.as_raw().as_slice()),
        other => {
            return Err(BackendError::ProcessingFailed(format!(
                "Unsupported color mode for WebP: {:?}",
                other.color()
            )));
        }
    };

    let mut config = libwebp_sys::WebPConfig::new().map_err(|_| {
        BackendError::ProcessingFailed("Failed to initialize WebP encoder config".into())
    })?;
    config.lossless = 0;
    config.quality = quality.value() as f32;
    config.method = method.value() as i32;

    let encoder = webp::Encoder::new(pixels, layout, img.width(), img.height());
    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| BackendError::ProcessingFailed(format!("WebP encode failed: {e:?}")))?;
    Ok(memory.to_vec())
}

/// Write encoded bytes, removing the file again if the write is cut short.
fn write_output(path: &Path, bytes: &[u8]) -> Result<(), BackendError> {
    let mut file = File::create(path)?;
    if let Err(e) = file.write_all(bytes).and_then(|_| file.flush()) {
        drop(file);
        let _ = std::fs::remove_file(path);
        return Err(BackendError::Io(e));
    }
    Ok(())
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_reader(path)?.into_dimensions().map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn convert(&self, params: &ConvertParams) -> Result<(), BackendError> {
        let img = decode_normalized(&params.source)?;

        let img = if (img.width(), img.height()) == (params.width, params.height) {
            img
        } else {
            img.resize_exact(params.width, params.height, FilterType::Lanczos3)
        };

        let bytes = encode_webp(&img, params.quality, params.method)?;
        write_output(&params.output, &bytes)
    }
}
