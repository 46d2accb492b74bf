//! Image processing: decode, normalize, resize, encode WebP.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader::into_dimensions` |
//! | **Classify** | filename keyword match |
//! | **Normalize** | `Rgb8` / `Rgba8` conversion |
//! | **Resize → WebP** | Lanczos3 + libwebp (quality 80, method 6) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for classification and dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Color**: Color-mode normalization ahead of encoding
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
mod color;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{
    DEFAULT_LOGO_KEYWORDS, ImageCategory, ResizeLimits, ResizePlan, classify, plan_resize,
    savings_percent, scale_to_max_width,
};
pub use color::{is_indexed_png, normalize_color};
pub use operations::{ConvertConfig, ConvertedImage, convert_image, plan_image, webp_output_path};
pub use params::{ConvertParams, Method, Quality};
pub use rust_backend::RustBackend;
