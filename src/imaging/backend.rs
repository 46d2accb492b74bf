//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify (read dimensions from the header) and convert (decode,
//! normalize, resize, encode WebP, write).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend): `image` for decoding and
//! Lanczos3 resampling, libwebp (via the `webp` crate) for lossy encoding.

use super::params::ConvertParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Keeps the conversion policy in [`operations`](super::operations)
/// independent of the codec, so it can be exercised with a mock.
pub trait ImageBackend {
    /// Get image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode `params.source`, normalize its color mode, resample to
    /// `params.width`×`params.height` if that differs from the decoded size,
    /// and write a lossy WebP to `params.output`.
    fn convert(&self, params: &ConvertParams) -> Result<(), BackendError>;
}
