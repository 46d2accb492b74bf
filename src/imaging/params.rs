//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides the output path and target size) and the
//! [`backend`](super::backend) (which does the pixel work). This separation
//! allows swapping backends (e.g. for testing with a mock) without changing
//! the conversion logic.
//!
//! ## Types
//!
//! - [`Quality`]: lossy WebP quality (0–100, default 80). Clamped on construction.
//! - [`Method`]: libwebp compression effort (0–6, default 6 = smallest output).
//! - [`ConvertParams`]: one conversion, with paths, target size and encoder settings.

use std::path::PathBuf;

/// Quality setting for lossy WebP encoding (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.min(100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(80)
    }
}

/// Compression effort passed to libwebp as `method`.
///
/// 0 is fastest, 6 spends the most time searching for the smallest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Method(pub u32);

impl Method {
    pub const MAX: u32 = 6;

    pub fn new(value: u32) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Method {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

/// Parameters for converting one image to WebP.
///
/// `width`/`height` are the final output dimensions. When they equal the
/// decoded size the backend skips resampling.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
    pub method: Method,
}
