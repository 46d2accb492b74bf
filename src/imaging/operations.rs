//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{
    DEFAULT_LOGO_KEYWORDS, ResizeLimits, ResizePlan, classify, plan_resize, savings_percent,
};
use super::params::{ConvertParams, Method, Quality};
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Settings shared by every conversion in a run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub limits: ResizeLimits,
    pub logo_keywords: Vec<String>,
    pub quality: Quality,
    pub method: Method,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            limits: ResizeLimits::default(),
            logo_keywords: DEFAULT_LOGO_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            quality: Quality::default(),
            method: Method::default(),
        }
    }
}

/// A successfully written WebP file and what it cost.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedImage {
    pub source: PathBuf,
    pub output: PathBuf,
    pub plan: ResizePlan,
    pub original_bytes: u64,
    pub new_bytes: u64,
}

impl ConvertedImage {
    /// Percentage size reduction of the WebP relative to the source.
    pub fn savings_percent(&self) -> f64 {
        savings_percent(self.original_bytes, self.new_bytes)
    }
}

/// Sibling path with the same stem and a `.webp` extension.
pub fn webp_output_path(source: &Path) -> PathBuf {
    source.with_extension("webp")
}

/// Classify `source` by its filename and decide its output size.
///
/// Only the image header is read.
pub fn plan_image(
    backend: &impl ImageBackend,
    source: &Path,
    config: &ConvertConfig,
) -> Result<ResizePlan> {
    let filename = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let category = classify(&filename, &config.logo_keywords);
    let dims = backend.identify(source)?;
    Ok(plan_resize(
        category,
        (dims.width, dims.height),
        &config.limits,
    ))
}

/// Convert one image to WebP next to the original.
///
/// The original file is never modified. An existing `.webp` at the output
/// path is overwritten.
pub fn convert_image(
    backend: &impl ImageBackend,
    source: &Path,
    config: &ConvertConfig,
) -> Result<ConvertedImage> {
    let plan = plan_image(backend, source, config)?;
    let output = webp_output_path(source);

    backend.convert(&ConvertParams {
        source: source.to_path_buf(),
        output: output.clone(),
        width: plan.target.0,
        height: plan.target.1,
        quality: config.quality,
        method: config.method,
    })?;

    let original_bytes = std::fs::metadata(source)?.len();
    let new_bytes = std::fs::metadata(&output)?.len();

    Ok(ConvertedImage {
        source: source.to_path_buf(),
        output,
        plan,
        original_bytes,
        new_bytes,
    })
}
