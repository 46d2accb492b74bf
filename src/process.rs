//! Run orchestration: scan, convert each image in order, collect results.
//!
//! Processing is strictly sequential. Each image is decoded, resized,
//! encoded and measured before the next one starts, and the order of
//! processing is the scan order.
//!
//! ## Failure tiers
//!
//! - **Fatal**: the scan fails (missing root). [`run`] returns the
//!   [`ScanError`] before any file is touched.
//! - **Per file**: anything that goes wrong while converting one image is
//!   captured as [`ConversionResult::Failed`] and the run moves on.
//!
//! Progress is reported through [`ProcessEvent`]s handed to a caller-supplied
//! closure; formatting lives in [`output`](crate::output).

use crate::imaging::{
    ConvertConfig, ConvertedImage, ImageBackend, ResizePlan, RustBackend, convert_image,
    plan_image,
};
use crate::scan::{self, ScanError};
use std::path::{Path, PathBuf};

/// Outcome of converting one image.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionResult {
    Converted(ConvertedImage),
    Failed { source: PathBuf, error: String },
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Converted(_))
    }

    pub fn source(&self) -> &Path {
        match self {
            ConversionResult::Converted(c) => &c.source,
            ConversionResult::Failed { source, .. } => source,
        }
    }

    /// Path of the written WebP, if the conversion succeeded.
    pub fn output(&self) -> Option<&Path> {
        match self {
            ConversionResult::Converted(c) => Some(&c.output),
            ConversionResult::Failed { .. } => None,
        }
    }
}

/// Success and failure counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub errors: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &ConversionResult) {
        if result.is_success() {
            self.converted += 1;
        } else {
            self.errors += 1;
        }
    }
}

/// Every result of a run, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub results: Vec<ConversionResult>,
}

impl RunReport {
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for result in &self.results {
            summary.record(result);
        }
        summary
    }
}

/// Progress notifications emitted while a run is in flight.
#[derive(Debug)]
pub enum ProcessEvent<'a> {
    /// The scan finished; `image_count` may be zero.
    Scanned { root: &'a Path, image_count: usize },
    /// Conversion of the `index`-th image (1-based) is about to start.
    ImageStarted {
        index: usize,
        total: usize,
        source: &'a Path,
    },
    /// Conversion of an image finished, successfully or not.
    ImageFinished { result: &'a ConversionResult },
}

/// Convert one image, folding any error into a failed result.
pub fn convert_file(
    backend: &impl ImageBackend,
    source: &Path,
    config: &ConvertConfig,
) -> ConversionResult {
    match convert_image(backend, source, config) {
        Ok(converted) => ConversionResult::Converted(converted),
        Err(e) => ConversionResult::Failed {
            source: source.to_path_buf(),
            error: e.to_string(),
        },
    }
}

/// Convert `images` in order using `backend`.
///
/// Never stops early: a failed image is recorded and the next one is tried.
pub fn process_with_backend(
    backend: &impl ImageBackend,
    images: &[PathBuf],
    config: &ConvertConfig,
    mut on_event: impl FnMut(&ProcessEvent),
) -> RunReport {
    let total = images.len();
    let mut report = RunReport::default();

    for (i, source) in images.iter().enumerate() {
        on_event(&ProcessEvent::ImageStarted {
            index: i + 1,
            total,
            source,
        });
        let result = convert_file(backend, source, config);
        on_event(&ProcessEvent::ImageFinished { result: &result });
        report.results.push(result);
    }

    report
}

/// Scan `root` and convert everything found, using `backend`.
pub fn run_with_backend(
    backend: &impl ImageBackend,
    root: &Path,
    config: &ConvertConfig,
    mut on_event: impl FnMut(&ProcessEvent),
) -> Result<RunReport, ScanError> {
    let images = scan::scan(root)?;
    on_event(&ProcessEvent::Scanned {
        root,
        image_count: images.len(),
    });
    Ok(process_with_backend(backend, &images, config, on_event))
}

/// Scan `root` and convert everything found with the production backend.
pub fn run(
    root: &Path,
    config: &ConvertConfig,
    on_event: impl FnMut(&ProcessEvent),
) -> Result<RunReport, ScanError> {
    run_with_backend(&RustBackend::new(), root, config, on_event)
}

/// The resize decision for one image, or why it could not be read.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedImage {
    pub source: PathBuf,
    pub plan: Result<ResizePlan, String>,
}

/// Scan `root` and decide what would happen to each image, without
/// decoding pixels or writing anything.
pub fn plan_with_backend(
    backend: &impl ImageBackend,
    root: &Path,
    config: &ConvertConfig,
) -> Result<Vec<PlannedImage>, ScanError> {
    let images = scan::scan(root)?;
    Ok(images
        .into_iter()
        .map(|source| {
            let plan = plan_image(backend, &source, config).map_err(|e| e.to_string());
            PlannedImage { source, plan }
        })
        .collect())
}

/// [`plan_with_backend`] with the production backend.
pub fn plan(root: &Path, config: &ConvertConfig) -> Result<Vec<PlannedImage>, ScanError> {
    plan_with_backend(&RustBackend::new(), root, config)
}
