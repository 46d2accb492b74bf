//! # optimize-assets
//!
//! Batch-converts a static site's raster assets (JPEG/PNG) to WebP, shrinking
//! oversized images on the way, to cut page weight.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      assets/img/  →  sorted list of .jpg/.jpeg/.png files
//! 2. Convert   each file    →  <stem>.webp next to it (sequential, in scan order)
//! 3. Report    results      →  per-file savings + success/error summary
//! ```
//!
//! Each file goes through classify → decode → normalize color mode → resize →
//! encode → measure. A failure on one file is recorded and the run moves on;
//! only a missing source directory (or a broken config file) stops the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Recursive, case-insensitive discovery of candidate images |
//! | [`process`] | Run orchestration, per-file results, run summary, dry-run planning |
//! | [`imaging`] | Classification, resize policy, color normalization, WebP encoding |
//! | [`config`] | `optimize-assets.toml` loading, merging over defaults, validation |
//! | [`output`] | CLI output formatting for the run, the summary and `check` |
//!
//! # Resize Policy
//!
//! | Image | Rule |
//! |-------|------|
//! | filename contains `logo`, `icon` or `favicon` (any case) | max-width 300px |
//! | any other image wider than 1200px | max-width 1200px |
//! | everything else | unchanged |
//!
//! Width is capped and height follows the aspect ratio, rounded down.
//! Resampling is Lanczos3. Output is lossy WebP, quality 80, method 6.

pub mod config;
pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;
