//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Run
//!
//! ```text
//! ============================================================
//! Asset Image Optimization
//! ============================================================
//!
//! Scanning: /site/assets/img
//! WebP Quality: 80
//! Logo/Icon max-width: 300px
//! Hero/Project max-width: 1200px
//! ------------------------------------------------------------
//!
//! Found 2 image(s) to process:
//!
//! [1/2] Processing: hero-banner.jpg
//!     ↳ Large image detected, max-width: 1200px
//!     ↳ Resized to 1200x400
//!     ✓ Saved hero-banner.webp (84.2KB, 71.3% smaller)
//!
//! [2/2] Processing: broken.png
//!     ✗ Error: Processing failed: Failed to decode broken.png: ...
//!
//! ------------------------------------------------------------
//! SUMMARY
//! ------------------------------------------------------------
//! ✓ Successfully converted: 1
//! ✗ Errors: 1
//! Original files: PRESERVED (not deleted)
//! ```
//!
//! ## Check
//!
//! ```text
//! hero-banner.jpg: 2400x800 → 1200x400 (max-width 1200px)
//! logo-main.png: 400x100 → 300x75 (logo/icon, max-width 300px)
//! thumbnail.png: 150x150 (unchanged)
//! ```
//!
//! # Architecture
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure and do no I/O.

use crate::config::OptimizeConfig;
use crate::imaging::{ConvertedImage, ImageCategory, ResizePlan};
use crate::process::{ConversionResult, PlannedImage, ProcessEvent, RunSummary};
use std::path::Path;

const RULE_HEAVY: &str = "============================================================";
const RULE_LIGHT: &str = "------------------------------------------------------------";

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Bytes as kilobytes with one decimal, e.g. `84.2KB`.
fn format_kb(bytes: u64) -> String {
    format!("{:.1}KB", bytes as f64 / 1024.0)
}

fn format_dims((width, height): (u32, u32)) -> String {
    format!("{}x{}", width, height)
}

// ============================================================================
// Header
// ============================================================================

/// Format the configuration banner printed before scanning.
pub fn format_header(source_display: &str, config: &OptimizeConfig) -> Vec<String> {
    vec![
        RULE_HEAVY.to_string(),
        "Asset Image Optimization".to_string(),
        RULE_HEAVY.to_string(),
        String::new(),
        format!("Scanning: {}", source_display),
        format!("WebP Quality: {}", config.webp.quality),
        format!("Logo/Icon max-width: {}px", config.resize.logo_max_width),
        format!("Hero/Project max-width: {}px", config.resize.max_width),
        RULE_LIGHT.to_string(),
    ]
}

pub fn print_header(source: &Path, config: &OptimizeConfig) {
    let shown = std::path::absolute(source).unwrap_or_else(|_| source.to_path_buf());
    for line in format_header(&shown.display().to_string(), config) {
        println!("{}", line);
    }
}

// ============================================================================
// Per-image progress
// ============================================================================

/// Policy notes for a converted image: which limit applied and the new size.
fn plan_notes(plan: &ResizePlan) -> Vec<String> {
    let mut lines = Vec::new();
    match (plan.category, plan.max_width) {
        (ImageCategory::LogoOrIcon, Some(max)) => {
            lines.push(format!("    \u{21b3} Detected as logo/icon, max-width: {}px", max));
        }
        (ImageCategory::General, Some(max)) => {
            lines.push(format!("    \u{21b3} Large image detected, max-width: {}px", max));
        }
        _ => {}
    }
    if plan.resizes() {
        lines.push(format!("    \u{21b3} Resized to {}", format_dims(plan.target)));
    }
    lines
}

fn saved_line(converted: &ConvertedImage) -> String {
    format!(
        "    \u{2713} Saved {} ({}, {:.1}% smaller)",
        file_name(&converted.output),
        format_kb(converted.new_bytes),
        converted.savings_percent()
    )
}

/// Format the lines for one finished conversion.
pub fn format_result(result: &ConversionResult) -> Vec<String> {
    let mut lines = match result {
        ConversionResult::Converted(converted) => {
            let mut lines = plan_notes(&converted.plan);
            lines.push(saved_line(converted));
            lines
        }
        ConversionResult::Failed { error, .. } => {
            vec![format!("    \u{2717} Error: {}", error)]
        }
    };
    lines.push(String::new());
    lines
}

/// Format a single process progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Scanned { image_count: 0, .. } => {
            vec![String::new(), "No images found to optimize.".to_string()]
        }
        ProcessEvent::Scanned { image_count, .. } => vec![
            String::new(),
            format!("Found {} image(s) to process:", image_count),
            String::new(),
        ],
        ProcessEvent::ImageStarted {
            index,
            total,
            source,
        } => vec![format!(
            "[{}/{}] Processing: {}",
            index,
            total,
            file_name(source)
        )],
        ProcessEvent::ImageFinished { result } => format_result(result),
    }
}

pub fn print_process_event(event: &ProcessEvent) {
    for line in format_process_event(event) {
        println!("{}", line);
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Format the closing summary block.
pub fn format_summary(summary: &RunSummary) -> Vec<String> {
    vec![
        RULE_LIGHT.to_string(),
        "SUMMARY".to_string(),
        RULE_LIGHT.to_string(),
        format!("\u{2713} Successfully converted: {}", summary.converted),
        format!("\u{2717} Errors: {}", summary.errors),
        "Original files: PRESERVED (not deleted)".to_string(),
        String::new(),
        "Next steps:".to_string(),
        "1. Point your markup at the new .webp files".to_string(),
        "2. Commit and deploy to ship the lighter pages".to_string(),
        RULE_HEAVY.to_string(),
    ]
}

pub fn print_summary(summary: &RunSummary) {
    for line in format_summary(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Check (dry run)
// ============================================================================

/// Format the planned action for each scanned image.
pub fn format_plan(planned: &[PlannedImage], root: &Path) -> Vec<String> {
    if planned.is_empty() {
        return vec!["No images found to optimize.".to_string()];
    }

    let mut lines = Vec::new();
    let mut unreadable = 0;
    for item in planned {
        let name = item
            .source
            .strip_prefix(root)
            .unwrap_or(&item.source)
            .display()
            .to_string();
        match &item.plan {
            Ok(plan) if plan.resizes() => {
                let reason = match (plan.category, plan.max_width) {
                    (ImageCategory::LogoOrIcon, Some(max)) => {
                        format!("logo/icon, max-width {}px", max)
                    }
                    (_, Some(max)) => format!("max-width {}px", max),
                    (_, None) => "resized".to_string(),
                };
                lines.push(format!(
                    "{}: {} \u{2192} {} ({})",
                    name,
                    format_dims(plan.original),
                    format_dims(plan.target),
                    reason
                ));
            }
            Ok(plan) => {
                lines.push(format!("{}: {} (unchanged)", name, format_dims(plan.original)));
            }
            Err(e) => {
                unreadable += 1;
                lines.push(format!("{}: \u{2717} {}", name, e));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} image(s), {} unreadable",
        planned.len(),
        unreadable
    ));
    lines
}

pub fn print_plan(planned: &[PlannedImage], root: &Path) {
    for line in format_plan(planned, root) {
        println!("{}", line);
    }
}
