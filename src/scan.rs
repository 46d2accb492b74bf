//! Directory scanning.
//!
//! Walks the asset directory recursively and collects every JPEG/PNG file.
//! Extensions are matched case-insensitively, so `hero.JPG` and `logo.Png`
//! are found too. The result is deduplicated and sorted by path so runs are
//! deterministic.
//!
//! A missing or unreadable root is fatal: nothing is converted when the
//! directory cannot be read. Problems below the root are not: a dangling
//! `old.png` symlink is still listed (and fails later, per file), while an
//! unreadable subdirectory is skipped.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions picked up by the scan (compared lower-cased).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(
        "Directory '{}' not found! Make sure you're running from the project root.",
        .0.display()
    )]
    NotFound(PathBuf),
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("Failed to read directory entry: {0}")]
    Walk(#[from] walkdir::Error),
}

/// True when `path` has one of the [`IMAGE_EXTENSIONS`], in any case.
pub fn is_candidate_image(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Recursively find all candidate images under `root`, sorted by path.
pub fn scan(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        return Err(ScanError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_candidate_image(entry.path()) {
                    images.push(entry.into_path());
                }
            }
            Err(e) if e.depth() == 0 => return Err(e.into()),
            // A broken entry named like an image is kept so the converter
            // reports it as a failed file. Unreadable directories and
            // symlink loops are skipped.
            Err(e) => {
                if let Some(path) = e.path().filter(|p| is_candidate_image(p) && !p.is_dir()) {
                    images.push(path.to_path_buf());
                }
            }
        }
    }

    images.sort();
    images.dedup();
    Ok(images)
}
