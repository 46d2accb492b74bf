//! Run configuration.
//!
//! Handles loading, validating, and merging the optional
//! `optimize-assets.toml` file. Stock defaults are the baseline; the file
//! only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [webp]
//! quality = 80              # Lossy quality (0-100)
//! method = 6                # Compression effort (0 = fast, 6 = smallest)
//!
//! [resize]
//! logo_max_width = 300      # Max width for logos and icons
//! max_width = 1200          # Max width for every other image
//! logo_keywords = ["logo", "icon", "favicon"]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{ConvertConfig, DEFAULT_LOGO_KEYWORDS, Method, Quality, ResizeLimits};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "optimize-assets.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `optimize-assets.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptimizeConfig {
    /// WebP encoder settings.
    pub webp: WebpConfig,
    /// Category-based resize settings.
    pub resize: ResizeConfig,
}

impl OptimizeConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.webp.quality > 100 {
            return Err(ConfigError::Validation("webp.quality must be 0-100".into()));
        }
        if self.webp.method > Method::MAX {
            return Err(ConfigError::Validation(format!(
                "webp.method must be 0-{}",
                Method::MAX
            )));
        }
        if self.resize.logo_max_width == 0 || self.resize.max_width == 0 {
            return Err(ConfigError::Validation(
                "resize widths must be non-zero".into(),
            ));
        }
        if self.resize.logo_keywords.is_empty() {
            return Err(ConfigError::Validation(
                "resize.logo_keywords must not be empty".into(),
            ));
        }
        if self.resize.logo_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "resize.logo_keywords must not contain empty keywords".into(),
            ));
        }
        Ok(())
    }

    /// Settings handed to each single-file conversion.
    pub fn convert_config(&self) -> ConvertConfig {
        ConvertConfig {
            limits: ResizeLimits {
                logo_max_width: self.resize.logo_max_width,
                max_width: self.resize.max_width,
            },
            logo_keywords: self
                .resize
                .logo_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
            quality: Quality::new(self.webp.quality),
            method: Method::new(self.webp.method),
        }
    }
}

/// WebP encoder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebpConfig {
    /// Lossy quality, 0-100.
    pub quality: u32,
    /// libwebp `method`: 0 (fastest) to 6 (smallest output).
    pub method: u32,
}

impl Default for WebpConfig {
    fn default() -> Self {
        Self {
            quality: Quality::default().value(),
            method: Method::default().value(),
        }
    }
}

/// Resize policy settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    /// Max width for images whose filename contains a logo keyword.
    pub logo_max_width: u32,
    /// Max width for all other images; narrower images are left alone.
    pub max_width: u32,
    /// Case-insensitive filename substrings that mark a logo or icon.
    pub logo_keywords: Vec<String>,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        let limits = ResizeLimits::default();
        Self {
            logo_max_width: limits.logo_max_width,
            max_width: limits.max_width,
            logo_keywords: DEFAULT_LOGO_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(OptimizeConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `path`.
///
/// A missing file yields the stock defaults. User values are merged on top
/// of the defaults, unknown keys are rejected, and the result is validated.
pub fn load_config(path: &Path) -> Result<OptimizeConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match load_raw_config(path)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: OptimizeConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock config file with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# optimize-assets configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the directory you run optimize-assets from, or pass
# --config <path>. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# WebP encoding
# ---------------------------------------------------------------------------
[webp]
# Lossy quality (0-100). 80 is visually close to the source for photos.
quality = 80

# Compression effort (0-6). Higher is slower but produces smaller files.
method = 6

# ---------------------------------------------------------------------------
# Resizing
# ---------------------------------------------------------------------------
# Images are classified by filename. Names containing any of the
# logo_keywords (case-insensitive) are capped at logo_max_width; every other
# image is capped at max_width only when it is wider than that.
# Aspect ratio is always preserved.
[resize]
logo_max_width = 300
max_width = 1200
logo_keywords = ["logo", "icon", "favicon"]
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // =========================================================================
    // Defaults
    // =========================================================================

    #[test]
    fn default_config_values() {
        let config = OptimizeConfig::default();
        assert_eq!(config.webp.quality, 80);
        assert_eq!(config.webp.method, 6);
        assert_eq!(config.resize.logo_max_width, 300);
        assert_eq!(config.resize.max_width, 1200);
        assert_eq!(config.resize.logo_keywords, vec!["logo", "icon", "favicon"]);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(OptimizeConfig::default().validate().is_ok());
    }

    #[test]
    fn convert_config_carries_values() {
        let mut config = OptimizeConfig::default();
        config.webp.quality = 70;
        config.resize.logo_keywords = vec!["Brand".to_string()];

        let convert = config.convert_config();
        assert_eq!(convert.quality.value(), 70);
        assert_eq!(convert.method.value(), 6);
        assert_eq!(convert.limits.logo_max_width, 300);
        assert_eq!(convert.logo_keywords, vec!["brand"]);
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_rejects_quality_over_100() {
        let mut config = OptimizeConfig::default();
        config.webp.quality = 101;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_method_over_6() {
        let mut config = OptimizeConfig::default();
        config.webp.method = 7;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_zero_width() {
        let mut config = OptimizeConfig::default();
        config.resize.max_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_keywords() {
        let mut config = OptimizeConfig::default();
        config.resize.logo_keywords.clear();
        assert!(config.validate().is_err());

        config.resize.logo_keywords = vec!["logo".into(), " ".into()];
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // merge_toml
    // =========================================================================

    #[test]
    fn merge_overrides_leaf_and_keeps_siblings() {
        let base: toml::Value = toml::from_str("[webp]\nquality = 80\nmethod = 6").unwrap();
        let overlay: toml::Value = toml::from_str("[webp]\nquality = 60").unwrap();

        let merged = merge_toml(base, overlay);
        assert_eq!(merged["webp"]["quality"].as_integer(), Some(60));
        assert_eq!(merged["webp"]["method"].as_integer(), Some(6));
    }

    #[test]
    fn merge_replaces_arrays_wholesale() {
        let base: toml::Value = toml::from_str(r#"keywords = ["a", "b"]"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"keywords = ["c"]"#).unwrap();

        let merged = merge_toml(base, overlay);
        assert_eq!(merged["keywords"].as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // load_config
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, OptimizeConfig::default());
    }

    #[test]
    fn load_config_reads_partial_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[resize]\nmax_width = 1600\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.resize.max_width, 1600);
        // Unspecified values stay at their defaults
        assert_eq!(config.resize.logo_max_width, 300);
        assert_eq!(config.webp.quality, 80);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "this is not valid toml [[[").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_rejects_unknown_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[webp]\nqualty = 70\n").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[webp]\nquality = 150\n").unwrap();

        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // stock_config_toml
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let value: Result<toml::Value, _> = toml::from_str(stock_config_toml());
        assert!(value.is_ok());
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: OptimizeConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, OptimizeConfig::default());
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let value = stock_defaults_value().unwrap();
        let table = value.as_table().unwrap();
        assert!(table.contains_key("webp"));
        assert!(table.contains_key("resize"));
    }
}
