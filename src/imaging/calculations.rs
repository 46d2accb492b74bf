//! Pure calculation functions: classification, resize policy, savings.
//!
//! All functions here are pure and testable without any I/O or images.

/// Filename keywords that mark an image as a logo or icon.
pub const DEFAULT_LOGO_KEYWORDS: &[&str] = &["logo", "icon", "favicon"];

/// Which resize rule applies to an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCategory {
    /// Filename contains a logo/icon keyword.
    LogoOrIcon,
    /// Everything else: heroes, project shots, thumbnails.
    General,
}

/// Classify an image by its filename (not the full path).
///
/// Case-insensitive substring match against `keywords`.
///
/// # Examples
/// ```
/// # use optimize_assets::imaging::{ImageCategory, classify};
/// let keywords = ["logo".to_string(), "icon".to_string()];
/// assert_eq!(classify("Site-LOGO.png", &keywords), ImageCategory::LogoOrIcon);
/// assert_eq!(classify("hero.jpg", &keywords), ImageCategory::General);
/// ```
pub fn classify(filename: &str, keywords: &[String]) -> ImageCategory {
    let lower = filename.to_lowercase();
    if keywords
        .iter()
        .any(|keyword| lower.contains(&keyword.to_lowercase()))
    {
        ImageCategory::LogoOrIcon
    } else {
        ImageCategory::General
    }
}

/// Width limits for each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeLimits {
    /// Applied to every logo/icon, regardless of size.
    pub logo_max_width: u32,
    /// Applied to general images only when they are wider than this.
    pub max_width: u32,
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self {
            logo_max_width: 300,
            max_width: 1200,
        }
    }
}

/// The resize decision for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    pub category: ImageCategory,
    /// The width limit that applies, or `None` when no rule matched.
    pub max_width: Option<u32>,
    /// Decoded dimensions (width, height).
    pub original: (u32, u32),
    /// Output dimensions (width, height).
    pub target: (u32, u32),
}

impl ResizePlan {
    /// True when the output dimensions differ from the decoded ones.
    pub fn resizes(&self) -> bool {
        self.target != self.original
    }
}

/// Scale `dims` down so the width is at most `max_width`.
///
/// The height is `floor(height * max_width / width)`, never below 1px.
/// Images already within the limit are returned unchanged.
pub fn scale_to_max_width(dims: (u32, u32), max_width: u32) -> (u32, u32) {
    let (width, height) = dims;
    if width <= max_width {
        return dims;
    }
    let new_height = (u64::from(height) * u64::from(max_width) / u64::from(width)) as u32;
    (max_width, new_height.max(1))
}

/// Choose the width limit for an image and compute its output dimensions.
///
/// Priority: logo/icon limit first; otherwise the general limit when the
/// image is wider than it; otherwise no resize.
pub fn plan_resize(
    category: ImageCategory,
    dims: (u32, u32),
    limits: &ResizeLimits,
) -> ResizePlan {
    let max_width = match category {
        ImageCategory::LogoOrIcon => Some(limits.logo_max_width),
        ImageCategory::General if dims.0 > limits.max_width => Some(limits.max_width),
        ImageCategory::General => None,
    };

    let target = match max_width {
        Some(max) => scale_to_max_width(dims, max),
        None => dims,
    };

    ResizePlan {
        category,
        max_width,
        original: dims,
        target,
    }
}

/// Percentage size reduction from `original_bytes` to `new_bytes`.
///
/// Negative when the output grew. Zero for an empty original.
pub fn savings_percent(original_bytes: u64, new_bytes: u64) -> f64 {
    if original_bytes == 0 {
        return 0.0;
    }
    let original_kb = original_bytes as f64 / 1024.0;
    let new_kb = new_bytes as f64 / 1024.0;
    (original_kb - new_kb) / original_kb * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<String> {
        DEFAULT_LOGO_KEYWORDS.iter().map(|k| k.to_string()).collect()
    }

    // =========================================================================
    // classify tests
    // =========================================================================

    #[test]
    fn classify_matches_each_keyword() {
        let kw = keywords();
        assert_eq!(classify("logo-main.png", &kw), ImageCategory::LogoOrIcon);
        assert_eq!(classify("menu-icon.png", &kw), ImageCategory::LogoOrIcon);
        assert_eq!(classify("favicon.png", &kw), ImageCategory::LogoOrIcon);
    }

    #[test]
    fn classify_is_case_insensitive() {
        let kw = keywords();
        assert_eq!(classify("Company_LOGO.JPG", &kw), ImageCategory::LogoOrIcon);
        assert_eq!(classify("AppIcon.png", &kw), ImageCategory::LogoOrIcon);
    }

    #[test]
    fn classify_matches_substrings() {
        // "iconic" still contains "icon"
        assert_eq!(
            classify("iconic-view.jpg", &keywords()),
            ImageCategory::LogoOrIcon
        );
    }

    #[test]
    fn classify_general_when_no_keyword() {
        let kw = keywords();
        assert_eq!(classify("hero-banner.jpg", &kw), ImageCategory::General);
        assert_eq!(classify("thumbnail.png", &kw), ImageCategory::General);
    }

    #[test]
    fn classify_uppercase_custom_keyword() {
        let kw = vec!["BRAND".to_string()];
        assert_eq!(classify("brand-mark.png", &kw), ImageCategory::LogoOrIcon);
    }

    // =========================================================================
    // scale_to_max_width tests
    // =========================================================================

    #[test]
    fn scale_within_limit_is_unchanged() {
        assert_eq!(scale_to_max_width((150, 150), 300), (150, 150));
        assert_eq!(scale_to_max_width((300, 80), 300), (300, 80));
    }

    #[test]
    fn scale_exact_ratio() {
        assert_eq!(scale_to_max_width((400, 100), 300), (300, 75));
        assert_eq!(scale_to_max_width((2400, 800), 1200), (1200, 400));
    }

    #[test]
    fn scale_floors_height() {
        // 999 * 1200 / 2000 = 599.4 → 599
        assert_eq!(scale_to_max_width((2000, 999), 1200), (1200, 599));
        // 333 * 300 / 1000 = 99.9 → 99
        assert_eq!(scale_to_max_width((1000, 333), 300), (300, 99));
    }

    #[test]
    fn scale_never_collapses_height() {
        assert_eq!(scale_to_max_width((5000, 1), 300), (300, 1));
    }

    // =========================================================================
    // plan_resize tests
    // =========================================================================

    #[test]
    fn plan_logo_uses_logo_limit() {
        let plan = plan_resize(ImageCategory::LogoOrIcon, (400, 100), &ResizeLimits::default());
        assert_eq!(plan.max_width, Some(300));
        assert_eq!(plan.target, (300, 75));
        assert!(plan.resizes());
    }

    #[test]
    fn plan_small_logo_keeps_limit_but_not_resized() {
        let plan = plan_resize(ImageCategory::LogoOrIcon, (64, 64), &ResizeLimits::default());
        assert_eq!(plan.max_width, Some(300));
        assert_eq!(plan.target, (64, 64));
        assert!(!plan.resizes());
    }

    #[test]
    fn plan_wide_logo_uses_logo_limit_not_general() {
        let plan = plan_resize(ImageCategory::LogoOrIcon, (2400, 600), &ResizeLimits::default());
        assert_eq!(plan.max_width, Some(300));
        assert_eq!(plan.target, (300, 75));
    }

    #[test]
    fn plan_large_general_image() {
        let plan = plan_resize(ImageCategory::General, (2400, 800), &ResizeLimits::default());
        assert_eq!(plan.max_width, Some(1200));
        assert_eq!(plan.target, (1200, 400));
    }

    #[test]
    fn plan_general_at_limit_is_untouched() {
        let plan = plan_resize(ImageCategory::General, (1200, 900), &ResizeLimits::default());
        assert_eq!(plan.max_width, None);
        assert_eq!(plan.target, (1200, 900));
        assert!(!plan.resizes());
    }

    #[test]
    fn plan_small_general_image() {
        let plan = plan_resize(ImageCategory::General, (150, 150), &ResizeLimits::default());
        assert_eq!(plan.max_width, None);
        assert_eq!(plan.target, (150, 150));
    }

    #[test]
    fn plan_custom_limits() {
        let limits = ResizeLimits {
            logo_max_width: 128,
            max_width: 800,
        };
        let plan = plan_resize(ImageCategory::General, (1600, 1000), &limits);
        assert_eq!(plan.target, (800, 500));
    }

    // =========================================================================
    // savings_percent tests
    // =========================================================================

    #[test]
    fn savings_half_size() {
        assert!((savings_percent(2048, 1024) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn savings_negative_when_output_grows() {
        assert!((savings_percent(1000, 1500) + 50.0).abs() < 1e-9);
    }

    #[test]
    fn savings_zero_original() {
        assert_eq!(savings_percent(0, 100), 0.0);
    }
}
