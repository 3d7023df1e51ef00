//! Heuristic image classification from filename keywords and byte size.
//!
//! No pixel decoding happens anywhere in this tool; every judgment here is
//! a filename/size heuristic. Keyword rules run before size rules because
//! a filename is a stronger (if noisier) signal than raw byte count.

use crate::types::ExtractedImage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Images larger than this are treated as high-quality photos.
pub const LARGE_IMAGE_BYTES: u64 = 100_000;

/// Images smaller than this are treated as small icons or decoration.
pub const SMALL_IMAGE_BYTES: u64 = 10_000;

/// Coarse category assigned to an extracted image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageCategory {
    #[serde(rename = "logo/icon")]
    LogoIcon,
    #[serde(rename = "chart/data-visualization")]
    ChartDataVisualization,
    #[serde(rename = "product-screenshot")]
    ProductScreenshot,
    #[serde(rename = "background-image")]
    BackgroundImage,
    #[serde(rename = "high-quality-photo")]
    HighQualityPhoto,
    #[serde(rename = "small-icon/decoration")]
    SmallIconDecoration,
    #[serde(rename = "unknown")]
    Unknown,
}

impl ImageCategory {
    /// Stable label used in console output and serialization.
    pub fn label(&self) -> &'static str {
        match self {
            ImageCategory::LogoIcon => "logo/icon",
            ImageCategory::ChartDataVisualization => "chart/data-visualization",
            ImageCategory::ProductScreenshot => "product-screenshot",
            ImageCategory::BackgroundImage => "background-image",
            ImageCategory::HighQualityPhoto => "high-quality-photo",
            ImageCategory::SmallIconDecoration => "small-icon/decoration",
            ImageCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an image from its filename and byte size.
///
/// Pure and deterministic. Decision order matters: keyword rules are
/// checked first (case-insensitive substring match), then size thresholds,
/// first match wins. A 200 KB "logo_bg.png" is therefore "logo/icon",
/// not "high-quality-photo".
pub fn classify(filename: &str, size: u64) -> ImageCategory {
    let name = filename.to_lowercase();

    if name.contains("logo") || name.contains("icon") {
        ImageCategory::LogoIcon
    } else if name.contains("chart") || name.contains("graph") {
        ImageCategory::ChartDataVisualization
    } else if name.contains("product") || name.contains("screenshot") {
        ImageCategory::ProductScreenshot
    } else if name.contains("background") || name.contains("bg") {
        ImageCategory::BackgroundImage
    } else if size > LARGE_IMAGE_BYTES {
        ImageCategory::HighQualityPhoto
    } else if size < SMALL_IMAGE_BYTES {
        ImageCategory::SmallIconDecoration
    } else {
        ImageCategory::Unknown
    }
}

/// Classification result for one image, derived on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub filename: String,
    pub size: u64,
    pub potential_type: ImageCategory,
}

impl ImageAnalysis {
    /// Analyze an extracted image.
    pub fn of(image: &ExtractedImage) -> Self {
        Self {
            filename: image.filename.clone(),
            size: image.size,
            potential_type: classify(&image.filename, image.size),
        }
    }
}
