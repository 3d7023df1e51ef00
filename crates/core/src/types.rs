//! Domain types for extracted images and analyzed slides.

use serde::{Deserialize, Serialize};

/// An image asset copied out of the presentation archive.
///
/// Created once per qualifying media entry during extraction and
/// immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedImage {
    /// Basename of the media entry (e.g. "image1.png").
    pub filename: String,

    /// Filesystem location the bytes were copied to.
    pub path: String,

    /// Size of the extracted file in bytes.
    pub size: u64,

    /// Lowercase extension including the leading dot (e.g. ".png").
    pub extension: String,

    /// Archive-internal path of the source entry (e.g. "ppt/media/image1.png").
    pub original_path: String,
}

/// Content summary for a single slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideInfo {
    /// 1-based slide number in numeric filename order.
    pub slide_number: usize,

    /// Archive-internal path of the slide XML.
    pub file: String,

    /// Non-empty trimmed text nodes, in document order.
    pub texts: Vec<String>,

    /// Count of `r:id="..."` relationship tokens in the raw slide XML.
    ///
    /// A permissive textual scan, so hyperlink and other non-image
    /// relationships are counted too. Treat as an upper bound for
    /// "this slide likely embeds objects", not an exact image count.
    pub image_references: usize,

    /// Whether any relationship references were found.
    pub has_images: bool,
}

impl SlideInfo {
    /// Create a slide summary; `has_images` is derived from the reference count.
    pub fn new(
        slide_number: usize,
        file: impl Into<String>,
        texts: Vec<String>,
        image_references: usize,
    ) -> Self {
        Self {
            slide_number,
            file: file.into(),
            texts,
            image_references,
            has_images: image_references > 0,
        }
    }
}

/// Result of analyzing one slide entry.
///
/// Parse failures are recoverable: the slide is recorded as skipped and
/// analysis continues, so callers see every failure instead of a truncated
/// slide list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SlideOutcome {
    /// The slide parsed cleanly.
    Parsed(SlideInfo),
    /// The slide could not be decoded or parsed and was skipped.
    Skipped(SkippedSlide),
}

impl SlideOutcome {
    /// The parsed slide, if this outcome is a success.
    pub fn slide(&self) -> Option<&SlideInfo> {
        match self {
            SlideOutcome::Parsed(info) => Some(info),
            SlideOutcome::Skipped(_) => None,
        }
    }

    /// Whether this slide was skipped due to a parse failure.
    pub fn is_skipped(&self) -> bool {
        matches!(self, SlideOutcome::Skipped(_))
    }
}

/// Detail for a slide that failed to parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedSlide {
    /// Archive-internal path of the slide XML.
    pub file: String,

    /// Human-readable failure detail.
    pub reason: String,
}

/// Partition of the archive's entries, in enumeration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveInventory {
    /// Total number of entries in the archive.
    pub total_entries: usize,

    /// Entries under the media folder, in archive-enumeration order.
    pub media: Vec<String>,

    /// Slide XML entries, sorted by numeric slide index.
    pub slides: Vec<String>,

    /// Number of theme XML entries (counted only, never parsed).
    pub theme_count: usize,
}
