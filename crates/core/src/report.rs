//! Aggregation of extraction results into a sectioned console report.
//!
//! Everything here is pure formatting over data the pipeline already
//! produced; the only policy it owns is the zero-image short-circuit,
//! which must happen before any percentage is computed.

use crate::classify::{ImageAnalysis, ImageCategory, LARGE_IMAGE_BYTES, SMALL_IMAGE_BYTES};
use crate::types::{ArchiveInventory, ExtractedImage, SlideOutcome};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Maximum number of text strings shown per slide.
const TEXTS_PER_SLIDE: usize = 3;

/// Text strings longer than this are truncated with an ellipsis marker.
const TEXT_TRUNCATE_CHARS: usize = 50;

const BANNER: &str = "============================================================";

/// One image in the report listing: the extracted record plus its
/// heuristic category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageReport {
    #[serde(flatten)]
    pub image: ExtractedImage,
    pub potential_type: ImageCategory,
}

impl ImageReport {
    /// Classify an extracted image for the report.
    pub fn new(image: ExtractedImage) -> Self {
        let analysis = ImageAnalysis::of(&image);
        Self {
            image,
            potential_type: analysis.potential_type,
        }
    }
}

/// Occurrence count for one file extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatCount {
    pub extension: String,
    pub count: usize,
}

/// Aggregate visual-style statistics over the extracted images.
///
/// Only built when at least one image was extracted, so the percentage
/// fields never divide by zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleProfile {
    pub total_images: usize,
    pub high_quality: usize,
    pub high_quality_pct: f64,
    pub small_icons: usize,
    pub small_icons_pct: f64,
    /// Extension frequency table, in first-seen order.
    pub formats: Vec<FormatCount>,
}

impl StyleProfile {
    fn build(images: &[ImageReport]) -> Option<Self> {
        if images.is_empty() {
            return None;
        }

        let total = images.len();
        let high_quality = images
            .iter()
            .filter(|r| r.image.size > LARGE_IMAGE_BYTES)
            .count();
        let small_icons = images
            .iter()
            .filter(|r| r.image.size < SMALL_IMAGE_BYTES)
            .count();

        let mut formats: Vec<FormatCount> = Vec::new();
        for report in images {
            match formats
                .iter_mut()
                .find(|f| f.extension == report.image.extension)
            {
                Some(entry) => entry.count += 1,
                None => formats.push(FormatCount {
                    extension: report.image.extension.clone(),
                    count: 1,
                }),
            }
        }

        Some(Self {
            total_images: total,
            high_quality,
            high_quality_pct: high_quality as f64 / total as f64 * 100.0,
            small_icons,
            small_icons_pct: small_icons as f64 / total as f64 * 100.0,
            formats,
        })
    }
}

/// The full report over one presentation archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckReport {
    pub total_entries: usize,
    pub media_entries: usize,
    pub slide_count: usize,
    pub theme_count: usize,
    pub images: Vec<ImageReport>,
    pub slides: Vec<SlideOutcome>,
    pub skipped_slides: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleProfile>,
}

impl DeckReport {
    /// Aggregate inventory, extracted images, and slide outcomes.
    pub fn build(
        inventory: &ArchiveInventory,
        images: Vec<ExtractedImage>,
        slides: Vec<SlideOutcome>,
    ) -> Self {
        log::debug!(
            "building report: {} images, {} slides",
            images.len(),
            slides.len()
        );

        let images: Vec<ImageReport> = images.into_iter().map(ImageReport::new).collect();
        let skipped_slides = slides.iter().filter(|s| s.is_skipped()).count();
        let style = StyleProfile::build(&images);

        Self {
            total_entries: inventory.total_entries,
            media_entries: inventory.media.len(),
            slide_count: inventory.slides.len(),
            theme_count: inventory.theme_count,
            images,
            slides,
            skipped_slides,
            style,
        }
    }

    /// Whether any images were extracted.
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// Render the sectioned human-readable report.
    pub fn render(&self) -> String {
        let mut out = String::new();

        section(&mut out, "Presentation file structure");
        let _ = writeln!(out, "Total entries: {}", self.total_entries);
        let _ = writeln!(out, "Media entries: {}", self.media_entries);
        let _ = writeln!(out, "Slides: {}", self.slide_count);
        let _ = writeln!(out, "Theme files: {}", self.theme_count);

        if !self.has_images() {
            out.push('\n');
            out.push_str("No images found in the archive.\n");
            return out;
        }

        out.push('\n');
        section(&mut out, &format!("Extracted images ({})", self.images.len()));
        for (idx, report) in self.images.iter().enumerate() {
            let _ = writeln!(out, "\n{}. {}", idx + 1, report.image.filename);
            let _ = writeln!(out, "   size: {} bytes", group_digits(report.image.size));
            let _ = writeln!(out, "   format: {}", report.image.extension);
            let _ = writeln!(out, "   saved to: {}", report.image.path);
            let _ = writeln!(out, "   potential type: {}", report.potential_type);
        }

        out.push('\n');
        section(&mut out, "Slide content analysis");
        for outcome in &self.slides {
            match outcome {
                SlideOutcome::Parsed(info) => {
                    let _ = writeln!(out, "\nSlide {}:", info.slide_number);
                    let _ = writeln!(
                        out,
                        "  has images: {}",
                        if info.has_images { "yes" } else { "no" }
                    );
                    let _ = writeln!(out, "  image references: {}", info.image_references);
                    if !info.texts.is_empty() {
                        let _ = writeln!(out, "  text:");
                        for text in info.texts.iter().take(TEXTS_PER_SLIDE) {
                            let _ = writeln!(out, "    - {}", truncate_text(text));
                        }
                    }
                }
                SlideOutcome::Skipped(skipped) => {
                    let _ = writeln!(out, "\nSkipped {}: {}", skipped.file, skipped.reason);
                }
            }
        }
        if self.skipped_slides > 0 {
            let _ = writeln!(
                out,
                "\n{} slide(s) skipped due to parse errors",
                self.skipped_slides
            );
        }

        if let Some(style) = &self.style {
            out.push('\n');
            section(&mut out, "Visual style profile");
            let _ = writeln!(out, "Total images: {}", style.total_images);
            let _ = writeln!(
                out,
                "High-quality photos: {} ({:.1}%)",
                style.high_quality, style.high_quality_pct
            );
            let _ = writeln!(
                out,
                "Small icons/decoration: {} ({:.1}%)",
                style.small_icons, style.small_icons_pct
            );
            let _ = writeln!(out, "\nFormat distribution:");
            for format in &style.formats {
                let _ = writeln!(out, "  {}: {}", format.extension, format.count);
            }
        }

        out
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", BANNER);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", BANNER);
}

/// Format an integer with thousands separators ("1,234,567").
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncate a text string to the preview length, marking the cut.
fn truncate_text(text: &str) -> String {
    if text.chars().count() > TEXT_TRUNCATE_CHARS {
        let cut: String = text.chars().take(TEXT_TRUNCATE_CHARS).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
