//! Core domain types, heuristic image classification, and report building
//! for presentation image extraction.

pub mod classify;
pub mod error;
pub mod report;
pub mod types;

pub use classify::{classify, ImageAnalysis, ImageCategory};
pub use error::{Error, Result};
pub use report::{DeckReport, ImageReport, StyleProfile};
pub use types::{ArchiveInventory, ExtractedImage, SkippedSlide, SlideInfo, SlideOutcome};
