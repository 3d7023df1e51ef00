//! PPTX (Office Open XML) backend for presentation image extraction.
//!
//! A .pptx file is a ZIP archive of XML documents plus embedded media.
//! This crate reads the archive, copies image assets out of `ppt/media/`,
//! and summarizes each slide's text and relationship references.

pub mod archive;
pub mod extract;
pub mod slides;

pub use archive::DeckArchive;
pub use extract::extract_images;
pub use slides::analyze_slides;
