//! Copying media entries out of the archive onto disk.

use crate::archive::DeckArchive;
use deckscan_core::{ExtractedImage, Result};
use std::fs::{self, File};
use std::io::{Read, Seek};
use std::path::Path;

/// Subdirectory of the output directory that receives extracted files.
const IMAGES_SUBDIR: &str = "extracted_images";

/// Extensions recognized as image assets, lowercase without the dot.
const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "svg", "emf", "wmf",
];

/// Copy every recognized image in `media` to `<output_dir>/extracted_images/`.
///
/// Bytes are copied verbatim; results come back in archive-enumeration
/// order. Two media entries sharing a basename silently overwrite each
/// other; basenames are effectively unique within one archive's media
/// folder. Directory-creation and write failures are fatal.
pub fn extract_images<R: Read + Seek>(
    archive: &mut DeckArchive<R>,
    media: &[String],
    output_dir: &Path,
) -> Result<Vec<ExtractedImage>> {
    let images_dir = output_dir.join(IMAGES_SUBDIR);
    fs::create_dir_all(&images_dir)?;

    let mut extracted = Vec::new();
    for entry_path in media {
        let filename = match entry_path.rsplit('/').next() {
            Some(name) if !name.is_empty() => name,
            _ => continue,
        };

        let extension = match filename.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => continue,
        };
        if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            continue;
        }

        let output_path = images_dir.join(filename);
        let mut target = File::create(&output_path)?;
        let size = archive.copy_entry(entry_path, &mut target)?;

        log::debug!("extracted {} ({} bytes)", filename, size);

        extracted.push(ExtractedImage {
            filename: filename.to_string(),
            path: output_path.to_string_lossy().into_owned(),
            size,
            extension: format!(".{}", extension),
            original_path: entry_path.clone(),
        });
    }

    Ok(extracted)
}
