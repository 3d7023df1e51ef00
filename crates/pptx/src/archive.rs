//! Read-only access to the presentation's ZIP container.

use deckscan_core::{ArchiveInventory, Error, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek, Write};
use std::path::Path;
use zip::ZipArchive;

/// Archive-internal folder holding embedded media assets.
const MEDIA_PREFIX: &str = "ppt/media/";

/// Archive-internal prefix of slide definition documents.
const SLIDE_PREFIX: &str = "ppt/slides/slide";

const XML_SUFFIX: &str = ".xml";

/// A presentation archive opened for random access.
pub struct DeckArchive<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl DeckArchive<BufReader<File>> {
    /// Open an archive from a filesystem path.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::ArchiveError(format!("Failed to open {}: {}", path.display(), e))
        })?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> DeckArchive<R> {
    /// Open an archive from any seekable reader.
    pub fn new(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)
            .map_err(|e| Error::ArchiveError(format!("Failed to open ZIP: {}", e)))?;
        Ok(Self { archive })
    }

    /// Enumerate all entries and partition them into media, slide, and
    /// theme groups.
    ///
    /// Entries are walked by index so media entries keep the archive's
    /// central-directory order; the name map inside the zip crate is
    /// unordered. Slide entries are sorted by their numeric index, which
    /// differs from lexicographic order once slide numbers reach two
    /// digits ("slide2.xml" before "slide10.xml").
    pub fn inventory(&mut self) -> Result<ArchiveInventory> {
        let mut names = Vec::with_capacity(self.archive.len());
        for i in 0..self.archive.len() {
            let entry = self
                .archive
                .by_index(i)
                .map_err(|e| Error::ArchiveError(format!("Failed to read entry {}: {}", i, e)))?;
            names.push(entry.name().to_string());
        }

        let media: Vec<String> = names
            .iter()
            .filter(|n| n.starts_with(MEDIA_PREFIX))
            .cloned()
            .collect();

        let mut slides: Vec<String> = names
            .iter()
            .filter(|n| n.starts_with(SLIDE_PREFIX) && n.ends_with(XML_SUFFIX))
            .cloned()
            .collect();
        slides.sort_by(|a, b| match (slide_number(a), slide_number(b)) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.cmp(b),
        });

        let theme_count = names
            .iter()
            .filter(|n| n.contains("theme") && n.ends_with(XML_SUFFIX))
            .count();

        log::info!(
            "archive: {} entries, {} media, {} slides, {} themes",
            names.len(),
            media.len(),
            slides.len(),
            theme_count
        );

        Ok(ArchiveInventory {
            total_entries: names.len(),
            media,
            slides,
            theme_count,
        })
    }

    /// Read an entry's bytes as a UTF-8 string.
    pub fn read_entry(&mut self, path: &str) -> Result<String> {
        let mut file = self.archive.by_name(path).map_err(|e| {
            Error::ArchiveError(format!("File not found in archive '{}': {}", path, e))
        })?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::ArchiveError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }

    /// Stream an entry's bytes into a writer, returning the byte count.
    pub fn copy_entry<W: Write>(&mut self, path: &str, writer: &mut W) -> Result<u64> {
        let mut file = self.archive.by_name(path).map_err(|e| {
            Error::ArchiveError(format!("File not found in archive '{}': {}", path, e))
        })?;

        let copied = std::io::copy(&mut file, writer)?;
        Ok(copied)
    }
}

/// Extract a slide number from a path like "ppt/slides/slide3.xml".
fn slide_number(path: &str) -> Option<usize> {
    let stem = path.trim_end_matches(XML_SUFFIX);

    let digits: String = stem
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn fixture(entries: &[(&str, &[u8])]) -> Cursor<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, bytes) in entries {
            writer.start_file(*name, FileOptions::default()).unwrap();
            std::io::Write::write_all(&mut writer, bytes).unwrap();
        }
        writer.finish().unwrap()
    }

    #[test]
    fn test_slide_number() {
        assert_eq!(slide_number("ppt/slides/slide1.xml"), Some(1));
        assert_eq!(slide_number("ppt/slides/slide123.xml"), Some(123));
        assert_eq!(slide_number("ppt/slides/slide.xml"), None);
    }

    #[test]
    fn test_inventory_partitions_entries() {
        let cursor = fixture(&[
            ("[Content_Types].xml", b"<Types/>"),
            ("ppt/media/image1.png", b"png-bytes"),
            ("ppt/media/photo.jpg", b"jpg-bytes"),
            ("ppt/slides/slide1.xml", b"<sld/>"),
            ("ppt/slides/_rels/slide1.xml.rels", b"<Relationships/>"),
            ("ppt/theme/theme1.xml", b"<theme/>"),
        ]);
        let mut archive = DeckArchive::new(cursor).unwrap();
        let inventory = archive.inventory().unwrap();

        assert_eq!(inventory.total_entries, 6);
        assert_eq!(
            inventory.media,
            vec!["ppt/media/image1.png", "ppt/media/photo.jpg"]
        );
        assert_eq!(inventory.slides, vec!["ppt/slides/slide1.xml"]);
        assert_eq!(inventory.theme_count, 1);
    }

    #[test]
    fn test_slides_sorted_numerically() {
        let cursor = fixture(&[
            ("ppt/slides/slide10.xml", b"<sld/>"),
            ("ppt/slides/slide2.xml", b"<sld/>"),
            ("ppt/slides/slide1.xml", b"<sld/>"),
        ]);
        let mut archive = DeckArchive::new(cursor).unwrap();
        let inventory = archive.inventory().unwrap();

        assert_eq!(
            inventory.slides,
            vec![
                "ppt/slides/slide1.xml",
                "ppt/slides/slide2.xml",
                "ppt/slides/slide10.xml"
            ]
        );
    }

    #[test]
    fn test_invalid_archive_is_an_error() {
        let cursor = Cursor::new(b"not a zip file".to_vec());
        let err = DeckArchive::new(cursor).err().unwrap();
        assert!(matches!(err, Error::ArchiveError(_)));
    }

    #[test]
    fn test_read_entry_missing_path() {
        let cursor = fixture(&[("ppt/slides/slide1.xml", b"<sld/>")]);
        let mut archive = DeckArchive::new(cursor).unwrap();
        let err = archive.read_entry("ppt/slides/slide2.xml").err().unwrap();
        assert!(matches!(err, Error::ArchiveError(_)));
    }
}
