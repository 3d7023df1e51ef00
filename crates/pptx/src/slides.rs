//! Per-slide content analysis: text collection and relationship counting.

use crate::archive::DeckArchive;
use deckscan_core::{Error, Result, SkippedSlide, SlideInfo, SlideOutcome};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::io::{Read, Seek};
use std::sync::LazyLock;

/// Matches `r:id="..."` relationship tokens in raw slide XML.
///
/// Deliberately a textual scan, not a structural query: it also counts
/// relationship ids for hyperlinks and other non-image targets, so the
/// resulting count is an upper bound on embedded objects.
static RELATIONSHIP_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"r:id="[^"]*""#).unwrap());

/// Analyze every slide entry, in the numeric order `slides` already has.
///
/// A decode or parse failure on one slide becomes a `Skipped` outcome and
/// analysis continues; a truncated slide list would hide failures from the
/// final report.
pub fn analyze_slides<R: Read + Seek>(
    archive: &mut DeckArchive<R>,
    slides: &[String],
) -> Vec<SlideOutcome> {
    slides
        .iter()
        .enumerate()
        .map(|(idx, path)| match analyze_slide(archive, path, idx + 1) {
            Ok(info) => SlideOutcome::Parsed(info),
            Err(e) => {
                log::warn!("skipping slide {}: {}", path, e);
                SlideOutcome::Skipped(SkippedSlide {
                    file: path.clone(),
                    reason: e.to_string(),
                })
            }
        })
        .collect()
}

fn analyze_slide<R: Read + Seek>(
    archive: &mut DeckArchive<R>,
    path: &str,
    slide_number: usize,
) -> Result<SlideInfo> {
    let content = archive.read_entry(path)?;

    let texts = collect_texts(&content)?;
    let image_references = RELATIONSHIP_ID_REGEX.find_iter(&content).count();

    Ok(SlideInfo::new(slide_number, path, texts, image_references))
}

/// Walk the whole XML tree and collect every non-empty trimmed text node,
/// in document order.
fn collect_texts(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut texts = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| Error::SlideParseError(format!("Bad text node: {}", e)))?;
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    texts.push(trimmed.to_string());
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::SlideParseError(format!(
                    "XML error at byte {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    const SLIDE_WITH_TEXT: &str = r#"<?xml version="1.0"?>
<p:sld xmlns:p="urn:p" xmlns:a="urn:a" xmlns:r="urn:r">
  <p:sp><p:txBody><a:p><a:r><a:t>Welcome</a:t></a:r></a:p></p:txBody></p:sp>
  <p:pic><a:blip r:id="rId2"/></p:pic>
</p:sld>"#;

    fn fixture(entries: &[(&str, &str)]) -> DeckArchive<Cursor<Vec<u8>>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            writer.start_file(*name, FileOptions::default()).unwrap();
            std::io::Write::write_all(&mut writer, content.as_bytes()).unwrap();
        }
        DeckArchive::new(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_collect_texts_document_order() {
        let texts = collect_texts(SLIDE_WITH_TEXT).unwrap();
        assert_eq!(texts, vec!["Welcome"]);

        let multi = "<root><a>first</a><b><c>second</c></b><d>  </d></root>";
        assert_eq!(collect_texts(multi).unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_collect_texts_unescapes_entities() {
        let xml = "<root><t>Q&amp;A</t></root>";
        assert_eq!(collect_texts(xml).unwrap(), vec!["Q&A"]);
    }

    #[test]
    fn test_relationship_count_is_permissive() {
        // A hyperlink relationship counts too; the scan is a deliberate
        // upper bound, not an exact image count.
        let xml = r#"<sld><blip r:id="rId2"/><hlinkClick r:id="rId3"/></sld>"#;
        assert_eq!(RELATIONSHIP_ID_REGEX.find_iter(xml).count(), 2);
    }

    #[test]
    fn test_analyze_slides_collects_info() {
        let mut archive = fixture(&[
            ("ppt/slides/slide1.xml", SLIDE_WITH_TEXT),
            (
                "ppt/slides/slide2.xml",
                r#"<p:sld xmlns:p="urn:p" xmlns:r="urn:r"><p:pic r:id="rId2"/></p:sld>"#,
            ),
        ]);
        let slides = archive.inventory().unwrap().slides;
        let outcomes = analyze_slides(&mut archive, &slides);

        assert_eq!(outcomes.len(), 2);
        let first = outcomes[0].slide().unwrap();
        assert_eq!(first.slide_number, 1);
        assert_eq!(first.file, "ppt/slides/slide1.xml");
        assert_eq!(first.texts, vec!["Welcome"]);
        assert_eq!(first.image_references, 1);
        assert!(first.has_images);

        let second = outcomes[1].slide().unwrap();
        assert_eq!(second.slide_number, 2);
        assert!(second.texts.is_empty());
        assert_eq!(second.image_references, 1);
    }

    #[test]
    fn test_malformed_slide_is_skipped_not_fatal() {
        let mut archive = fixture(&[
            ("ppt/slides/slide1.xml", "<sld><open></sld>"),
            ("ppt/slides/slide2.xml", SLIDE_WITH_TEXT),
        ]);
        let slides = archive.inventory().unwrap().slides;
        let outcomes = analyze_slides(&mut archive, &slides);

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].is_skipped());
        assert!(outcomes[1].slide().is_some());
    }

    #[test]
    fn test_slide_without_references() {
        let mut archive = fixture(&[("ppt/slides/slide1.xml", "<sld><t>plain</t></sld>")]);
        let slides = archive.inventory().unwrap().slides;
        let outcomes = analyze_slides(&mut archive, &slides);

        let info = outcomes[0].slide().unwrap();
        assert_eq!(info.image_references, 0);
        assert!(!info.has_images);
    }
}
