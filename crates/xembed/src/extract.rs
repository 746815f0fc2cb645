//! Payload scanning, extraction, and storage

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::codec;
use crate::error::Result;
use crate::utils;
use crate::xml::model::Document;
use crate::xml::parser::Parser;

/// Text runs longer than this many characters classify as payloads.
pub const PAYLOAD_THRESHOLD: usize = 100;

/// One decoded payload recovered from a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedPayload {
    pub index: usize,
    pub bytes: Vec<u8>,
}

/// Scan a parsed document for embedded payloads.
///
/// Only elements exactly two levels below the document root are inspected;
/// anything nested deeper is invisible to the scan. Indices count every
/// classified payload in document order, so a payload that fails to decode
/// still consumes its index. A decode failure is reported and the scan
/// moves on to the remaining elements.
pub fn scan(doc: &Document) -> Vec<ExtractedPayload> {
    let mut payloads = Vec::new();
    let mut next_index = 0usize;

    for group in &doc.root.children {
        for element in &group.children {
            let Some(text) = element.text.as_deref() else {
                continue;
            };
            if text.chars().count() <= PAYLOAD_THRESHOLD {
                continue;
            }

            let index = next_index;
            next_index += 1;
            match codec::decode(text) {
                Ok(bytes) => {
                    info!("extracted payload {index} from <{}>", element.name);
                    payloads.push(ExtractedPayload { index, bytes });
                }
                Err(err) => warn!("skipping payload {index} in <{}>: {err}", element.name),
            }
        }
    }

    payloads
}

/// Read and parse an XML file, then scan it for payloads.
pub fn extract_file(path: impl AsRef<Path>) -> Result<Vec<ExtractedPayload>> {
    let bytes = utils::read_bytes(&path)?;
    let doc = Parser::new(&bytes).parse()?;
    Ok(scan(&doc))
}

/// Write decoded payload bytes under `output_dir`, creating the directory
/// if needed and overwriting any existing file of the same name.
pub fn store_payload(
    bytes: &[u8],
    filename: &str,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    utils::ensure_dir(output_dir)?;
    let path = output_dir.join(filename);
    utils::write_bytes(&path, bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(markup: &str) -> Document {
        Parser::new(markup.as_bytes()).parse().unwrap()
    }

    #[test]
    fn test_threshold_is_strict() {
        let at_limit = "A".repeat(100);
        let over_limit = codec::encode(&[7u8; 76]);
        assert!(over_limit.chars().count() > PAYLOAD_THRESHOLD);

        let markup =
            format!("<root><group><a>{at_limit}</a><b>{over_limit}</b></group></root>");
        let payloads = scan(&doc(&markup));

        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].index, 0);
        assert_eq!(payloads[0].bytes, vec![7u8; 76]);
    }

    #[test]
    fn test_101_chars_classify_even_when_undecodable() {
        // 100 chars is metadata; 101 chars is a payload. A 101-char run can
        // never be valid base64, so it consumes an index and decodes to
        // nothing, while the valid element after it still extracts.
        let at_limit = "A".repeat(100);
        let boundary = "A".repeat(101);
        let valid = codec::encode(&[9u8; 78]);
        let markup = format!(
            "<root><group><a>{at_limit}</a><b>{boundary}</b><c>{valid}</c></group></root>"
        );
        let payloads = scan(&doc(&markup));

        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].index, 1);
        assert_eq!(payloads[0].bytes, vec![9u8; 78]);
    }

    #[test]
    fn test_missing_text_yields_no_payload() {
        let markup = "<root><group><empty /><blank></blank></group></root>";
        assert!(scan(&doc(markup)).is_empty());
    }

    #[test]
    fn test_depth_is_exactly_two() {
        let long = codec::encode(&[1u8; 90]);
        let markup = format!(
            "<root><shallow>{long}</shallow><group><deep><inner>{long}</inner></deep></group></root>"
        );
        // depth 1 and depth 3 are both invisible; only <deep> itself is at
        // depth 2 and it carries no text of its own
        assert!(scan(&doc(&markup)).is_empty());
    }

    #[test]
    fn test_malformed_payload_does_not_abort_scan() {
        let good = codec::encode(&[42u8; 90]);
        let bad = "!".repeat(120);
        let markup = format!("<root><group><x>{bad}</x><y>{good}</y></group></root>");
        let payloads = scan(&doc(&markup));

        assert_eq!(payloads.len(), 1);
        // the malformed payload consumed index 0
        assert_eq!(payloads[0].index, 1);
        assert_eq!(payloads[0].bytes, vec![42u8; 90]);
    }

    #[test]
    fn test_indices_skip_metadata_elements() {
        let first = codec::encode(&[1u8; 80]);
        let second = codec::encode(&[2u8; 80]);
        let markup = format!(
            "<root><group><title>short</title><a>{first}</a><marker /><b>{second}</b></group></root>"
        );
        let payloads = scan(&doc(&markup));

        assert_eq!(payloads.len(), 2);
        assert_eq!(payloads[0].index, 0);
        assert_eq!(payloads[1].index, 1);
    }

    #[test]
    fn test_store_payload_creates_dir_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("extracted");

        let path = store_payload(b"one", "extracted_image0.jpg", &out).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"one");

        let path = store_payload(b"two", "extracted_image0.jpg", &out).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"two");
    }
}
