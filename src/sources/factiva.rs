//! Bulk-export segmentation.
//!
//! Factiva-style exports concatenate articles into one text blob, each
//! article followed by a `Document <id>` line. Splitting on that delimiter
//! yields an interleaved `[text, id, text, id, ...]` sequence that is
//! consumed pairwise. Each export ends with a search-metadata section; it
//! has no trailing id, so the pairwise walk drops it on its own.
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    /// Default delimiter: a Factiva document id on its own line.
    pub static ref DOCUMENT_DELIMITER: Regex =
        Regex::new(r"\nDocument ([0-9A-Za-z]+)\n").unwrap();
}

/// One undivided chunk of export text and the document id that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    pub id: String,
    pub text: String,
}

/// Split a bulk export into per-document blocks.
///
/// The delimiter must capture the document id in its first group; the
/// trailing block without a following id is dropped.
pub fn segment(raw_text: &str, delimiter: &Regex) -> Result<Vec<RawBlock>, Error> {
    if delimiter.captures_len() < 2 {
        return Err(Error::Custom(format!(
            "delimiter pattern must capture the document id: {}",
            delimiter.as_str()
        )));
    }

    let mut blocks = Vec::new();
    let mut block_start = 0;
    for captures in delimiter.captures_iter(raw_text) {
        if let (Some(whole), Some(id)) = (captures.get(0), captures.get(1)) {
            blocks.push(RawBlock {
                id: id.as_str().to_string(),
                text: raw_text[block_start..whole.start()].to_string(),
            });
            block_start = whole.end();
        }
    }

    Ok(blocks)
}

/// Split a block into trimmed, non-blank paragraph lines.
pub fn paragraphs(block: &RawBlock) -> Vec<String> {
    block
        .text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{paragraphs, segment, RawBlock, DOCUMENT_DELIMITER};
    use regex::Regex;

    #[test]
    fn segmentation_round_trip_drops_trailing_metadata() {
        let export = "Title one\nBody one\nDocument FA001\nTitle two\nBody two\nDocument FA002\nSearch summary: 2 results\n";

        let blocks = segment(export, &DOCUMENT_DELIMITER).unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].id, "FA001");
        assert_eq!(blocks[1].id, "FA002");
        assert!(blocks[0].text.contains("Title one"));
        assert!(blocks[1].text.contains("Title two"));
        assert!(!blocks[1].text.contains("Search summary"));
    }

    #[test]
    fn delimiter_without_capture_group_is_rejected() {
        let delimiter = Regex::new(r"\nDocument [0-9A-Za-z]+\n").unwrap();
        assert!(segment("text\nDocument FA001\n", &delimiter).is_err());
    }

    #[test]
    fn export_without_delimiters_yields_no_blocks() {
        let blocks = segment("just metadata, no documents", &DOCUMENT_DELIMITER).unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn paragraphs_are_trimmed_and_non_blank() {
        let block = RawBlock {
            id: "FA001".to_string(),
            text: "  Title  \n\n   \nFirst paragraph\nSecond paragraph\n".to_string(),
        };

        assert_eq!(
            paragraphs(&block),
            ["Title", "First paragraph", "Second paragraph"]
        );
    }
}
