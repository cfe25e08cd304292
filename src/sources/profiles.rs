//! Field extraction profiles.
//!
//! Export sources disagree on where author and date live. The positional
//! profile trusts fixed metadata positions; the heuristic profile searches
//! the first paragraphs for byline and date patterns.
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;
use crate::pipelines::types::Record;

use super::factiva::{paragraphs, RawBlock};

lazy_static! {
    static ref AUTHOR_BYLINE: Regex = Regex::new(r"^By ([\w\s.]+)$").unwrap();
    static ref FULL_DATE: Regex = Regex::new(
        r"^\d+ (January|February|March|April|May|June|July|August|September|October|November|December) \d{4}$"
    )
    .unwrap();
}

/// Byline/date scans stop after this many paragraphs.
const METADATA_SCAN_WINDOW: usize = 15;

/// How author and date are recovered from a segmented block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionProfile {
    /// Metadata sits at fixed positions after the title: the next paragraph
    /// is the author, and the date follows one intervening metadata line.
    Positional,
    /// Byline and date are searched for in the first paragraphs.
    Heuristic,
}

impl ExtractionProfile {
    /// Turn a raw block into a [Record].
    ///
    /// The first paragraph becomes the title; a block with no paragraphs
    /// yields [Error::EmptyBlock] so callers can skip it.
    pub fn extract(&self, block: &RawBlock) -> Result<Record, Error> {
        let mut grafs = paragraphs(block);
        if grafs.is_empty() {
            return Err(Error::EmptyBlock(block.id.clone()));
        }
        let title = grafs.remove(0);

        let (author, date) = match self {
            ExtractionProfile::Positional => positional_fields(&mut grafs),
            ExtractionProfile::Heuristic => heuristic_fields(&mut grafs),
        };

        Ok(Record {
            id: block.id.clone(),
            title,
            author,
            date,
            text: grafs,
        })
    }
}

/// Whatever occupies the metadata positions is accepted as-is. The line
/// between author and date (a word-count line in Factiva exports) stays in
/// the body.
fn positional_fields(grafs: &mut Vec<String>) -> (Option<String>, Option<String>) {
    let author = if grafs.is_empty() {
        None
    } else {
        Some(grafs.remove(0))
    };
    let date = if grafs.len() > 1 {
        Some(grafs.remove(1))
    } else {
        None
    };
    (author, date)
}

/// Both scans run over the paragraph list as it stood before either
/// removal; the removals are applied together afterwards, highest index
/// first so the lower index stays valid.
fn heuristic_fields(grafs: &mut Vec<String>) -> (Option<String>, Option<String>) {
    let author_idx = grafs
        .iter()
        .take(METADATA_SCAN_WINDOW)
        .position(|graf| AUTHOR_BYLINE.is_match(graf));
    let date_idx = grafs
        .iter()
        .take(METADATA_SCAN_WINDOW)
        .position(|graf| FULL_DATE.is_match(graf));

    let author = author_idx
        .and_then(|idx| AUTHOR_BYLINE.captures(&grafs[idx]))
        .map(|captures| captures[1].to_string());
    let date = date_idx.map(|idx| grafs[idx].clone());

    let mut removals: Vec<usize> = author_idx.into_iter().chain(date_idx).collect();
    removals.sort_unstable();
    removals.dedup();
    for idx in removals.into_iter().rev() {
        grafs.remove(idx);
    }

    (author, date)
}

#[cfg(test)]
mod tests {
    use super::ExtractionProfile;
    use crate::sources::factiva::RawBlock;

    fn block(lines: &[&str]) -> RawBlock {
        RawBlock {
            id: "DOC1".to_string(),
            text: lines.join("\n"),
        }
    }

    #[test]
    fn positional_profile_pops_fixed_positions() {
        let block = block(&[
            "The Title",
            "Jane Author",
            "1,024 words",
            "14 January 2020",
            "Body paragraph one.",
            "Body paragraph two.",
        ]);

        let record = ExtractionProfile::Positional.extract(&block).unwrap();

        assert_eq!(record.title, "The Title");
        assert_eq!(record.author.as_deref(), Some("Jane Author"));
        assert_eq!(record.date.as_deref(), Some("14 January 2020"));
        assert_eq!(
            record.text,
            ["1,024 words", "Body paragraph one.", "Body paragraph two."]
        );
    }

    #[test]
    fn positional_profile_accepts_short_blocks() {
        let record = ExtractionProfile::Positional
            .extract(&block(&["Only a title"]))
            .unwrap();

        assert_eq!(record.title, "Only a title");
        assert_eq!(record.author, None);
        assert_eq!(record.date, None);
        assert!(record.text.is_empty());
    }

    #[test]
    fn heuristic_profile_finds_byline_and_date() {
        let block = block(&[
            "The Title",
            "LONDON (Reuters)",
            "By Jane Q. Public",
            "14 January 2020",
            "Body paragraph one.",
        ]);

        let record = ExtractionProfile::Heuristic.extract(&block).unwrap();

        assert_eq!(record.author.as_deref(), Some("Jane Q. Public"));
        assert_eq!(record.date.as_deref(), Some("14 January 2020"));
        // both metadata paragraphs removed, the rest untouched
        assert_eq!(record.text, ["LONDON (Reuters)", "Body paragraph one."]);
    }

    #[test]
    fn heuristic_misses_default_to_null() {
        let block = block(&["The Title", "No byline here.", "No date either."]);

        let record = ExtractionProfile::Heuristic.extract(&block).unwrap();

        assert_eq!(record.author, None);
        assert_eq!(record.date, None);
        assert_eq!(record.text.len(), 2);
    }

    #[test]
    fn heuristic_scan_stops_after_the_window() {
        let mut lines = vec!["The Title"];
        let filler: Vec<String> = (0..16).map(|i| format!("Paragraph {i}.")).collect();
        lines.extend(filler.iter().map(String::as_str));
        lines.push("By Jane Q. Public");

        let record = ExtractionProfile::Heuristic.extract(&block(&lines)).unwrap();

        assert_eq!(record.author, None);
        assert_eq!(record.text.len(), 17);
    }

    #[test]
    fn date_scan_index_ignores_the_byline_removal() {
        // byline before date: date index is computed on the pre-removal
        // list, so both are recovered
        let block = block(&[
            "The Title",
            "By Jane Q. Public",
            "14 January 2020",
            "Body.",
        ]);

        let record = ExtractionProfile::Heuristic.extract(&block).unwrap();

        assert_eq!(record.author.as_deref(), Some("Jane Q. Public"));
        assert_eq!(record.date.as_deref(), Some("14 January 2020"));
        assert_eq!(record.text, ["Body."]);
    }

    #[test]
    fn empty_block_is_an_error() {
        let empty = RawBlock {
            id: "DOC1".to_string(),
            text: "\n \n".to_string(),
        };

        assert!(ExtractionProfile::Positional.extract(&empty).is_err());
    }
}
