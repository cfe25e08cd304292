//! Pre-structured per-line JSON source.
//!
//! Some sources ship one JSON object per article instead of bulk blobs.
//! Their field names are mapped onto [Record] directly; only the date needs
//! recovering, by regex search over the snippet field.
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::error::Error;
use crate::io::reader::JsonlFileReader;
use crate::pipelines::types::Record;

lazy_static! {
    static ref SNIPPET_DATE: Regex =
        Regex::new(r"(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) \d{1,2}, \d{4}").unwrap();
}

/// One article as exported by the source.
#[derive(Debug, Deserialize)]
pub struct PrestructuredArticle {
    link: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    bio: Vec<String>,
    full_text: Vec<String>,
    #[serde(default)]
    snippet: String,
}

impl From<PrestructuredArticle> for Record {
    fn from(article: PrestructuredArticle) -> Self {
        let author = if article.bio.is_empty() {
            None
        } else {
            Some(article.bio.join("\n"))
        };
        let date = SNIPPET_DATE
            .find(&article.snippet)
            .map(|found| found.as_str().to_string());

        Record {
            id: article.link,
            title: article.title,
            author,
            date,
            text: article.full_text,
        }
    }
}

/// Read a newline-delimited JSON export into records.
pub fn read_prestructured(path: &Path) -> Result<Vec<Record>, Error> {
    JsonlFileReader::from_path(path)?
        .map(|value| {
            let article: PrestructuredArticle = serde_json::from_value(value?)?;
            Ok(Record::from(article))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::PrestructuredArticle;
    use crate::pipelines::types::Record;

    fn article(json: &str) -> Record {
        let article: PrestructuredArticle = serde_json::from_str(json).unwrap();
        Record::from(article)
    }

    #[test]
    fn fields_map_onto_the_record_shape() {
        let record = article(
            r#"{
                "link": "https://example.com/a-story",
                "title": "A Story",
                "bio": ["Jane Q. Public", "covers defense technology"],
                "full_text": ["First paragraph.", "Second paragraph."],
                "snippet": "Published Jan 8, 2020 in the morning brief"
            }"#,
        );

        assert_eq!(record.id, "https://example.com/a-story");
        assert_eq!(record.title, "A Story");
        assert_eq!(
            record.author.as_deref(),
            Some("Jane Q. Public\ncovers defense technology")
        );
        assert_eq!(record.date.as_deref(), Some("Jan 8, 2020"));
        assert_eq!(record.text, ["First paragraph.", "Second paragraph."]);
    }

    #[test]
    fn missing_snippet_date_and_bio_default_to_null() {
        let record = article(
            r#"{
                "link": "https://example.com/b",
                "title": "B",
                "bio": [],
                "full_text": ["Body."],
                "snippet": "no date in here"
            }"#,
        );

        assert_eq!(record.author, None);
        assert_eq!(record.date, None);
    }
}
