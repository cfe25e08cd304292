//! Corpus record types.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A structured article extracted from a bulk export.
///
/// `author` and `date` serialize as `null` when extraction found nothing;
/// `text` holds the body as ordered paragraphs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub date: Option<String>,
    pub text: Vec<String>,
}

impl Record {
    /// Text used for keyword filtering: title and body joined into one
    /// searchable string.
    pub fn search_text(&self) -> String {
        format!("{}. {}", self.title, self.text.join(" "))
    }
}

/// The per-record output of a batch match run.
///
/// `matches` serializes as `null` (not an empty array) when no pattern
/// matched. `cats` and `binary_cats` are copied unchanged from the source
/// record and are not interpreted here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MatchResult {
    pub id: Option<String>,
    pub matches: Option<Vec<String>>,
    #[serde(default)]
    pub cats: Value,
    #[serde(default)]
    pub binary_cats: Value,
}
