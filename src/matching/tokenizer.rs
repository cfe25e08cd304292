//! Tokenizers.
//!
//! The matching engine only needs an ordered token sequence where each token
//! carries its byte span in the source text and a lowercase surface form.
//! Implementations are selected by a model identifier so that the engine
//! composes with any [Tokenize] implementor.
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;

/// Default tokenizer model identifier.
pub const DEFAULT_MODEL: &str = "unicode-words";

/// A token: a byte span `[start, end)` into the source text and the
/// lowercase form of the covered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    start: usize,
    end: usize,
    lower: String,
}

impl Token {
    pub fn new(start: usize, end: usize, lower: String) -> Self {
        Self { start, end, lower }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }
}

/// Turns raw text into an ordered token sequence.
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Splits on Unicode word boundaries, keeping punctuation tokens and
/// dropping whitespace-only segments.
#[derive(Debug, Default)]
pub struct UnicodeTokenizer;

impl Tokenize for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_word_bound_indices()
            .filter(|(_, segment)| !segment.trim().is_empty())
            .map(|(start, segment)| {
                Token::new(start, start + segment.len(), segment.to_lowercase())
            })
            .collect()
    }
}

/// Splits on whitespace only. Punctuation stays glued to its word, so this
/// is mostly useful for pre-tokenized input.
#[derive(Debug, Default)]
pub struct WhitespaceTokenizer;

impl Tokenize for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|word| {
                let start = word.as_ptr() as usize - text.as_ptr() as usize;
                Token::new(start, start + word.len(), word.to_lowercase())
            })
            .collect()
    }
}

/// Resolve a tokenizer model identifier to an implementation.
pub fn for_model(model: &str) -> Result<Box<dyn Tokenize + Send + Sync>, Error> {
    match model {
        "unicode-words" => Ok(Box::new(UnicodeTokenizer)),
        "whitespace" => Ok(Box::new(WhitespaceTokenizer)),
        other => Err(Error::UnknownTokenizer(other.to_string())),
    }
}
