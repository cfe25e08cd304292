//! Token-level matching engine.
//!
//! Scans a token sequence left to right against a [PatternRegistry]. At each
//! candidate start the longest matching pattern wins (the first-registered
//! one on equal length); a matched span consumes its tokens, so returned
//! spans never overlap and come out in left-to-right order.
use crate::error::Error;

use super::pattern::Pattern;
use super::registry::PatternRegistry;
use super::tokenizer::{self, Token, Tokenize};

/// A contiguous token range satisfying a pattern, with its label and the
/// original-text substring it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    start: usize,
    end: usize,
    label: String,
    text: String,
}

impl MatchSpan {
    /// Token range start (inclusive).
    pub fn start(&self) -> usize {
        self.start
    }

    /// Token range end (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Matching engine over a borrowed registry and an owned tokenizer.
///
/// A pure function of its inputs: identical text and registry yield
/// identical spans.
pub struct MatchingEngine<'a> {
    registry: &'a PatternRegistry,
    tokenizer: Box<dyn Tokenize + Send + Sync>,
}

impl<'a> MatchingEngine<'a> {
    pub fn new(registry: &'a PatternRegistry, tokenizer: Box<dyn Tokenize + Send + Sync>) -> Self {
        Self {
            registry,
            tokenizer,
        }
    }

    /// Build an engine with the tokenizer named by `model`.
    pub fn for_model(registry: &'a PatternRegistry, model: &str) -> Result<Self, Error> {
        Ok(Self::new(registry, tokenizer::for_model(model)?))
    }

    /// Tokenize `text` and return all non-overlapping maximal spans.
    pub fn find_matches(&self, text: &str) -> Vec<MatchSpan> {
        let tokens = self.tokenizer.tokenize(text);
        self.match_tokens(text, &tokens)
    }

    /// Match an already tokenized text against the registry.
    pub fn match_tokens(&self, text: &str, tokens: &[Token]) -> Vec<MatchSpan> {
        let mut spans = Vec::new();
        let mut position = 0;

        while position < tokens.len() {
            match self.best_match_at(tokens, position) {
                Some(pattern) => {
                    let end = position + pattern.len();
                    let byte_start = tokens[position].start();
                    let byte_end = tokens[end - 1].end();
                    spans.push(MatchSpan {
                        start: position,
                        end,
                        label: pattern.label().to_string(),
                        text: text[byte_start..byte_end].to_string(),
                    });
                    position = end;
                }
                None => position += 1,
            }
        }

        spans
    }

    /// Longest pattern matching at `start`; first-registered wins ties.
    fn best_match_at(&self, tokens: &[Token], start: usize) -> Option<&Pattern> {
        let mut best: Option<&Pattern> = None;
        for pattern in self.registry.patterns() {
            if best.map_or(false, |b| b.len() >= pattern.len()) {
                continue;
            }
            let end = start + pattern.len();
            if end > tokens.len() {
                continue;
            }
            let matched = pattern
                .rules()
                .iter()
                .zip(&tokens[start..end])
                .all(|(rule, token)| rule.is_match(token.lower()));
            if matched {
                best = Some(pattern);
            }
        }
        best
    }
}
