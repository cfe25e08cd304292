//! Compiled pattern registry.
//!
//! The registry is an explicitly constructed, immutable value: it is built
//! once from a keyword file and then only read. Workers that need one build
//! their own copy rather than sharing process-wide state.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::Error;

use super::pattern::{Pattern, COMMENT_MARKER};

/// Default label tagged onto compiled patterns.
pub const DEFAULT_LABEL: &str = "KEYWORD";

/// An ordered, read-only collection of compiled [Pattern]s sharing a label.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: Vec<Pattern>,
    label: String,
}

impl PatternRegistry {
    /// Load a registry from a keyword file, one pattern per line.
    ///
    /// Lines starting with `#` are excluded here; any remaining malformed
    /// line aborts the load.
    pub fn from_path(path: &Path, label: &str, wrap_regex: bool) -> Result<Self, Error> {
        let file = File::open(path)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<String>, std::io::Error>>()?;

        let registry = Self::from_lines(lines.iter().map(String::as_str), label, wrap_regex)?;
        info!("{} keyword patterns loaded from {:?}", registry.len(), path);
        Ok(registry)
    }

    /// Build a registry from keyword lines, filtering comment lines.
    pub fn from_lines<'a>(
        lines: impl Iterator<Item = &'a str>,
        label: &str,
        wrap_regex: bool,
    ) -> Result<Self, Error> {
        let patterns = lines
            .filter(|line| !line.starts_with(COMMENT_MARKER))
            .map(|line| Pattern::compile(line.trim_end(), label, wrap_regex))
            .collect::<Result<Vec<Pattern>, Error>>()?;

        Ok(Self {
            patterns,
            label: label.to_string(),
        })
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{PatternRegistry, DEFAULT_LABEL};

    #[test]
    fn comments_are_filtered_at_load() {
        let lines = ["# AI keyword list", "artificial intelligence", "neural network.?"];
        let registry =
            PatternRegistry::from_lines(lines.into_iter(), DEFAULT_LABEL, true).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.label(), "KEYWORD");
    }

    #[test]
    fn blank_line_aborts_the_load() {
        let lines = ["artificial intelligence", ""];
        assert!(PatternRegistry::from_lines(lines.into_iter(), DEFAULT_LABEL, true).is_err());
    }

    #[test]
    fn pattern_order_is_preserved() {
        let lines = ["machine learning", "machine learning model"];
        let registry =
            PatternRegistry::from_lines(lines.into_iter(), DEFAULT_LABEL, true).unwrap();

        assert_eq!(registry.patterns()[0].len(), 2);
        assert_eq!(registry.patterns()[1].len(), 3);
    }
}
