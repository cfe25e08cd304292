//! Keyword pattern compilation.
//!
//! A keyword file line like `machine translat.* system` compiles into one
//! rule per whitespace-delimited token: plain tokens match on lowercase
//! equality, tokens carrying regex metacharacters match their lowercase
//! surface form against the token as a regex.
use regex::Regex;

use crate::error::Error;

/// Characters that promote a token to a regex rule.
const REGEX_SYMBOLS: [char; 8] = ['+', '*', '[', ']', '\\', '^', '$', '.'];

/// Comment marker for keyword files.
pub const COMMENT_MARKER: char = '#';

/// A matching condition for a single token position.
#[derive(Debug, Clone)]
pub enum TokenRule {
    /// Matches when the token's lowercase form equals the value.
    ExactLower(String),
    /// Matches when the token's lowercase form matches the regex.
    RegexLower(Regex),
}

impl TokenRule {
    pub fn is_match(&self, lower: &str) -> bool {
        match self {
            TokenRule::ExactLower(value) => value == lower,
            TokenRule::RegexLower(re) => re.is_match(lower),
        }
    }
}

/// An ordered rule sequence compiled from one keyword line, plus its label.
#[derive(Debug, Clone)]
pub struct Pattern {
    rules: Vec<TokenRule>,
    label: String,
}

impl Pattern {
    /// Compile a keyword line into a [Pattern].
    ///
    /// Rule order preserves token order, so a line can mix literal words and
    /// regex-governed tokens. With `wrap_regex` on, regex rules are anchored
    /// (`^...$`) and match whole tokens rather than substrings.
    ///
    /// Empty lines and comment lines are invalid here: callers filter
    /// comments at load time.
    pub fn compile(line: &str, label: &str, wrap_regex: bool) -> Result<Self, Error> {
        if line.trim().is_empty() {
            return Err(Error::InvalidPattern("empty keyword line".to_string()));
        }
        if line.starts_with(COMMENT_MARKER) {
            return Err(Error::InvalidPattern(format!(
                "comment line passed to the pattern compiler: {line}"
            )));
        }

        let rules = line
            .split_whitespace()
            .map(|token| {
                let lower = token.to_lowercase();
                if token.contains(&REGEX_SYMBOLS[..]) {
                    let body = if wrap_regex {
                        format!("^{lower}$")
                    } else {
                        lower
                    };
                    Ok(TokenRule::RegexLower(Regex::new(&body)?))
                } else {
                    Ok(TokenRule::ExactLower(lower))
                }
            })
            .collect::<Result<Vec<TokenRule>, Error>>()?;

        Ok(Self {
            rules,
            label: label.to_string(),
        })
    }

    pub fn rules(&self) -> &[TokenRule] {
        &self.rules
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of tokens this pattern consumes.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
