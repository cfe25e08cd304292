/*! Keyword pattern compilation and token-level matching.

One keyword line compiles into a [Pattern]: a per-token rule sequence mixing
lowercase literals and regex-wrapped tokens. Patterns live in an immutable
[PatternRegistry] that the [MatchingEngine] scans tokenized text against.

!*/
mod engine;
mod pattern;
mod registry;
pub mod tokenizer;

pub use engine::{MatchSpan, MatchingEngine};
pub use pattern::{Pattern, TokenRule};
pub use registry::{PatternRegistry, DEFAULT_LABEL};
pub use tokenizer::{Token, Tokenize, UnicodeTokenizer, WhitespaceTokenizer};
