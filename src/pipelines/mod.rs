/*! Pipelines.

The [prepare::Prepare] pipeline builds annotation inputs from raw exports;
the [keyword_match::KeywordMatch] pipeline fans keyword matching out over a
fixed worker pool. Both implement the light [pipeline::Pipeline] trait.

!*/
pub mod keyword_match;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod prepare;
pub mod types;

pub use keyword_match::KeywordMatch;
pub use pipeline::Pipeline;
pub use prepare::{Prepare, SourceProfile};
pub use types::{MatchResult, Record};
