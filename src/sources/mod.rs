/*! Export sources.

Turns heterogeneous news-archive exports into [crate::pipelines::types::Record]s:
bulk text blobs are segmented on document-id delimiters and run through a
field extraction profile, while pre-structured per-line JSON exports map
their fields directly.

!*/
pub mod factiva;
pub mod jsonl;
pub mod profiles;

pub use factiva::{segment, RawBlock, DOCUMENT_DELIMITER};
pub use profiles::ExtractionProfile;
