/*! IO utilities.

Newline-delimited JSON reading and writing, plus the shard files used by
the batch match runner.

!*/
pub mod reader;
pub mod writer;

pub use reader::{JsonlFileReader, JsonlReader};
pub use writer::CorpusWriter;
