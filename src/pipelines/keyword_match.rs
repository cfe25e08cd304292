//! Batch keyword matching over a prepared corpus.
//!
//! Work is fanned out statically over a fixed-size pool: worker `i` owns
//! the `i`-th contiguous chunk of records and appends one [MatchResult]
//! line per record to its private shard file, named by its worker index.
//! Stale shards are removed before the pool starts; after the synchronous
//! join, the known shard set `0..workers` is concatenated into the
//! destination and deleted. A failing worker aborts the whole run.
use std::path::PathBuf;

use itertools::Itertools;
use log::info;
use rayon::prelude::*;
use serde_json::Value;

use crate::error::Error;
use crate::io::reader::JsonlFileReader;
use crate::io::writer::{self, CorpusWriter};
use crate::matching::{MatchingEngine, PatternRegistry};

use super::pipeline::Pipeline;
use super::types::MatchResult;

pub struct KeywordMatch {
    src: PathBuf,
    dst: PathBuf,
    keywords: PathBuf,
    workers: usize,
    key: String,
    label: String,
    tokenizer: String,
    wrap_regex: bool,
}

impl KeywordMatch {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        keywords: PathBuf,
        workers: usize,
        key: String,
        label: String,
        tokenizer: String,
        wrap_regex: bool,
    ) -> Self {
        Self {
            src,
            dst,
            keywords,
            workers,
            key,
            label,
            tokenizer,
            wrap_regex,
        }
    }

    /// One worker: build a private registry and engine, then match the
    /// assigned records into the worker's shard in assignment order.
    ///
    /// Registry construction is the dominant per-worker startup cost;
    /// nothing is shared between workers but the read-only inputs.
    fn run_worker(&self, worker: usize, records: &[Value]) -> Result<(), Error> {
        let registry = PatternRegistry::from_path(&self.keywords, &self.label, self.wrap_regex)?;
        let engine = MatchingEngine::for_model(&registry, &self.tokenizer)?;

        let mut shard = CorpusWriter::append(&writer::shard_path(&self.dst, worker))?;
        for record in records {
            shard.write_line(&self.match_record(&engine, record))?;
        }
        shard.flush()
    }

    fn match_record(&self, engine: &MatchingEngine, record: &Value) -> MatchResult {
        let text = keyed_text(record, &self.key);
        let matches: Vec<String> = engine
            .find_matches(&text)
            .into_iter()
            .map(|span| span.text().to_string())
            .collect();

        MatchResult {
            id: record.get("id").and_then(Value::as_str).map(String::from),
            matches: if matches.is_empty() {
                None
            } else {
                Some(matches)
            },
            cats: record.get("cats").cloned().unwrap_or(Value::Null),
            binary_cats: record.get("binary_cats").cloned().unwrap_or(Value::Null),
        }
    }
}

/// The matched field is either a plain string or a paragraph array.
fn keyed_text(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(paragraphs)) => {
            paragraphs.iter().filter_map(Value::as_str).join("\n")
        }
        _ => String::new(),
    }
}

impl Pipeline<()> for KeywordMatch {
    fn version() -> &'static str {
        "0.1.0"
    }

    fn run(&self) -> Result<(), Error> {
        if self.workers == 0 {
            return Err(Error::Custom("worker count must be at least 1".to_string()));
        }

        let records = JsonlFileReader::from_path(&self.src)?
            .collect::<Result<Vec<Value>, Error>>()?;
        info!("{} records to match", records.len());

        writer::clean_stale_shards(&self.dst)?;

        if records.is_empty() {
            CorpusWriter::create(&self.dst)?.flush()?;
            return Ok(());
        }

        // static fan-out, no rebalancing: worker i owns the i-th chunk
        let chunk_size = (records.len() + self.workers - 1) / self.workers;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| Error::Custom(e.to_string()))?;
        pool.install(|| {
            records
                .chunks(chunk_size)
                .enumerate()
                .par_bridge()
                .try_for_each(|(worker, chunk)| self.run_worker(worker, chunk))
        })?;

        writer::merge_shards(&self.dst, self.workers)?;
        info!("merged shards into {:?}", self.dst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::keyed_text;
    use serde_json::json;

    #[test]
    fn keyed_text_reads_strings_and_paragraph_arrays() {
        let record = json!({
            "title": "A headline",
            "text": ["First paragraph.", "Second paragraph."]
        });

        assert_eq!(keyed_text(&record, "title"), "A headline");
        assert_eq!(
            keyed_text(&record, "text"),
            "First paragraph.\nSecond paragraph."
        );
        assert_eq!(keyed_text(&record, "missing"), "");
    }
}
