//! Annotation-input preparation pipeline.
//!
//! Turns a source directory of export files into one deduplicated,
//! annotation-ready `.jsonl` corpus:
//!
//! 1. discover export files,
//! 1. segment each into per-document blocks and extract fields per the
//!    source profile,
//! 1. deduplicate by id (last write wins),
//! 1. optionally keep only records matching a keyword file,
//! 1. write records out in shuffled order.
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use glob::glob;
use log::{info, warn};
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::error::Error;
use crate::io::writer::CorpusWriter;
use crate::matching::{MatchingEngine, PatternRegistry};
use crate::processing::dedup;
use crate::sources::{jsonl, segment, ExtractionProfile, DOCUMENT_DELIMITER};

use super::pipeline::Pipeline;
use super::types::Record;

/// What kind of export a source holds, and how to extract fields from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceProfile {
    /// Bulk text exports with author/date at fixed positions.
    Positional,
    /// Bulk text exports where byline and date are searched for.
    Heuristic,
    /// One JSON object per article, fields mapped directly.
    Prestructured,
}

impl FromStr for SourceProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positional" => Ok(Self::Positional),
            "heuristic" => Ok(Self::Heuristic),
            "jsonl" => Ok(Self::Prestructured),
            other => Err(format!(
                "unknown source profile: {other} (expected positional, heuristic or jsonl)"
            )),
        }
    }
}

pub struct Prepare {
    src: PathBuf,
    dst: PathBuf,
    profile: SourceProfile,
    keywords: Option<PathBuf>,
    label: String,
    tokenizer: String,
    wrap_regex: bool,
}

impl Prepare {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        profile: SourceProfile,
        keywords: Option<PathBuf>,
        label: String,
        tokenizer: String,
        wrap_regex: bool,
    ) -> Self {
        Self {
            src,
            dst,
            profile,
            keywords,
            label,
            tokenizer,
            wrap_regex,
        }
    }

    /// Export files for bulk profiles: the source itself if it is a file,
    /// otherwise every `*.txt` under the source directory.
    fn export_paths(&self) -> Result<Vec<PathBuf>, Error> {
        if self.src.is_file() {
            return Ok(vec![self.src.clone()]);
        }
        let pattern = self.src.join("*.txt");
        let paths = glob(&pattern.to_string_lossy())?
            .collect::<Result<Vec<PathBuf>, glob::GlobError>>()?;
        if paths.is_empty() {
            return Err(Error::Custom(format!("no export files in {:?}", self.src)));
        }
        Ok(paths)
    }

    /// Segment and extract every document of every export file.
    ///
    /// Blocks with no paragraphs cannot yield a title; they are logged and
    /// skipped, everything else aborts the run.
    fn collect_records(&self) -> Result<Vec<Record>, Error> {
        let extraction = match self.profile {
            SourceProfile::Positional => ExtractionProfile::Positional,
            SourceProfile::Heuristic => ExtractionProfile::Heuristic,
            SourceProfile::Prestructured => return jsonl::read_prestructured(&self.src),
        };

        let paths = self.export_paths()?;
        info!("{} export files", paths.len());

        let mut records = Vec::new();
        for path in paths {
            let text = fs::read_to_string(&path)?;
            for block in segment(&text, &DOCUMENT_DELIMITER)? {
                match extraction.extract(&block) {
                    Ok(record) => records.push(record),
                    Err(Error::EmptyBlock(id)) => warn!("skipping empty result {}", id),
                    Err(e) => return Err(e),
                }
            }
        }
        info!("{} extracted docs", records.len());
        Ok(records)
    }

    /// Keep only records with at least one keyword match in title or body.
    fn keyword_filter(&self, records: Vec<Record>, keywords: &Path) -> Result<Vec<Record>, Error> {
        let registry = PatternRegistry::from_path(keywords, &self.label, self.wrap_regex)?;
        let engine = MatchingEngine::for_model(&registry, &self.tokenizer)?;

        let hits: Vec<Record> = records
            .into_iter()
            .filter(|record| !engine.find_matches(&record.search_text()).is_empty())
            .collect();
        info!("{} docs containing keywords", hits.len());
        Ok(hits)
    }
}

impl Pipeline<()> for Prepare {
    fn version() -> &'static str {
        "0.1.0"
    }

    fn run(&self) -> Result<(), Error> {
        let records = self.collect_records()?;
        let mut records = dedup(records);

        if let Some(keywords) = &self.keywords {
            records = self.keyword_filter(records, keywords)?;
        }

        // annotation inputs go out in shuffled order
        records.shuffle(&mut thread_rng());

        let mut writer = CorpusWriter::create(&self.dst)?;
        for record in &records {
            writer.write_line(record)?;
        }
        writer.flush()?;
        info!("wrote {} records to {:?}", records.len(), self.dst);
        Ok(())
    }
}
