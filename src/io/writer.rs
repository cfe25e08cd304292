//! Corpus and shard writers.
//!
//! Everything is newline-delimited JSON. A batch match run gives each
//! worker a private shard file derived from the destination path and its
//! worker index; shards are concatenated into the destination and removed
//! once the pool has joined.
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use glob::glob;
use log::debug;
use serde::Serialize;

use crate::error::Error;

/// Buffered line-oriented JSON writer.
pub struct CorpusWriter {
    handle: BufWriter<File>,
}

impl CorpusWriter {
    /// Create (or truncate) the destination file.
    pub fn create(dst: &Path) -> Result<Self, Error> {
        Ok(Self {
            handle: BufWriter::new(File::create(dst)?),
        })
    }

    /// Open the destination for appending, creating it if needed.
    pub fn append(dst: &Path) -> Result<Self, Error> {
        let handle = OpenOptions::new().create(true).append(true).open(dst)?;
        Ok(Self {
            handle: BufWriter::new(handle),
        })
    }

    /// Serialize one value as a single line.
    pub fn write_line<S: Serialize>(&mut self, value: &S) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, value)?;
        self.handle.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.handle.flush()?;
        Ok(())
    }
}

/// Shard path for a given worker identity: `dst` with `_part_<worker>`
/// spliced in before the extension.
pub fn shard_path(dst: &Path, worker: usize) -> PathBuf {
    let stem = dst
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("matches");
    dst.with_file_name(format!("{stem}_part_{worker}.jsonl"))
}

/// Remove shards left behind by a previous run, whatever worker count it
/// used. Runs strictly before the pool starts.
pub fn clean_stale_shards(dst: &Path) -> Result<(), Error> {
    let pattern = shard_path(dst, 0)
        .to_string_lossy()
        .replace("_part_0", "_part_*");
    for entry in glob(&pattern)? {
        let path = entry?;
        debug!("removing stale shard {:?}", path);
        std::fs::remove_file(path)?;
    }
    Ok(())
}

/// Concatenate the known shard set `0..workers` into `dst`, deleting each
/// shard after it is copied. Runs strictly after the pool joins; shard
/// order across workers is arbitrary by contract.
pub fn merge_shards(dst: &Path, workers: usize) -> Result<(), Error> {
    let mut out = BufWriter::new(File::create(dst)?);
    for worker in 0..workers {
        let path = shard_path(dst, worker);
        if !path.exists() {
            continue;
        }
        let mut shard = File::open(&path)?;
        io::copy(&mut shard, &mut out)?;
        std::fs::remove_file(&path)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::tempdir;

    use super::{clean_stale_shards, merge_shards, shard_path, CorpusWriter};

    #[test]
    fn shard_paths_are_keyed_by_worker_identity() {
        let dst = Path::new("/out/matches.jsonl");
        assert_eq!(
            shard_path(dst, 3),
            Path::new("/out/matches_part_3.jsonl")
        );
    }

    #[test]
    fn merge_concatenates_and_removes_shards() {
        let dir = tempdir().unwrap();
        let dst = dir.path().join("matches.jsonl");

        for worker in 0..3 {
            let mut w = CorpusWriter::append(&shard_path(&dst, worker)).unwrap();
            w.write_line(&serde_json::json!({ "worker": worker })).unwrap();
            w.flush().unwrap();
        }

        merge_shards(&dst, 3).unwrap();

        let merged = fs::read_to_string(&dst).unwrap();
        assert_eq!(merged.lines().count(), 3);
        for worker in 0..3 {
            assert!(!shard_path(&dst, worker).exists());
        }
    }

    #[test]
    fn cleanup_removes_shards_from_any_worker_count() {
        let dir = tempdir().unwrap();
        let dst = dir.path().join("matches.jsonl");

        // stale shard with an index beyond the next run's worker count
        let stale = shard_path(&dst, 40);
        fs::write(&stale, "{}\n").unwrap();

        clean_stale_shards(&dst).unwrap();
        assert!(!stale.exists());
    }
}
