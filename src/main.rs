//! # Linotype
//!
//! Linotype prepares heterogeneous news-archive exports for annotation:
//! bulk export files are split into per-article records with heuristically
//! extracted metadata, deduplicated by id, and matched against a keyword
//! pattern set with a token-level matching engine.
//!
//! ## Getting started
//!
//! ```sh
//! linotype 0.1.0
//! news-archive corpus preparation tool.
//!
//! USAGE:
//!     linotype <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help        Prints this message or the help of the given subcommand(s)
//!     match       Run keyword matching over a prepared corpus
//!     prepare     Split bulk exports into annotation-ready records
//!     validate    Check corpus invariants of a prepared file
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;
mod error;
mod io;
mod matching;
mod pipelines;
mod processing;
mod sources;

use pipelines::{KeywordMatch, Pipeline, Prepare};

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Linotype::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Linotype::Prepare(p) => {
            let pipeline = Prepare::new(
                p.src,
                p.dst,
                p.profile,
                p.keywords,
                p.label,
                p.tokenizer,
                !p.no_wrap_regex,
            );
            pipeline.run()?;
        }
        cli::Linotype::Match(m) => {
            let pipeline = KeywordMatch::new(
                m.src,
                m.dst,
                m.keywords,
                m.workers,
                m.key,
                m.label,
                m.tokenizer,
                !m.no_wrap_regex,
            );
            pipeline.run()?;
        }
        cli::Linotype::Validate(v) => {
            let nb_records = processing::validate_file(&v.src)?;
            info!("{} records valid", nb_records);
        }
    };
    Ok(())
}
