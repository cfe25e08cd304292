//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::pipelines::SourceProfile;

#[derive(Debug, StructOpt)]
#[structopt(name = "linotype", about = "news-archive corpus preparation tool.")]
/// Holds every command callable by the `linotype` command.
pub enum Linotype {
    #[structopt(about = "Split bulk exports into annotation-ready records")]
    Prepare(Prepare),
    #[structopt(about = "Run keyword matching over a prepared corpus")]
    Match(Match),
    #[structopt(about = "Check corpus invariants of a prepared file")]
    Validate(Validate),
}

#[derive(Debug, StructOpt)]
/// Prepare command and parameters.
pub struct Prepare {
    #[structopt(
        parse(from_os_str),
        help = "source export file, or directory containing *.txt exports"
    )]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination corpus file (jsonl)")]
    pub dst: PathBuf,
    #[structopt(
        long = "profile",
        default_value = "positional",
        help = "extraction profile (positional, heuristic, jsonl)"
    )]
    pub profile: SourceProfile,
    #[structopt(
        long = "keywords",
        parse(from_os_str),
        help = "keyword file; keeps only records with at least one match"
    )]
    pub keywords: Option<PathBuf>,
    #[structopt(
        long = "label",
        default_value = "KEYWORD",
        help = "label tagged onto compiled patterns"
    )]
    pub label: String,
    #[structopt(
        long = "tokenizer",
        default_value = "unicode-words",
        help = "tokenizer model identifier"
    )]
    pub tokenizer: String,
    #[structopt(
        long = "no-wrap-regex",
        help = "match regex rules on substrings instead of whole tokens"
    )]
    pub no_wrap_regex: bool,
}

#[derive(Debug, StructOpt)]
/// Match command and parameters.
pub struct Match {
    #[structopt(parse(from_os_str), help = "prepared corpus file (jsonl)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "match output file (jsonl)")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "keyword file, one pattern per line, # for comments"
    )]
    pub keywords: PathBuf,
    #[structopt(
        short = "w",
        long = "workers",
        default_value = "12",
        help = "worker pool size"
    )]
    pub workers: usize,
    #[structopt(
        short = "k",
        long = "key",
        default_value = "text",
        help = "record field to match against"
    )]
    pub key: String,
    #[structopt(
        long = "label",
        default_value = "KEYWORD",
        help = "label tagged onto compiled patterns"
    )]
    pub label: String,
    #[structopt(
        long = "tokenizer",
        default_value = "unicode-words",
        help = "tokenizer model identifier"
    )]
    pub tokenizer: String,
    #[structopt(
        long = "no-wrap-regex",
        help = "match regex rules on substrings instead of whole tokens"
    )]
    pub no_wrap_regex: bool,
}

#[derive(Debug, StructOpt)]
/// Validate command and parameters.
pub struct Validate {
    #[structopt(parse(from_os_str), help = "prepared corpus file (jsonl)")]
    pub src: PathBuf,
}
