use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::collector::COMMITS_FILE;
use crate::error::{CommitLensError, Result};
use crate::models::FetchResult;
use crate::summary::summarize_commits;

pub const DEFAULT_IN_DIR: &str = "data/summarizer";
pub const SUMMARY_FILE: &str = "summary.txt";

pub struct SummarizerConfig {
    pub in_dir: PathBuf,
}

#[derive(Debug)]
pub struct SummarizerOutput {
    pub path: PathBuf,
    pub summary: String,
}

/// Locate the commits artifact: the configured directory first, then the
/// sibling collector output directory. Missing input is a hard error; the
/// summarizer never invents data.
fn resolve_input(in_dir: &Path) -> Result<PathBuf> {
    let direct = in_dir.join(COMMITS_FILE);
    if direct.exists() {
        return Ok(direct);
    }

    if let Some(parent) = in_dir.parent() {
        let sibling = parent.join("collector").join(COMMITS_FILE);
        if sibling.exists() {
            return Ok(sibling);
        }
    }

    Err(CommitLensError::InputNotFound(direct.display().to_string()))
}

pub fn run(config: &SummarizerConfig) -> Result<SummarizerOutput> {
    let input_path = resolve_input(&config.in_dir)?;
    info!("Reading commits from {}", input_path.display());

    let raw = fs::read_to_string(&input_path)?;
    let result: FetchResult = serde_json::from_str(&raw)?;

    let summary = summarize_commits(&result.commits);

    // summary.txt lands in the configured directory even when the artifact
    // was found via the sibling fallback
    fs::create_dir_all(&config.in_dir)?;
    let path = config.in_dir.join(SUMMARY_FILE);
    fs::write(&path, &summary)?;

    Ok(SummarizerOutput { path, summary })
}
