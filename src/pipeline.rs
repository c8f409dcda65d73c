use std::path::Path;
use std::process::{ExitCode, ExitStatus};

use log::info;
use tokio::process::Command;

use crate::collector::{COMMITS_FILE, DEFAULT_OUT_DIR};
use crate::error::Result;
use crate::summarizer::SUMMARY_FILE;

/// Run collect then summarize as child processes of the current executable,
/// both pinned to the same artifact directory. The first failing stage's
/// exit code is returned; only the binary boundary terminates the process.
pub async fn run(repo: &str) -> Result<ExitCode> {
    let exe = std::env::current_exe()?;

    info!("Running pipeline for {repo}");

    let status = Command::new(&exe)
        .args(["collect", repo, "--out-dir", DEFAULT_OUT_DIR])
        .status()
        .await?;
    if !status.success() {
        return Ok(stage_exit_code(status));
    }

    let status = Command::new(&exe)
        .args(["summarize", "--in-dir", DEFAULT_OUT_DIR])
        .status()
        .await?;
    if !status.success() {
        return Ok(stage_exit_code(status));
    }

    let out_dir = Path::new(DEFAULT_OUT_DIR);
    println!("Pipeline finished. Outputs:");
    println!("- commits: {}", out_dir.join(COMMITS_FILE).display());
    println!("- summary: {}", out_dir.join(SUMMARY_FILE).display());

    Ok(ExitCode::SUCCESS)
}

/// Forward a child's exit code; children killed without one map to failure.
fn stage_exit_code(status: ExitStatus) -> ExitCode {
    match status.code() {
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        None => ExitCode::FAILURE,
    }
}
