mod auth;
mod cli;
mod collector;
mod error;
mod models;
mod pipeline;
mod providers;
mod summarizer;
mod summary;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting CommitLens - Commit Activity Tool");
    cli.execute().await
}
