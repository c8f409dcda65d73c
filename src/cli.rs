use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::auth::Token;
use crate::collector::{self, CollectorConfig};
use crate::pipeline;
use crate::summarizer::{self, SummarizerConfig};

#[derive(Parser)]
#[command(name = "commitlens")]
#[command(author, version, about = "Commit Activity Tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch commit history and write the commits.json artifact
    Collect {
        /// Repository in owner/name form
        #[arg(env = "REPO", default_value = collector::DEFAULT_REPO)]
        repo: String,

        /// GitHub API token (optional, raises rate limits)
        #[arg(short, long, env = "GITHUB_TOKEN")]
        token: Option<String>,

        /// Only include commits after this ISO date
        #[arg(long, env = "SPRINT_START")]
        since: Option<String>,

        /// Only include commits before this ISO date
        #[arg(long, env = "SPRINT_END")]
        until: Option<String>,

        /// Directory the commits.json artifact is written to
        #[arg(short, long, env = "OUT_DIR", default_value = collector::DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// GitHub API base URL
        #[arg(long, env = "GITHUB_API_URL", default_value = collector::DEFAULT_API_URL)]
        api_url: String,

        /// Write an empty artifact instead of substituting sample data
        /// when the fetch fails or yields nothing
        #[arg(long, default_value_t = false)]
        no_fallback: bool,
    },

    /// Derive the summary.txt report from a commits.json artifact
    Summarize {
        /// Directory holding commits.json
        #[arg(short, long, env = "IN_DIR", default_value = summarizer::DEFAULT_IN_DIR)]
        in_dir: PathBuf,
    },

    /// Run collect then summarize as one pipeline
    Run {
        /// Repository in owner/name form
        repo: Option<String>,
    },
}

impl Cli {
    pub async fn execute(&self) -> Result<ExitCode> {
        match &self.command {
            Commands::Collect {
                repo,
                token,
                since,
                until,
                out_dir,
                api_url,
                no_fallback,
            } => {
                info!("Collecting commits for repository: {repo}");

                let config = CollectorConfig {
                    repo: repo.clone(),
                    token: token.as_deref().map(Token::from),
                    since: since.clone(),
                    until: until.clone(),
                    out_dir: out_dir.clone(),
                    api_url: api_url.clone(),
                    sample_fallback: !no_fallback,
                };
                let output = collector::run(config).await?;

                println!("Wrote {} commits to {}", output.count, output.path.display());
                Ok(ExitCode::SUCCESS)
            }
            Commands::Summarize { in_dir } => {
                let config = SummarizerConfig {
                    in_dir: in_dir.clone(),
                };
                let output = summarizer::run(&config)?;

                println!("Wrote summary to {}", output.path.display());
                Ok(ExitCode::SUCCESS)
            }
            Commands::Run { repo } => {
                let repo = repo.as_deref().unwrap_or(collector::DEFAULT_REPO);
                let code = pipeline::run(repo).await?;
                Ok(code)
            }
        }
    }
}
