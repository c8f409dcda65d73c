use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Simplified per-commit record, the interchange unit between the
/// collector and the summarizer. Missing fields serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    pub sha: String,
    pub author: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}

/// The `commits.json` artifact. Rewritten wholesale on every collector run.
#[derive(Debug, Serialize, Deserialize)]
pub struct FetchResult {
    pub repo: String,
    pub fetched_at: DateTime<Utc>,
    pub count: usize,
    #[serde(default)]
    pub commits: Vec<CommitRecord>,
}
