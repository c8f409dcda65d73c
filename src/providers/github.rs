use log::info;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::auth::Token;
use crate::error::{CommitLensError, Result};
use crate::models::CommitRecord;

const PER_PAGE: usize = 100;

pub struct GitHubClient {
    client: Client,
    api_url: Url,
    token: Option<Token>,
}

/// Raw commit payload from the GitHub commits list endpoint. Only the
/// fields the simplified record needs are deserialized.
#[derive(Debug, Deserialize)]
pub struct GitHubCommitDto {
    #[serde(default)]
    pub sha: String,
    pub commit: Option<CommitDetailDto>,
    pub author: Option<AccountDto>,
    pub html_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommitDetailDto {
    pub message: Option<String>,
    pub author: Option<CommitAuthorDto>,
}

#[derive(Debug, Deserialize)]
pub struct CommitAuthorDto {
    pub name: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AccountDto {
    pub login: Option<String>,
}

impl GitHubCommitDto {
    /// Flatten the nested API shape into a CommitRecord. The author is the
    /// commit-author display name, falling back to the account login.
    pub fn simplify(self) -> CommitRecord {
        let login = self.author.and_then(|account| account.login);
        let (message, commit_author) = match self.commit {
            Some(detail) => (detail.message, detail.author),
            None => (None, None),
        };
        let (name, date) = match commit_author {
            Some(author) => (author.name, author.date),
            None => (None, None),
        };

        CommitRecord {
            sha: self.sha,
            author: name.or(login),
            message,
            date,
            url: self.html_url,
        }
    }
}

impl GitHubClient {
    pub fn new(base_url: &str, token: Option<Token>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .user_agent("CommitLens/0.1.0")
            .default_headers(headers)
            .build()
            .map_err(|e| CommitLensError::Config(format!("Failed to create HTTP client: {e}")))?;

        let api_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|e| CommitLensError::Config(format!("Invalid API base URL: {e}")))?;

        Ok(Self {
            client,
            api_url,
            token,
        })
    }

    /// Helper to build authenticated requests
    fn auth_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = &self.token {
            request.bearer_auth(token.as_str())
        } else {
            request
        }
    }

    /// Construct the commits list URL for an `owner/name` repository
    fn commits_url(&self, repo: &str) -> Result<Url> {
        self.api_url
            .join(&format!("repos/{repo}/commits"))
            .map_err(|e| CommitLensError::Config(format!("Invalid commits URL: {e}")))
    }

    /// Fetch a single page of commits. Returns `None` when the endpoint
    /// answers with a non-array body (e.g. an error object on a 200).
    async fn fetch_commits_page(
        &self,
        repo: &str,
        page: u32,
        since: Option<&str>,
        until: Option<&str>,
    ) -> Result<Option<Vec<GitHubCommitDto>>> {
        let url = self.commits_url(repo)?;

        let mut request = self
            .client
            .get(url)
            .query(&[("per_page", PER_PAGE.to_string()), ("page", page.to_string())]);
        if let Some(since) = since {
            request = request.query(&[("since", since)]);
        }
        if let Some(until) = until {
            request = request.query(&[("until", until)]);
        }
        request = self.auth_request(request);

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CommitLensError::Api(format!(
                "GitHub API error {status}: {body}"
            )));
        }

        let body: Value = response.json().await?;
        match body {
            Value::Array(_) => Ok(Some(serde_json::from_value(body)?)),
            _ => Ok(None),
        }
    }

    /// Page through the commits endpoint in sequence, stopping on an empty
    /// page, a short page, or a non-array body. A non-success status aborts
    /// the whole fetch.
    pub async fn fetch_commits(
        &self,
        repo: &str,
        since: Option<&str>,
        until: Option<&str>,
    ) -> Result<Vec<GitHubCommitDto>> {
        let mut all_commits = Vec::new();
        let mut page = 1;

        loop {
            let Some(commits) = self.fetch_commits_page(repo, page, since, until).await? else {
                break;
            };

            if commits.is_empty() {
                break;
            }

            let fetched_count = commits.len();
            all_commits.extend(commits);

            info!(
                "Page {}: fetched {} commits (total: {})",
                page,
                fetched_count,
                all_commits.len()
            );

            if fetched_count < PER_PAGE {
                break;
            }

            page += 1;
        }

        Ok(all_commits)
    }
}
