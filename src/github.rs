use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    error::{BrowseError, Result},
    source::RepoSource,
    types::{CommitInfo, DirectoryEntry, EntryType},
};

const DEFAULT_API_HOST: &str = "https://api.github.com";
const DEFAULT_RAW_HOST: &str = "https://raw.githubusercontent.com";

/// GitHub-backed repository source
///
/// Fetches content from a GitHub repository using:
/// - the REST contents API for folder listings
/// - the REST commits API for last-modified metadata
/// - raw.githubusercontent.com for file bodies
///
/// Requests are unauthenticated and count against GitHub's anonymous rate
/// limit.
#[derive(Clone)]
pub struct GitHubSource {
    client: Client,
    owner: String,
    repo: String,
    branch: String,
    source_folder: String,
    api_host: String,
    raw_host: String,
}

#[derive(Deserialize)]
struct GitHubApiEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    entry_type: String,
    size: Option<u64>,
}

#[derive(Deserialize)]
struct GitHubApiCommit {
    commit: GitHubCommitDetail,
}

#[derive(Deserialize)]
struct GitHubCommitDetail {
    author: GitHubCommitAuthor,
    message: String,
}

#[derive(Deserialize)]
struct GitHubCommitAuthor {
    date: DateTime<Utc>,
}

impl GitHubSource {
    /// Create a new GitHub source
    ///
    /// # Arguments
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `branch` - Branch or ref to fetch raw content from
    /// * `source_folder` - Folder inside the repository being indexed
    ///   (empty string for the repository root)
    pub fn new(owner: String, repo: String, branch: String, source_folder: String) -> Self {
        let client = Client::builder()
            .user_agent(concat!("ghindex/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            owner,
            repo,
            branch,
            source_folder,
            api_host: DEFAULT_API_HOST.to_string(),
            raw_host: DEFAULT_RAW_HOST.to_string(),
        }
    }

    /// Override the API and raw-content hosts (used by tests to point the
    /// source at a local stub server)
    pub fn with_hosts(mut self, api_host: String, raw_host: String) -> Self {
        self.api_host = api_host.trim_end_matches('/').to_string();
        self.raw_host = raw_host.trim_end_matches('/').to_string();
        self
    }

    /// Build the contents-API URL for a folder listing
    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_host,
            self.owner,
            self.repo,
            self.join_folder(path),
            self.branch
        )
    }

    /// Build the commits-API URL for a file's history
    fn commits_url(&self, file_path: &str) -> String {
        format!(
            "{}/repos/{}/{}/commits?path={}",
            self.api_host, self.owner, self.repo, file_path
        )
    }

    /// Build the raw content URL for a file
    fn raw_url(&self, file_path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_host,
            self.owner,
            self.repo,
            self.branch,
            file_path.trim_start_matches('/')
        )
    }

    /// Join the source folder with a folder path relative to it
    fn join_folder(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.source_folder.is_empty() {
            path.to_string()
        } else if path.is_empty() {
            self.source_folder.trim_end_matches('/').to_string()
        } else {
            format!("{}/{}", self.source_folder.trim_end_matches('/'), path)
        }
    }
}

#[async_trait]
impl RepoSource for GitHubSource {
    async fn list_dir(&self, path: &str) -> Result<Vec<DirectoryEntry>> {
        let url = self.contents_url(path);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BrowseError::Http { status, url });
        }

        let api_entries: Vec<GitHubApiEntry> = response.json().await?;

        let entries = api_entries
            .into_iter()
            .map(|e| DirectoryEntry {
                name: e.name,
                path: e.path,
                entry_type: match e.entry_type.as_str() {
                    "dir" => EntryType::Dir,
                    // Symlinks and submodules render like plain files
                    _ => EntryType::File,
                },
                size: e.size,
            })
            .collect();

        Ok(entries)
    }

    async fn latest_commit(&self, file_path: &str) -> Result<Option<CommitInfo>> {
        let url = self.commits_url(file_path);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BrowseError::Http { status, url });
        }

        let commits: Vec<GitHubApiCommit> = response.json().await?;

        // The API orders most-recent-first, so the head of the list is the
        // last-modified record for the file.
        Ok(commits.into_iter().next().map(|c| CommitInfo {
            author_date: c.commit.author.date,
            message: c.commit.message,
        }))
    }

    async fn fetch_raw(&self, file_path: &str) -> Result<String> {
        let url = self.raw_url(file_path);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BrowseError::Http { status, url });
        }

        Ok(response.text().await?)
    }

    fn identifier(&self) -> String {
        format!(
            "github://{}/{}/{}/{}",
            self.owner, self.repo, self.branch, self.source_folder
        )
    }
}
