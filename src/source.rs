use async_trait::async_trait;
use crate::{
    error::Result,
    types::{CommitInfo, DirectoryEntry},
};

/// Core abstraction for the remote repository backing the index
///
/// Implementors provide read-only access to folder listings, commit
/// history, and raw file content. Path conventions follow the listing the
/// remote hands back: `list_dir` takes a folder path relative to the
/// configured source folder (`""` for its root), while `latest_commit` and
/// `fetch_raw` take the full repository path exactly as it appears in a
/// [`DirectoryEntry`].
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// List the entries of a folder, in the order the remote returns them
    async fn list_dir(&self, path: &str) -> Result<Vec<DirectoryEntry>>;

    /// Fetch the most recent commit touching a file
    ///
    /// Returns `Ok(None)` when the remote reports an empty history.
    async fn latest_commit(&self, file_path: &str) -> Result<Option<CommitInfo>>;

    /// Fetch the raw text content of a file
    async fn fetch_raw(&self, file_path: &str) -> Result<String>;

    /// Get a human-readable identifier for this source (for logging/debugging)
    fn identifier(&self) -> String;
}
