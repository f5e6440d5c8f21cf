use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents an entry in a repository folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Name of the file or folder
    pub name: String,
    /// Full path inside the repository, including the configured source folder
    pub path: String,
    /// Type of entry
    pub entry_type: EntryType,
    /// Size in bytes, when the remote reports one (folders report 0)
    pub size: Option<u64>,
}

/// Type of directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
}

/// Most recent commit touching a file
///
/// Never cached; refetched on every render pass so the modified column
/// tracks the remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Author date of the commit
    pub author_date: DateTime<Utc>,
    /// Full commit message
    pub message: String,
}
