pub mod browser;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod page;
pub mod render;
pub mod source;
pub mod types;

pub use browser::Browser;
pub use cache::DirCache;
pub use config::BrowserConfig;
pub use error::{BrowseError, Result};
pub use github::GitHubSource;
pub use page::Page;
pub use render::{format_size, parent_of, truncate_message, Listing};
pub use source::RepoSource;
pub use types::{CommitInfo, DirectoryEntry, EntryType};
