use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    cache::DirCache,
    config::BrowserConfig,
    page::Page,
    render::Listing,
    source::RepoSource,
    types::DirectoryEntry,
};

/// Drives the index page against one remote source
///
/// Owns the directory cache and the rendered [`Page`]; navigation and file
/// loading are the only operations that mutate them. Overlapping
/// navigations are not guarded against: methods take `&mut self`, so a
/// single owner serializes them naturally, and callers that share a
/// `Browser` behind their own lock inherit last-resolved-wins semantics.
pub struct Browser {
    source: Arc<dyn RepoSource>,
    cache: DirCache,
    page: Page,
    source_folder: String,
    default_file_path: String,
}

impl Browser {
    pub fn new(source: Arc<dyn RepoSource>, config: &BrowserConfig) -> Self {
        Self {
            source,
            cache: DirCache::new(),
            page: Page::new(),
            source_folder: config.source_folder.clone(),
            default_file_path: config.default_file_path(),
        }
    }

    /// Fetch the entries of a folder, consulting the cache first
    ///
    /// A cache hit skips the network entirely, even when the cached listing
    /// is empty. On a fetch error the error is reported to the viewer pane
    /// and an empty listing is returned without touching the cache, so the
    /// next visit retries.
    pub async fn fetch_dir(&mut self, path: &str) -> Vec<DirectoryEntry> {
        if let Some(cached) = self.cache.get(path).await {
            debug!(path, "directory cache hit");
            return cached;
        }

        match self.source.list_dir(path).await {
            Ok(entries) => {
                self.cache.insert(path, entries.clone()).await;
                entries
            }
            Err(err) => {
                warn!(path, error = %err, "directory fetch failed");
                self.page.report_error(&err.to_string());
                Vec::new()
            }
        }
    }

    /// Set the current view to `path`
    ///
    /// Fetches the folder, builds the base listing, then enriches each row
    /// with its latest commit one lookup at a time, in row order. A failed
    /// lookup is reported and its row keeps the placeholder cells; the rest
    /// of the render continues.
    pub async fn navigate(&mut self, path: &str) {
        info!(path, "navigating");

        let entries = self.fetch_dir(path).await;
        let mut listing = Listing::build(&entries, path, &self.source_folder);

        for entry in &entries {
            match self.source.latest_commit(&entry.path).await {
                Ok(Some(commit)) => listing.set_commit(&entry.path, &commit),
                Ok(None) => {}
                Err(err) => {
                    warn!(path = %entry.path, error = %err, "commit lookup failed");
                    self.page.report_error(&err.to_string());
                }
            }
        }

        self.page.set_listing(listing.to_html());
        self.page
            .set_title(format!("Index of /{}/{}", self.source_folder, path));
    }

    /// Load a file into the viewer pane
    ///
    /// `file_path` is the full repository path, including the source
    /// folder. The body is injected verbatim: it comes from the same
    /// repository being browsed and is treated as fully trusted.
    pub async fn load_file(&mut self, file_path: &str) {
        match self.source.fetch_raw(file_path).await {
            Ok(content) => self.page.set_viewer(content),
            Err(err) => {
                warn!(path = file_path, error = %err, "file load failed");
                self.page.report_error(&err.to_string());
            }
        }
    }

    /// Initial render: the source-folder root, then the default file
    pub async fn bootstrap(&mut self) {
        info!(source = %self.source.identifier(), "bootstrapping index");

        self.navigate("").await;
        let default = self.default_file_path.clone();
        self.load_file(&default).await;
    }

    /// The rendered page
    pub fn page(&self) -> &Page {
        &self.page
    }
}
