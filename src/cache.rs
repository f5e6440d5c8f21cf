use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::types::DirectoryEntry;

/// In-memory cache of folder listings, keyed by folder path (`""` = root)
///
/// Lives as long as the [`Browser`](crate::Browser) that owns it. A key,
/// once populated, is never updated or evicted, so listings can go stale
/// against the remote within a session; that trade keeps every revisit of
/// an already-seen folder free of network calls. Failed fetches are never
/// inserted, so they stay retryable.
pub struct DirCache {
    store: Arc<RwLock<HashMap<String, Vec<DirectoryEntry>>>>,
}

impl DirCache {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the cached listing for a folder path
    pub async fn get(&self, path: &str) -> Option<Vec<DirectoryEntry>> {
        let store = self.store.read().await;
        store.get(path).cloned()
    }

    /// Store a fetched listing under a folder path
    pub async fn insert(&self, path: &str, entries: Vec<DirectoryEntry>) {
        let mut store = self.store.write().await;
        store.insert(path.to_string(), entries);
    }

    /// Check if a folder path has been cached
    pub async fn contains(&self, path: &str) -> bool {
        let store = self.store.read().await;
        store.contains_key(path)
    }
}

impl Default for DirCache {
    fn default() -> Self {
        Self::new()
    }
}
