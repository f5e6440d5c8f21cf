use std::path::Path;

use serde::Deserialize;

use crate::error::{BrowseError, Result};

/// Which repository folder to index and which file to open first
///
/// Loadable from a TOML file; every key is optional and falls back to the
/// defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrowserConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Branch raw content is fetched from
    pub branch: String,
    /// Folder inside the repository being indexed
    pub source_folder: String,
    /// File (relative to the source folder) loaded into the viewer on
    /// startup
    pub default_file: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            owner: "liet-git".to_string(),
            repo: "yan.github.io".to_string(),
            branch: "main".to_string(),
            source_folder: "source".to_string(),
            default_file: "about.html".to_string(),
        }
    }
}

impl BrowserConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| BrowseError::InvalidConfig {
            message: format!("{}: {e}", path.display()),
        })
    }

    /// Repository path of the default file, including the source folder
    pub fn default_file_path(&self) -> String {
        if self.source_folder.is_empty() {
            self.default_file.clone()
        } else {
            format!(
                "{}/{}",
                self.source_folder.trim_end_matches('/'),
                self.default_file
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BrowserConfig::default();

        assert_eq!(config.branch, "main");
        assert_eq!(config.source_folder, "source");
        assert_eq!(config.default_file_path(), "source/about.html");
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: BrowserConfig =
            toml::from_str("owner = \"someone\"\nrepo = \"site\"\n").unwrap();

        assert_eq!(config.owner, "someone");
        assert_eq!(config.repo, "site");
        assert_eq!(config.branch, "main");
        assert_eq!(config.default_file, "about.html");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "owner = \"someone\"").unwrap();
        writeln!(file, "source_folder = \"pages\"").unwrap();
        writeln!(file, "default_file = \"index.html\"").unwrap();

        let config = BrowserConfig::load(file.path()).unwrap();
        assert_eq!(config.owner, "someone");
        assert_eq!(config.default_file_path(), "pages/index.html");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = BrowserConfig::load(Path::new("/nonexistent/ghindex.toml"));
        assert!(matches!(err, Err(BrowseError::Io(_))));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let parsed: std::result::Result<BrowserConfig, _> = toml::from_str("onwer = \"typo\"");
        assert!(parsed.is_err());
    }
}
