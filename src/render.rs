//! Apache-style listing rows
//!
//! Builds the table body of the index page: one row per directory entry in
//! remote order, plus a synthetic "Parent Directory" row when not at the
//! root. Rows start with placeholder modified/description cells and are
//! enriched afterwards from commit lookups, keyed by entry path, so a slow
//! lookup can never land its result on the wrong row.

use crate::types::{CommitInfo, DirectoryEntry, EntryType};

/// Shown in the modified column until a commit lookup resolves
const MODIFIED_PLACEHOLDER: &str = "N/A";
/// Shown in the description column when no commit data is available
const DESCRIPTION_PLACEHOLDER: &str = "No description available";
/// Empty cell marker for the parent row and absent sizes
const EMPTY_CELL: &str = "-";
/// Commit messages longer than this are cut off in the description column
const DESCRIPTION_LIMIT: usize = 15;

/// Human-readable file size: bytes below 1 KB, otherwise two decimals
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1_048_576 {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.2} MB", bytes as f64 / 1_048_576.0)
    }
}

/// Parent of a folder path: everything up to the last separator
///
/// A single-segment path parents to the root (`""`).
pub fn parent_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Commit message as shown in the description column
pub fn truncate_message(message: &str) -> String {
    if message.chars().count() > DESCRIPTION_LIMIT {
        let cut: String = message.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{cut}...")
    } else {
        message.to_string()
    }
}

/// Navigation target for a folder entry: its repository path with the
/// source-folder prefix stripped
fn nav_target(repo_path: &str, source_folder: &str) -> String {
    if source_folder.is_empty() {
        return repo_path.to_string();
    }
    let prefix = format!("{}/", source_folder.trim_end_matches('/'));
    repo_path
        .strip_prefix(&prefix)
        .unwrap_or(repo_path)
        .to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Parent,
    Dir,
    File,
}

impl RowKind {
    fn icon(self) -> &'static str {
        match self {
            RowKind::Parent => "back.gif",
            RowKind::Dir => "folder.gif",
            RowKind::File => "text.gif",
        }
    }

    fn alt(self) -> &'static str {
        match self {
            RowKind::Parent => "[PARENT]",
            RowKind::Dir => "[DIR]",
            RowKind::File => "[FILE]",
        }
    }
}

/// One rendered table row
#[derive(Debug, Clone)]
pub struct Row {
    kind: RowKind,
    /// Displayed label (directory names carry a trailing `/`)
    label: String,
    /// Link target: a folder path for navigation rows, a full repository
    /// path for file rows
    target: String,
    /// Repository path this row was built from; enrichment key. The parent
    /// row has none and is never enriched.
    repo_path: Option<String>,
    modified: String,
    size: String,
    description: String,
}

impl Row {
    /// Link target of this row
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Displayed label of this row
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this row navigates (parent and directory rows) rather than
    /// opening a file in the viewer
    pub fn navigates(&self) -> bool {
        self.kind != RowKind::File
    }

    fn to_html(&self) -> String {
        let link_attr = if self.navigates() {
            "data-nav"
        } else {
            "data-open"
        };
        format!(
            "      <tr>\n        <td valign=\"top\"><img src=\"icons/{icon}\" alt=\"{alt}\" /></td>\n        <td><a href=\"#\" {link_attr}=\"{target}\">{label}</a></td>\n        <td align=\"right\">{modified}</td>\n        <td align=\"right\">{size}</td>\n        <td>{description}</td>\n      </tr>\n",
            icon = self.kind.icon(),
            alt = self.kind.alt(),
            target = self.target,
            label = self.label,
            modified = self.modified,
            size = self.size,
            description = self.description,
        )
    }
}

/// The table body of the index page for one folder
#[derive(Debug, Clone)]
pub struct Listing {
    current_path: String,
    rows: Vec<Row>,
}

impl Listing {
    /// Build the base rows for a folder, in remote order
    ///
    /// Modified and description cells start as placeholders; apply commit
    /// data afterwards with [`Listing::set_commit`].
    pub fn build(entries: &[DirectoryEntry], current_path: &str, source_folder: &str) -> Self {
        let mut rows = Vec::with_capacity(entries.len() + 1);

        if !current_path.is_empty() {
            rows.push(Row {
                kind: RowKind::Parent,
                label: "Parent Directory".to_string(),
                target: parent_of(current_path).to_string(),
                repo_path: None,
                modified: EMPTY_CELL.to_string(),
                size: EMPTY_CELL.to_string(),
                description: "&nbsp;".to_string(),
            });
        }

        for entry in entries {
            let (kind, label, target) = match entry.entry_type {
                EntryType::Dir => (
                    RowKind::Dir,
                    format!("{}/", entry.name),
                    nav_target(&entry.path, source_folder),
                ),
                EntryType::File => (RowKind::File, entry.name.clone(), entry.path.clone()),
            };

            // A reported size of 0 renders as an empty cell; the contents
            // API reports 0 for every folder.
            let size = match entry.size {
                Some(s) if s > 0 => format_size(s),
                _ => EMPTY_CELL.to_string(),
            };

            rows.push(Row {
                kind,
                label,
                target,
                repo_path: Some(entry.path.clone()),
                modified: MODIFIED_PLACEHOLDER.to_string(),
                size,
                description: DESCRIPTION_PLACEHOLDER.to_string(),
            });
        }

        Self {
            current_path: current_path.to_string(),
            rows,
        }
    }

    /// Apply a commit lookup result to the row built from `repo_path`
    ///
    /// Unknown paths are ignored, so a lookup that resolves after the
    /// listing changed cannot corrupt unrelated rows.
    pub fn set_commit(&mut self, repo_path: &str, commit: &CommitInfo) {
        if let Some(row) = self
            .rows
            .iter_mut()
            .find(|r| r.repo_path.as_deref() == Some(repo_path))
        {
            row.modified = commit.author_date.format("%Y-%m-%d").to_string();
            row.description = truncate_message(&commit.message);
        }
    }

    /// The folder path this listing was built for
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Rendered rows, parent row first when present
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Whether the listing starts with a synthetic parent row
    pub fn has_parent_row(&self) -> bool {
        self.rows.first().is_some_and(|r| r.kind == RowKind::Parent)
    }

    /// Render the rows as HTML table body content
    pub fn to_html(&self) -> String {
        self.rows.iter().map(Row::to_html).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn file(name: &str, size: u64) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            path: format!("source/{name}"),
            entry_type: EntryType::File,
            size: Some(size),
        }
    }

    fn dir(name: &str) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            path: format!("source/{name}"),
            entry_type: EntryType::Dir,
            size: Some(0),
        }
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1_048_575), "1024.00 KB");
        assert_eq!(format_size(1_048_576), "1.00 MB");
        assert_eq!(format_size(5_242_880), "5.00 MB");
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of("a/b/c"), "a/b");
        assert_eq!(parent_of("a/b"), "a");
        assert_eq!(parent_of("a"), "");
    }

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("Initial commit"), "Initial commit");
        assert_eq!(truncate_message("Exactly15Chars!"), "Exactly15Chars!");
        assert_eq!(
            truncate_message("A rather long commit message"),
            "A rather long c..."
        );
    }

    #[test]
    fn test_nav_target_strips_folder_prefix() {
        assert_eq!(nav_target("source/docs", "source"), "docs");
        assert_eq!(nav_target("source/docs/notes", "source"), "docs/notes");
        assert_eq!(nav_target("docs", ""), "docs");
        // A path outside the folder passes through untouched
        assert_eq!(nav_target("elsewhere/docs", "source"), "elsewhere/docs");
    }

    #[test]
    fn test_root_listing_has_no_parent_row() {
        let listing = Listing::build(&[file("about.html", 200)], "", "source");

        assert!(!listing.has_parent_row());
        assert_eq!(listing.rows().len(), 1);
    }

    #[test]
    fn test_nested_listing_has_parent_row() {
        let listing = Listing::build(&[], "docs/notes", "source");

        assert!(listing.has_parent_row());
        assert_eq!(listing.rows()[0].target(), "docs");
        assert_eq!(listing.rows()[0].label(), "Parent Directory");
        assert!(listing.rows()[0].navigates());
    }

    #[test]
    fn test_single_segment_path_parents_to_root() {
        let listing = Listing::build(&[], "docs", "source");

        assert_eq!(listing.rows()[0].target(), "");
    }

    #[test]
    fn test_directory_row_label_and_target() {
        let listing = Listing::build(&[dir("docs")], "", "source");
        let row = &listing.rows()[0];

        assert_eq!(row.label(), "docs/");
        assert_eq!(row.target(), "docs");
        assert!(row.navigates());
        // Folders report size 0, shown as an empty cell
        assert!(row.to_html().contains(">-</td>"));
    }

    #[test]
    fn test_file_row_keeps_full_repo_path() {
        let listing = Listing::build(&[file("about.html", 200)], "", "source");
        let row = &listing.rows()[0];

        assert_eq!(row.label(), "about.html");
        assert_eq!(row.target(), "source/about.html");
        assert!(!row.navigates());
    }

    #[test]
    fn test_set_commit_updates_matching_row() {
        let entries = [file("a.html", 200), file("b.html", 300)];
        let mut listing = Listing::build(&entries, "", "source");

        let commit = CommitInfo {
            author_date: Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap(),
            message: "Initial commit".to_string(),
        };
        listing.set_commit("source/b.html", &commit);

        let html = listing.to_html();
        assert!(html.contains("Initial commit"));
        assert!(html.contains("2024-09-01"));
        // The untouched row keeps its placeholders
        assert_eq!(
            html.matches(DESCRIPTION_PLACEHOLDER).count(),
            1,
            "only one row should still carry the placeholder"
        );
    }

    #[test]
    fn test_set_commit_ignores_unknown_path() {
        let mut listing = Listing::build(&[file("a.html", 200)], "", "source");

        let commit = CommitInfo {
            author_date: Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap(),
            message: "stray".to_string(),
        };
        listing.set_commit("source/gone.html", &commit);

        assert!(!listing.to_html().contains("stray"));
    }

    #[test]
    fn test_row_html_shape() {
        let listing = Listing::build(&[file("about.html", 200)], "", "source");
        let html = listing.to_html();

        assert!(html.contains("icons/text.gif"));
        assert!(html.contains("alt=\"[FILE]\""));
        assert!(html.contains("data-open=\"source/about.html\""));
        assert!(html.contains(">200 B</td>"));
    }
}
