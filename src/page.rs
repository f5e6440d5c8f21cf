//! The rendered index page
//!
//! Holds the three mutable regions of the document: the title, the listing
//! table body, and the file-viewer pane. The viewer pane is written by
//! exactly two callers, the content loader and the error reporter, and the
//! last writer wins.

/// Heading shown above every reported error
const ERROR_HEADING: &str = "Sorry, an error occurred.";

/// The two-pane index document: directory listing plus file viewer
#[derive(Debug, Clone, Default)]
pub struct Page {
    title: String,
    listing_html: String,
    viewer_html: String,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page title
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Replace the listing table body
    pub fn set_listing(&mut self, html: String) {
        self.listing_html = html;
    }

    /// Current viewer pane content
    pub fn viewer_html(&self) -> &str {
        &self.viewer_html
    }

    /// Replace the viewer pane content
    pub fn set_viewer(&mut self, html: String) {
        self.viewer_html = html;
    }

    /// Overwrite the viewer pane with an error banner
    ///
    /// Whatever the viewer showed before is discarded.
    pub fn report_error(&mut self, message: &str) {
        self.viewer_html = format!("<h1>{ERROR_HEADING}</h1><p>{message}</p>");
    }

    /// Render the full document
    pub fn to_html(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
</head>
<body>
  <h1 id="directory-title">{title}</h1>
  <table>
    <tr>
      <th></th>
      <th>Name</th>
      <th align="right">Last modified</th>
      <th align="right">Size</th>
      <th>Description</th>
    </tr>
    <tbody id="directory-listing">
{listing}    </tbody>
  </table>
  <hr />
  <div id="file-viewer">{viewer}</div>
</body>
</html>
"#,
            title = self.title,
            listing = self.listing_html,
            viewer = self.viewer_html,
        )
    }
}
