use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ghindex::{Browser, BrowserConfig, GitHubSource, Result};

#[derive(Parser)]
#[command(
    name = "ghindex",
    version,
    about = "Apache-style directory index for a GitHub repository folder"
)]
struct Cli {
    /// Repository owner (user or organization)
    #[arg(long)]
    owner: Option<String>,
    /// Repository name
    #[arg(long)]
    repo: Option<String>,
    /// Branch raw content is fetched from
    #[arg(long)]
    branch: Option<String>,
    /// Folder inside the repository to index
    #[arg(long)]
    folder: Option<String>,
    /// Config file (TOML); flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Folder path to show after the root render
    #[arg(long, default_value = "")]
    path: String,
    /// Repository path of a file to open in the viewer
    #[arg(long)]
    open: Option<String>,
    /// Output file for the rendered page
    #[arg(short, long, default_value = "index.html")]
    out: PathBuf,
    /// Print the listing entries as JSON to stdout instead of writing a page
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => BrowserConfig::load(path)?,
        None => BrowserConfig::default(),
    };
    if let Some(owner) = cli.owner {
        config.owner = owner;
    }
    if let Some(repo) = cli.repo {
        config.repo = repo;
    }
    if let Some(branch) = cli.branch {
        config.branch = branch;
    }
    if let Some(folder) = cli.folder {
        config.source_folder = folder;
    }

    let source = Arc::new(GitHubSource::new(
        config.owner.clone(),
        config.repo.clone(),
        config.branch.clone(),
        config.source_folder.clone(),
    ));
    let mut browser = Browser::new(source, &config);

    if cli.json {
        let entries = browser.fetch_dir(&cli.path).await;
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    browser.bootstrap().await;
    if !cli.path.is_empty() {
        browser.navigate(&cli.path).await;
    }
    if let Some(file) = &cli.open {
        browser.load_file(file).await;
    }

    std::fs::write(&cli.out, browser.page().to_html())?;
    info!(out = %cli.out.display(), "wrote index page");

    Ok(())
}
