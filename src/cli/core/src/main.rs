/* src/cli/core/src/main.rs */

mod config;
mod pages;
mod resolve;
mod routes;
mod serve;
mod site;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::{FolioConfig, find_folio_config, load_folio_config};

#[derive(Parser)]
#[command(name = "folio", about = "Portfolio site routing and pagination tools")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Print every logical route and its path in each locale
  Routes {
    /// Path to folio.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Print the blog page plan: post ranges, hrefs, prev/next links
  Pages {
    /// Path to folio.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Posts JSON file (overrides blog.posts)
    #[arg(short, long)]
    posts: Option<PathBuf>,
  },
  /// Show the locale and logical route of a URL or path
  Resolve {
    /// URL or path, e.g. /es/sobre-mi or https://example.com/ja/blog/2
    url: String,
    /// Path to folio.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Serve the blog and navigation endpoints (plus static files)
  Serve {
    /// Path to folio.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Listen port (overrides server.port)
    #[arg(short = 'P', long)]
    port: Option<u16>,
    /// Posts JSON file (overrides blog.posts)
    #[arg(short, long)]
    posts: Option<PathBuf>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it.
/// Without any folio.toml the built-in site layout is used from cwd.
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, FolioConfig)> {
  if let Some(path) = explicit {
    let config = load_folio_config(&path)?;
    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    return Ok((base_dir, config));
  }
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  match find_folio_config(&cwd) {
    Ok(path) => {
      let config = load_folio_config(&path)?;
      let base_dir = path.parent().map_or_else(|| cwd.clone(), Path::to_path_buf);
      Ok((base_dir, config))
    }
    Err(_) => {
      ui::warn("folio.toml not found, using built-in defaults");
      Ok((cwd, FolioConfig::default()))
    }
  }
}

fn init_tracing() {
  use tracing_subscriber::layer::SubscriberExt;
  use tracing_subscriber::util::SubscriberInitExt;

  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing();

  match cli.command {
    Command::Routes { config } => {
      let (base_dir, config) = resolve_config(config)?;
      let parts = site::load_site(&config, &base_dir, None)?;
      routes::run_routes(&parts.router);
    }
    Command::Pages { config, posts } => {
      let (base_dir, config) = resolve_config(config)?;
      let parts = site::load_site(&config, &base_dir, posts.as_deref())?;
      pages::run_pages(&parts)?;
    }
    Command::Resolve { url, config } => {
      let (base_dir, config) = resolve_config(config)?;
      let parts = site::load_site(&config, &base_dir, None)?;
      resolve::run_resolve(&parts.router, &url);
    }
    Command::Serve { config, port, posts } => {
      let (base_dir, config) = resolve_config(config)?;
      let parts = site::load_site(&config, &base_dir, posts.as_deref())?;
      let port = port.unwrap_or(config.server.port);
      let static_dir = config.server.static_dir.as_ref().map(|dir| base_dir.join(dir));
      if let Err(e) = serve::run_serve(&config.site, parts, port, static_dir.as_deref()).await {
        ui::fail(&format!("{e:#}"));
        std::process::exit(1);
      }
    }
  }

  Ok(())
}
