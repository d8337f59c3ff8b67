/* src/cli/core/src/config/types.rs */

use anyhow::{Context, Result, bail};
use folio_server::{I18nConfig, LocaleRouter};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolioConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub i18n: I18nSection,
  #[serde(default)]
  pub blog: BlogSection,
  #[serde(default)]
  pub server: ServerSection,
}

impl FolioConfig {
  pub fn validate(&self) -> Result<()> {
    self.i18n.validate()?;
    if self.blog.posts_per_page == 0 {
      bail!("blog.posts_per_page must be positive");
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteSection {
  pub name: Option<String>,
  pub title: Option<String>,
  pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct I18nSection {
  #[serde(flatten)]
  pub routing: I18nConfig,
  /// Directory of `<locale>.json` message files.
  pub messages_dir: Option<String>,
}

impl I18nSection {
  /// Routing rules are checked by building the router itself.
  pub fn validate(&self) -> Result<()> {
    LocaleRouter::new(&self.routing).context("invalid [i18n] section")?;
    Ok(())
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogSection {
  #[serde(default = "default_posts")]
  pub posts: String,
  #[serde(default = "default_posts_per_page")]
  pub posts_per_page: u32,
}

impl Default for BlogSection {
  fn default() -> Self {
    Self { posts: default_posts(), posts_per_page: default_posts_per_page() }
  }
}

fn default_posts() -> String {
  "content/posts.json".to_string()
}

fn default_posts_per_page() -> u32 {
  folio_server::POSTS_PER_PAGE
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_port")]
  pub port: u16,
  pub static_dir: Option<String>,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { port: default_port(), static_dir: None }
  }
}

fn default_port() -> u16 {
  3000
}
