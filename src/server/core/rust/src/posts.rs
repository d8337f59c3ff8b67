/* src/server/core/rust/src/posts.rs */

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::FolioError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
  /// Stable identifier; also the URL segment under `/blog`.
  pub slug: String,
  pub title: String,
  pub published: DateTime<Utc>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default, skip_serializing)]
  pub draft: bool,
}

impl Post {
  /// Logical (default-locale) path of the post.
  pub fn path(&self) -> String {
    format!("/blog/{}", self.slug)
  }
}

/// Published posts, most recent first. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostList(Vec<Post>);

impl PostList {
  /// Drop drafts and order by publish time, newest first; ties by slug.
  pub fn new(posts: Vec<Post>) -> Self {
    let mut posts: Vec<Post> = posts.into_iter().filter(|p| !p.draft).collect();
    posts.sort_by(|a, b| b.published.cmp(&a.published).then_with(|| a.slug.cmp(&b.slug)));
    Self(posts)
  }

  pub fn from_json(content: &str) -> Result<Self, FolioError> {
    let posts: Vec<Post> = serde_json::from_str(content)?;
    Ok(Self::new(posts))
  }

  pub fn as_slice(&self) -> &[Post] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Post> {
    self.0.iter()
  }

  pub fn get(&self, slug: &str) -> Option<&Post> {
    self.0.iter().find(|p| p.slug == slug)
  }
}

/// At most `max` characters; longer text is cut to `max - 3` and ends in `...`.
pub fn excerpt(text: &str, max: usize) -> String {
  if text.chars().count() <= max {
    return text.to_string();
  }
  let mut out: String = text.chars().take(max.saturating_sub(3)).collect();
  out.push_str("...");
  out
}

/// Japan Standard Time, UTC+9 with no daylight saving.
const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Publish date as shown on the site: the Tokyo calendar day, long form
/// (`2024年1月1日`).
pub fn display_date(published: DateTime<Utc>) -> String {
  let local = match FixedOffset::east_opt(JST_OFFSET_SECS) {
    Some(jst) => published.with_timezone(&jst).date_naive(),
    None => published.date_naive(),
  };
  local.format("%Y年%-m月%-d日").to_string()
}
