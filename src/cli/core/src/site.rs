/* src/cli/core/src/site.rs */

use std::path::Path;

use anyhow::{Context, Result};
use folio_server::{FolioParts, FolioServer, LocaleRouter, LocaleSet, Messages, PostList};

use crate::config::FolioConfig;
use crate::ui;

/// Load posts and messages relative to `base_dir` and validate everything.
/// `posts_override` replaces `blog.posts` from the config.
pub fn load_site(
  config: &FolioConfig,
  base_dir: &Path,
  posts_override: Option<&Path>,
) -> Result<FolioParts> {
  let routing = &config.i18n.routing;
  let router = LocaleRouter::new(routing).context("invalid [i18n] section")?;
  let locales = router.locales();

  let posts = match posts_override {
    Some(path) => load_posts(path)?,
    None => {
      let path = base_dir.join(&config.blog.posts);
      if path.is_file() {
        load_posts(&path)?
      } else {
        ui::warn(&format!("{} not found, blog is empty", path.display()));
        PostList::default()
      }
    }
  };

  let messages = match &config.i18n.messages_dir {
    Some(dir) => load_messages(&base_dir.join(dir), locales)?,
    None => Messages::builtin(locales),
  };

  let parts = FolioServer::new()
    .i18n_config(routing.clone())
    .posts_per_page(config.blog.posts_per_page)
    .posts(posts)
    .messages(messages)
    .into_parts()
    .context("invalid site configuration")?;
  tracing::debug!(
    posts = parts.posts.len(),
    locales = parts.router.locales().len(),
    "site loaded"
  );
  Ok(parts)
}

pub fn load_posts(path: &Path) -> Result<PostList> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  PostList::from_json(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Built-in labels overlaid with `<dir>/<locale>.json` for every locale.
/// Nested objects flatten to dotted keys (`{"nav": {"blog": ..}}` -> `nav.blog`).
pub fn load_messages(dir: &Path, locales: &LocaleSet) -> Result<Messages> {
  let mut messages = Messages::builtin(locales);
  for locale in locales.iter() {
    let path = dir.join(format!("{locale}.json"));
    if !path.is_file() {
      ui::warn(&format!("no messages for {locale} ({} not found)", path.display()));
      continue;
    }
    let content = std::fs::read_to_string(&path)
      .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
      .with_context(|| format!("failed to parse {}", path.display()))?;
    let mut entries = Vec::new();
    flatten("", &value, &mut entries);
    messages.extend(locale, entries);
  }

  let resolved = messages.resolve_all(locales);
  for key in &resolved.missing {
    ui::warn(&format!("message \"{key}\" has no default-locale value"));
  }
  Ok(messages)
}

fn flatten(prefix: &str, value: &serde_json::Value, out: &mut Vec<(String, String)>) {
  match value {
    serde_json::Value::Object(map) => {
      for (key, child) in map {
        let key = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
        flatten(&key, child, out);
      }
    }
    serde_json::Value::String(s) => out.push((prefix.to_string(), s.clone())),
    serde_json::Value::Null => {}
    other => out.push((prefix.to_string(), other.to_string())),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn locales() -> LocaleSet {
    LocaleSet::new(["en", "ja"], "en").unwrap()
  }

  #[test]
  fn flatten_nested_messages() {
    let value = serde_json::json!({ "nav": { "blog": "Blog", "home": "Home" }, "count": 3 });
    let mut out = Vec::new();
    flatten("", &value, &mut out);
    out.sort();
    assert_eq!(
      out,
      [
        ("count".to_string(), "3".to_string()),
        ("nav.blog".to_string(), "Blog".to_string()),
        ("nav.home".to_string(), "Home".to_string()),
      ]
    );
  }

  #[test]
  fn message_files_override_builtin() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ja.json"), r#"{ "nav": { "blog": "日記" } }"#).unwrap();

    let locales = locales();
    let messages = load_messages(dir.path(), &locales).unwrap();
    let ja = locales.get("ja").unwrap();
    let en = locales.get("en").unwrap();
    assert_eq!(messages.t(ja, "nav.blog"), "日記");
    assert_eq!(messages.t(en, "nav.blog"), "Blog");
  }

  #[test]
  fn load_site_without_posts_file() {
    let dir = tempfile::tempdir().unwrap();
    let parts = load_site(&FolioConfig::default(), dir.path(), None).unwrap();
    assert!(parts.posts.is_empty());
    assert_eq!(parts.paginator.page_size(), 10);
  }

  #[test]
  fn load_site_reads_posts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("content")).unwrap();
    std::fs::write(
      dir.path().join("content/posts.json"),
      r#"[
        { "slug": "older", "title": "Older", "published": "2024-01-01T00:00:00Z" },
        { "slug": "newer", "title": "Newer", "published": "2024-03-01T00:00:00Z" },
        { "slug": "wip", "title": "WIP", "published": "2024-04-01T00:00:00Z", "draft": true }
      ]"#,
    )
    .unwrap();

    let parts = load_site(&FolioConfig::default(), dir.path(), None).unwrap();
    let slugs: Vec<&str> = parts.posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["newer", "older"]);
  }

  #[test]
  fn explicit_posts_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = load_site(&FolioConfig::default(), dir.path(), Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
  }
}
