/* src/server/core/rust/src/router.rs */

use crate::config::I18nConfig;
use crate::errors::FolioError;
use crate::locale::{Locale, LocaleSet};
use crate::routes::{RouteTable, UntranslatedPages};

/// A path broken into its locale prefix, remaining segments and any
/// query/fragment suffix.
struct SplitPath<'s, 'p> {
  locale: Option<&'s Locale>,
  segments: Vec<&'p str>,
  suffix: &'p str,
}

/// Maps paths to and from their localized variants.
///
/// Rules:
/// - the default locale is unprefixed unless `show_default_prefix` is set
/// - untranslated pages always live at their default-locale path
/// - a non-default locale may rename the first segment through the route table
#[derive(Debug, Clone)]
pub struct LocaleRouter {
  locales: LocaleSet,
  routes: RouteTable,
  untranslated: UntranslatedPages,
  show_default_prefix: bool,
}

impl LocaleRouter {
  pub fn new(config: &I18nConfig) -> Result<Self, FolioError> {
    let locales = LocaleSet::new(config.locales.iter().cloned(), &config.default)?;
    let untranslated = UntranslatedPages::new(config.untranslated.iter().cloned());
    let routes = RouteTable::new(&config.routes, &locales, &untranslated)?;
    Ok(Self { locales, routes, untranslated, show_default_prefix: config.show_default_prefix })
  }

  pub fn locales(&self) -> &LocaleSet {
    &self.locales
  }

  pub fn locale(&self, tag: &str) -> Option<&Locale> {
    self.locales.get(tag)
  }

  pub fn default_locale(&self) -> &Locale {
    self.locales.default_locale()
  }

  pub fn route_table(&self) -> &RouteTable {
    &self.routes
  }

  pub fn untranslated(&self) -> &UntranslatedPages {
    &self.untranslated
  }

  pub fn shows_default_prefix(&self) -> bool {
    self.show_default_prefix
  }

  /// Locale named by the first path segment; unknown or missing prefixes
  /// resolve to the default locale.
  pub fn detect_locale(&self, path: &str) -> &Locale {
    self.split(path).locale.unwrap_or_else(|| self.locales.default_locale())
  }

  /// Path of the page at `path` as seen from `target`.
  ///
  /// Any existing prefix is stripped first; a localized first segment is read
  /// back to its logical name under the locale it came from, so both `/about`
  /// and `/es/sobre-mi` localize the same way.
  pub fn localize(&self, path: &str, target: &Locale) -> String {
    let split = self.split_logical(path);
    let mut segments = split.segments;

    let route_name = segments.first().copied().unwrap_or("");
    if self.untranslated.contains(route_name) {
      return join(None, &segments, split.suffix);
    }
    if self.locales.is_default(target) && !self.show_default_prefix {
      return join(None, &segments, split.suffix);
    }

    if let Some(first) = segments.first_mut()
      && let Some(localized) = self.routes.segment(target, *first)
    {
      *first = localized;
    }
    join(Some(target), &segments, split.suffix)
  }

  /// Logical route name for the final segment of `url`.
  ///
  /// Returns `None` only when the path has no segment past its locale prefix
  /// (site root). A reverse-lookup miss yields the raw token.
  pub fn resolve_logical_route(&self, url: &str) -> Option<String> {
    let split = self.split(url);
    let token = *split.segments.last()?;
    let current = split.locale.unwrap_or_else(|| self.locales.default_locale());
    if self.locales.is_default(current) {
      return Some(token.to_string());
    }
    Some(self.routes.reverse(current, token).unwrap_or(token).to_string())
  }

  /// Re-prefix `pathname` for `locale` without touching its segments.
  pub fn to_display_path(&self, pathname: &str, locale: &Locale) -> String {
    let split = self.split(pathname);
    let prefix = (!self.locales.is_default(locale) || self.show_default_prefix).then_some(locale);
    join(prefix, &split.segments, split.suffix)
  }

  /// Default-language form of `path`: prefix stripped, first segment read
  /// back to its logical route name.
  pub fn logical_path(&self, path: &str) -> String {
    let split = self.split_logical(path);
    join(None, &split.segments, split.suffix)
  }

  fn split_logical<'a>(&'a self, path: &'a str) -> SplitPath<'a, 'a> {
    let mut split = self.split(path);
    if let (Some(source), Some(first)) = (split.locale, split.segments.first_mut())
      && let Some(logical) = self.routes.reverse(source, *first)
    {
      *first = logical;
    }
    split
  }

  fn split<'s, 'p>(&'s self, path: &'p str) -> SplitPath<'s, 'p> {
    let path = strip_origin(path);
    let (path, suffix) = match path.find(['?', '#']) {
      Some(idx) => path.split_at(idx),
      None => (path, ""),
    };
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let locale = segments.first().and_then(|first| self.locales.get(first));
    if locale.is_some() {
      segments.remove(0);
    }
    SplitPath { locale, segments, suffix }
  }
}

/// `https://host/ja/about` -> `/ja/about`; plain paths pass through.
fn strip_origin(url: &str) -> &str {
  let Some(idx) = url.find("://") else {
    return url;
  };
  let scheme = &url[..idx];
  let is_scheme =
    !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c));
  if !is_scheme {
    return url;
  }
  let rest = &url[idx + 3..];
  match rest.find(['/', '?', '#']) {
    Some(i) => &rest[i..],
    None => "/",
  }
}

fn join(prefix: Option<&Locale>, segments: &[&str], suffix: &str) -> String {
  let mut out = String::new();
  if let Some(locale) = prefix {
    out.push('/');
    out.push_str(locale.as_str());
  }
  for segment in segments {
    out.push('/');
    out.push_str(segment);
  }
  if out.is_empty() {
    out.push('/');
  }
  out.push_str(suffix);
  out
}

#[cfg(test)]
mod tests;
