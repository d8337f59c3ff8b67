/* src/server/core/rust/src/routes.rs */

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::errors::FolioError;
use crate::locale::{Locale, LocaleSet};
use crate::nav::NAV_ITEMS;

/// Logical routes that exist only in the default locale.
#[derive(Debug, Clone, Default)]
pub struct UntranslatedPages(BTreeSet<String>);

impl UntranslatedPages {
  pub fn new<I, S>(routes: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self(routes.into_iter().map(Into::into).collect())
  }

  pub fn contains(&self, route: &str) -> bool {
    self.0.contains(route)
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.0.iter().map(String::as_str)
  }
}

/// Per-locale mapping of logical route name -> localized path segment.
/// The default locale never appears: its segment is the route name itself.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
  forward: HashMap<Locale, BTreeMap<String, String>>,
  /// locale -> localized segment -> logical route name
  inverse: HashMap<Locale, HashMap<String, String>>,
}

impl RouteTable {
  /// Build and validate a table from raw `locale -> route -> segment` entries.
  pub fn new(
    entries: &BTreeMap<String, BTreeMap<String, String>>,
    locales: &LocaleSet,
    untranslated: &UntranslatedPages,
  ) -> Result<Self, FolioError> {
    let translated: BTreeSet<&str> =
      entries.values().flat_map(|routes| routes.keys().map(String::as_str)).collect();
    // A localized segment must not look like another logical route, or the
    // prefixed path of that route would resolve to the wrong page.
    let mut known = translated.clone();
    known.extend(untranslated.iter());
    known.extend(NAV_ITEMS.iter().map(|item| item.route).filter(|r| !r.is_empty()));

    let mut forward = HashMap::new();
    let mut inverse = HashMap::new();

    for (tag, routes) in entries {
      let locale = locales.get(tag).ok_or_else(|| {
        FolioError::config(format!("route table references unknown locale \"{tag}\""))
      })?;
      if locales.is_default(locale) {
        return Err(FolioError::config(format!(
          "route table must not contain the default locale \"{tag}\""
        )));
      }

      let mut reverse = HashMap::new();
      for (route, segment) in routes {
        if untranslated.contains(route) {
          return Err(FolioError::config(format!(
            "untranslated page \"{route}\" has a translation for \"{tag}\""
          )));
        }
        if segment.is_empty() || segment.contains('/') {
          return Err(FolioError::config(format!(
            "invalid segment \"{segment}\" for route \"{route}\" in \"{tag}\""
          )));
        }
        if segment != route && known.contains(segment.as_str()) {
          return Err(FolioError::config(format!(
            "segment \"{segment}\" for route \"{route}\" in \"{tag}\" shadows route \"{segment}\""
          )));
        }
        if let Some(prev) = reverse.insert(segment.clone(), route.clone()) {
          return Err(FolioError::config(format!(
            "segment \"{segment}\" in \"{tag}\" is claimed by both \"{prev}\" and \"{route}\""
          )));
        }
      }

      if let Some(missing) = translated.iter().find(|r| !routes.contains_key(**r)) {
        return Err(FolioError::config(format!("locale \"{tag}\" is missing route \"{missing}\"")));
      }

      forward.insert(locale.clone(), routes.clone());
      inverse.insert(locale.clone(), reverse);
    }

    Ok(Self { forward, inverse })
  }

  /// Localized segment for `route`, if the locale translates it.
  pub fn segment(&self, locale: &Locale, route: &str) -> Option<&str> {
    self.forward.get(locale)?.get(route).map(String::as_str)
  }

  /// Logical route name whose localized segment is `segment`.
  pub fn reverse(&self, locale: &Locale, segment: &str) -> Option<&str> {
    self.inverse.get(locale)?.get(segment).map(String::as_str)
  }

  pub fn has_translation(&self, locale: &Locale, route: &str) -> bool {
    self.segment(locale, route).is_some()
  }

  /// Every logical route with a translation, sorted.
  pub fn routes(&self) -> BTreeSet<&str> {
    self.forward.values().flat_map(|routes| routes.keys().map(String::as_str)).collect()
  }
}
