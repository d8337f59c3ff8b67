/* src/server/core/rust/src/messages.rs */

use std::collections::{BTreeMap, BTreeSet};

use crate::locale::{Locale, LocaleSet};

/// Translated UI strings, keyed by locale tag then message key.
#[derive(Debug, Clone, Default)]
pub struct Messages {
  default: String,
  tables: BTreeMap<String, BTreeMap<String, String>>,
}

/// Fully populated tables plus the keys that had no value anywhere.
#[derive(Debug, Clone, Default)]
pub struct ResolvedMessages {
  pub tables: BTreeMap<String, BTreeMap<String, String>>,
  pub missing: BTreeSet<String>,
}

impl Messages {
  pub fn new(default: &Locale) -> Self {
    Self { default: default.to_string(), tables: BTreeMap::new() }
  }

  /// Built-in navigation labels for the `en`/`ja`/`es` site.
  pub fn builtin(locales: &LocaleSet) -> Self {
    let mut messages = Self::new(locales.default_locale());
    for (tag, table) in BUILTIN {
      if let Some(locale) = locales.get(tag) {
        messages.extend(locale, table.iter().map(|(k, v)| (k.to_string(), v.to_string())));
      }
    }
    messages
  }

  pub fn extend<I>(&mut self, locale: &Locale, entries: I)
  where
    I: IntoIterator<Item = (String, String)>,
  {
    self.tables.entry(locale.to_string()).or_default().extend(entries);
  }

  /// Lookup order: target locale, then the default locale, then the key itself.
  /// Empty strings count as missing.
  pub fn t<'a>(&'a self, locale: &Locale, key: &'a str) -> &'a str {
    self
      .get_non_empty(locale.as_str(), key)
      .or_else(|| self.get_non_empty(&self.default, key))
      .unwrap_or(key)
  }

  /// Resolve every known key for every locale in `locales`.
  pub fn resolve_all(&self, locales: &LocaleSet) -> ResolvedMessages {
    let keys: BTreeSet<&str> =
      self.tables.values().flat_map(|table| table.keys().map(String::as_str)).collect();

    let mut resolved = ResolvedMessages::default();
    for locale in locales.iter() {
      let mut table = BTreeMap::new();
      for key in &keys {
        let value = self.t(locale, key);
        if value == *key && self.get_non_empty(&self.default, key).is_none() {
          resolved.missing.insert(key.to_string());
        }
        table.insert(key.to_string(), value.to_string());
      }
      resolved.tables.insert(locale.to_string(), table);
    }
    resolved
  }

  fn get_non_empty(&self, locale: &str, key: &str) -> Option<&str> {
    let value = self.tables.get(locale)?.get(key)?;
    if value.is_empty() { None } else { Some(value) }
  }
}

type Table = &'static [(&'static str, &'static str)];

const BUILTIN: &[(&str, Table)] = &[
  (
    "en",
    &[
      ("nav.home", "Home"),
      ("nav.about", "About"),
      ("nav.projects", "Projects"),
      ("nav.papers", "Papers"),
      ("nav.blog", "Blog"),
      ("nav.resume", "Resume"),
      ("nav.contact", "Contact"),
      ("blog.previous", "Previous"),
      ("blog.next", "Next"),
      ("blog.page", "Page"),
      ("blog.of", "of"),
    ],
  ),
  (
    "ja",
    &[
      ("nav.home", "ホーム"),
      ("nav.about", "プロフィール"),
      ("nav.projects", "プロジェクト"),
      ("nav.papers", "論文"),
      ("nav.blog", "ブログ"),
      ("nav.resume", "履歴書"),
      ("blog.previous", "前へ"),
      ("blog.next", "次へ"),
    ],
  ),
  (
    "es",
    &[
      ("nav.home", "Inicio"),
      ("nav.about", "Sobre Mí"),
      ("nav.projects", "Proyectos"),
      ("nav.papers", "Publicaciones"),
      ("nav.blog", "Blog"),
      ("nav.resume", "Currículum"),
      ("nav.contact", "Contacto"),
      ("blog.previous", "Anterior"),
      ("blog.next", "Siguiente"),
      ("blog.page", "Página"),
      ("blog.of", "de"),
    ],
  ),
];
