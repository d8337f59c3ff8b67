/* src/server/core/rust/src/locale.rs */

use std::fmt;

use serde::Serialize;

use crate::errors::FolioError;

/// A supported language tag. Only obtainable from a [`LocaleSet`], so every
/// `Locale` in circulation belongs to the configured closed set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for Locale {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

/// Closed set of supported locales with exactly one default.
#[derive(Debug, Clone)]
pub struct LocaleSet {
  locales: Vec<Locale>,
  default: usize,
}

impl LocaleSet {
  pub fn new<I, S>(tags: I, default: &str) -> Result<Self, FolioError>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let mut locales: Vec<Locale> = Vec::new();
    for tag in tags {
      let tag = tag.into();
      validate_tag(&tag)?;
      if locales.iter().any(|l| l.0 == tag) {
        return Err(FolioError::config(format!("duplicate locale \"{tag}\"")));
      }
      locales.push(Locale(tag));
    }
    if locales.is_empty() {
      return Err(FolioError::config("locales must not be empty"));
    }
    let Some(default) = locales.iter().position(|l| l.0 == default) else {
      let tags: Vec<&str> = locales.iter().map(Locale::as_str).collect();
      return Err(FolioError::config(format!("default locale \"{default}\" is not in {tags:?}")));
    };
    Ok(Self { locales, default })
  }

  pub fn default_locale(&self) -> &Locale {
    &self.locales[self.default]
  }

  pub fn is_default(&self, locale: &Locale) -> bool {
    *locale == self.locales[self.default]
  }

  /// Exact, case-sensitive tag match.
  pub fn get(&self, tag: &str) -> Option<&Locale> {
    self.locales.iter().find(|l| l.0 == tag)
  }

  pub fn contains(&self, tag: &str) -> bool {
    self.get(tag).is_some()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Locale> {
    self.locales.iter()
  }

  pub fn len(&self) -> usize {
    self.locales.len()
  }

  pub fn is_empty(&self) -> bool {
    self.locales.is_empty()
  }
}

fn validate_tag(tag: &str) -> Result<(), FolioError> {
  let valid = !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
  if valid { Ok(()) } else { Err(FolioError::config(format!("invalid locale tag \"{tag}\""))) }
}
