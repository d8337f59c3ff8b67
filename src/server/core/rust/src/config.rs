/* src/server/core/rust/src/config.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Routing configuration consumed by [`crate::LocaleRouter`].
/// Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nConfig {
  pub locales: Vec<String>,
  #[serde(default = "default_locale")]
  pub default: String,
  /// Prefix default-locale paths too (`/en/about` instead of `/about`).
  #[serde(default)]
  pub show_default_prefix: bool,
  /// Logical routes that only exist in the default locale.
  #[serde(default)]
  pub untranslated: Vec<String>,
  /// locale -> logical route -> localized segment, non-default locales only.
  #[serde(default)]
  pub routes: BTreeMap<String, BTreeMap<String, String>>,
}

fn default_locale() -> String {
  "en".to_string()
}

impl Default for I18nConfig {
  fn default() -> Self {
    let translated = ["about", "projects", "resume", "blog"];
    let table: BTreeMap<String, String> =
      translated.iter().map(|r| (r.to_string(), r.to_string())).collect();
    Self {
      locales: vec!["en".into(), "ja".into(), "es".into()],
      default: default_locale(),
      show_default_prefix: false,
      untranslated: ["papers", "privacy", "travel", "cover-letter"]
        .iter()
        .map(ToString::to_string)
        .collect(),
      routes: BTreeMap::from([("ja".to_string(), table.clone()), ("es".to_string(), table)]),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_minimal() {
    let config: I18nConfig = serde_json::from_str(r#"{ "locales": ["en", "ja"] }"#).unwrap();
    assert_eq!(config.default, "en");
    assert!(!config.show_default_prefix);
    assert!(config.untranslated.is_empty());
    assert!(config.routes.is_empty());
  }

  #[test]
  fn default_matches_site_layout() {
    let config = I18nConfig::default();
    assert_eq!(config.locales, ["en", "ja", "es"]);
    assert_eq!(config.routes["ja"]["blog"], "blog");
    assert!(config.untranslated.iter().any(|r| r == "papers"));
  }
}
