/* src/server/core/rust/src/nav.rs */

use serde::Serialize;

use crate::locale::Locale;
use crate::messages::Messages;
use crate::router::LocaleRouter;

/// Header navigation entry. `route` is the logical route; empty for home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
  pub route: &'static str,
  pub label_key: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
  NavItem { route: "", label_key: "nav.home" },
  NavItem { route: "about", label_key: "nav.about" },
  NavItem { route: "projects", label_key: "nav.projects" },
  NavItem { route: "papers", label_key: "nav.papers" },
  NavItem { route: "blog", label_key: "nav.blog" },
  NavItem { route: "resume", label_key: "nav.resume" },
  NavItem { route: "contact", label_key: "nav.contact" },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuLink {
  pub route: String,
  pub label: String,
  pub href: String,
  pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
  pub locale: Locale,
  pub href: String,
  pub current: bool,
}

/// Header links for the locale of `current_path`, with the matching entry
/// marked active. Nested paths (`/blog/2`, `/ja/blog/my-post`) activate their
/// top-level section.
pub fn menu(router: &LocaleRouter, messages: &Messages, current_path: &str) -> Vec<MenuLink> {
  let locale = router.detect_locale(current_path);
  let section = section_of(router, current_path);
  NAV_ITEMS
    .iter()
    .map(|item| MenuLink {
      route: item.route.to_string(),
      label: messages.t(locale, item.label_key).to_string(),
      href: router.localize(&format!("/{}", item.route), locale),
      active: section.as_deref().unwrap_or("") == item.route,
    })
    .collect()
}

/// One link per supported locale to the same page (language switcher).
pub fn alternates(router: &LocaleRouter, path: &str) -> Vec<AlternateLink> {
  let current = router.detect_locale(path);
  router
    .locales()
    .iter()
    .map(|locale| AlternateLink {
      locale: locale.clone(),
      href: router.localize(path, locale),
      current: locale == current,
    })
    .collect()
}

/// Logical top-level section of a path (`None` at the root).
fn section_of(router: &LocaleRouter, path: &str) -> Option<String> {
  let logical = router.logical_path(path);
  let logical = logical.split(['?', '#']).next().unwrap_or("");
  logical.split('/').find(|s| !s.is_empty()).map(ToString::to_string)
}
