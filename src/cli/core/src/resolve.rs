/* src/cli/core/src/resolve.rs */

use folio_server::{AlternateLink, Locale, LocaleRouter, alternates};

use crate::ui;

#[derive(Debug)]
pub struct Resolution<'a> {
  pub locale: &'a Locale,
  pub route: Option<String>,
  pub logical_path: String,
  pub alternates: Vec<AlternateLink>,
}

pub fn resolve<'a>(router: &'a LocaleRouter, url: &str) -> Resolution<'a> {
  Resolution {
    locale: router.detect_locale(url),
    route: router.resolve_logical_route(url),
    logical_path: router.logical_path(url),
    alternates: alternates(router, url),
  }
}

pub fn run_resolve(router: &LocaleRouter, url: &str) {
  ui::banner("resolve");
  let resolution = resolve(router, url);
  ui::arrow(url);
  ui::detail(&format!("locale        {}", resolution.locale));
  ui::detail(&format!("route         {}", resolution.route.as_deref().unwrap_or("(root)")));
  ui::detail(&format!("logical path  {}", resolution.logical_path));
  ui::blank();
  for link in &resolution.alternates {
    let marker = if link.current { " (current)" } else { "" };
    ui::detail(&format!("{:<4}{}{marker}", link.locale.as_str(), link.href));
  }
}
