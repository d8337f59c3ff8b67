/* src/cli/core/src/routes.rs */

use std::collections::BTreeSet;

use folio_server::{LocaleRouter, NAV_ITEMS};

use crate::ui;

/// One logical route and its path in every locale, in locale order.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteRow {
  pub route: String,
  pub untranslated: bool,
  pub paths: Vec<String>,
}

/// Every route the site knows about: navigation entries, translated
/// segments and untranslated pages.
pub fn route_rows(router: &LocaleRouter) -> Vec<RouteRow> {
  let mut routes: BTreeSet<&str> = NAV_ITEMS.iter().map(|item| item.route).collect();
  routes.extend(router.route_table().routes());
  routes.extend(router.untranslated().iter());

  routes
    .into_iter()
    .map(|route| {
      let logical = format!("/{route}");
      RouteRow {
        route: route.to_string(),
        untranslated: router.untranslated().contains(route),
        paths: router.locales().iter().map(|locale| router.localize(&logical, locale)).collect(),
      }
    })
    .collect()
}

pub fn run_routes(router: &LocaleRouter) {
  ui::banner("routes");

  let rows = route_rows(router);
  let mut head = vec!["route".to_string()];
  head.extend(router.locales().iter().map(ToString::to_string));

  let names: Vec<String> = rows
    .iter()
    .map(|row| {
      let name = if row.route.is_empty() { "(home)" } else { row.route.as_str() };
      if row.untranslated { format!("{name} *") } else { name.to_string() }
    })
    .collect();

  let mut widths: Vec<usize> = head.iter().map(String::len).collect();
  for (name, row) in names.iter().zip(&rows) {
    widths[0] = widths[0].max(name.chars().count());
    for (i, path) in row.paths.iter().enumerate() {
      widths[i + 1] = widths[i + 1].max(path.chars().count());
    }
  }

  let head: Vec<&str> = head.iter().map(String::as_str).collect();
  ui::header(&ui::columns(&head, &widths));
  for (name, row) in names.iter().zip(&rows) {
    let mut cells = vec![name.as_str()];
    cells.extend(row.paths.iter().map(String::as_str));
    ui::row(&ui::columns(&cells, &widths));
  }
  ui::blank();
  ui::detail("* default-language only");
}
