/* src/server/adapter/axum/src/handler/mod.rs */

mod blog;
mod nav;


use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use folio_server::{FolioError, FolioParts, Locale};

pub(crate) struct AppState {
  pub parts: FolioParts,
}

impl AppState {
  /// Locale named by a URL prefix segment. The default locale is only
  /// addressable by prefix when the router shows it.
  pub(crate) fn prefixed_locale(&self, tag: &str) -> Result<&Locale, FolioError> {
    let router = &self.parts.router;
    match router.locale(tag) {
      Some(locale) if router.locales().is_default(locale) && !router.shows_default_prefix() => {
        Err(FolioError::UnknownLocale(tag.to_string()))
      }
      Some(locale) => Ok(locale),
      None => Err(FolioError::UnknownLocale(tag.to_string())),
    }
  }
}

pub(crate) fn build_router(parts: FolioParts) -> Router {
  let state = Arc::new(AppState { parts });

  // Static segments take priority over `{locale}`, so `/_folio/blog/...`
  // never reaches the prefixed handlers.
  Router::new()
    .route("/_folio/route", get(nav::handle_route))
    .route("/_folio/nav", get(nav::handle_nav))
    .route("/_folio/blog", get(blog::handle_index))
    .route("/_folio/blog/{page}", get(blog::handle_page))
    .route("/_folio/{locale}/blog", get(blog::handle_locale_index))
    .route("/_folio/{locale}/blog/{page}", get(blog::handle_locale_page))
    .with_state(state)
}
