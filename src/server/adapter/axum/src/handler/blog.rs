/* src/server/adapter/axum/src/handler/blog.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use folio_server::{BlogPage, Locale, parse_page_segment};

use super::AppState;
use crate::error::AxumError;

fn render(state: &AppState, locale: &Locale, page: u32) -> Result<Json<BlogPage>, AxumError> {
  let blog = state.parts.blog_page(locale, page)?;
  tracing::debug!(locale = %locale, page, total = blog.total_pages, "blog page");
  Ok(Json(blog))
}

/// `/blog`: page 1 in the default locale.
pub(super) async fn handle_index(
  State(state): State<Arc<AppState>>,
) -> Result<Json<BlogPage>, AxumError> {
  render(&state, state.parts.router.default_locale(), 1)
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  Path(page): Path<String>,
) -> Result<Json<BlogPage>, AxumError> {
  let page = parse_page_segment(&page)?;
  render(&state, state.parts.router.default_locale(), page)
}

pub(super) async fn handle_locale_index(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
) -> Result<Json<BlogPage>, AxumError> {
  let locale = state.prefixed_locale(&locale)?;
  render(&state, locale, 1)
}

pub(super) async fn handle_locale_page(
  State(state): State<Arc<AppState>>,
  Path((locale, page)): Path<(String, String)>,
) -> Result<Json<BlogPage>, AxumError> {
  let locale = state.prefixed_locale(&locale)?;
  let page = parse_page_segment(&page)?;
  render(&state, locale, page)
}
