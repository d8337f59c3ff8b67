/* src/server/adapter/axum/src/handler/nav.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use super::AppState;

#[derive(Deserialize)]
pub(super) struct PathQuery {
  path: String,
}

/// Detected locale and logical route for a path.
pub(super) async fn handle_route(
  State(state): State<Arc<AppState>>,
  Query(query): Query<PathQuery>,
) -> Json<serde_json::Value> {
  let router = &state.parts.router;
  Json(serde_json::json!({
    "locale": router.detect_locale(&query.path),
    "route": router.resolve_logical_route(&query.path),
    "logical_path": router.logical_path(&query.path),
  }))
}

/// Header menu and language-switcher links for a path.
pub(super) async fn handle_nav(
  State(state): State<Arc<AppState>>,
  Query(query): Query<PathQuery>,
) -> Json<serde_json::Value> {
  let parts = &state.parts;
  Json(serde_json::json!({
    "locale": parts.router.detect_locale(&query.path),
    "menu": folio_server::menu(&parts.router, &parts.messages, &query.path),
    "alternates": folio_server::alternates(&parts.router, &query.path),
  }))
}
