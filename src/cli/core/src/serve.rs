/* src/cli/core/src/serve.rs */

use std::path::Path;

use anyhow::{Context, Result};
use folio_server::FolioParts;
use folio_server_axum::IntoAxumRouter;
use tower_http::services::ServeDir;

use crate::config::SiteSection;
use crate::ui;

/// Site router, with `static_dir` (if any) serving everything the
/// `/_folio/` endpoints do not.
pub fn site_router(parts: FolioParts, static_dir: Option<&Path>) -> axum::Router {
  let router = parts.into_axum_router();
  match static_dir {
    Some(dir) => router.fallback_service(ServeDir::new(dir)),
    None => router,
  }
}

pub async fn run_serve(
  site: &SiteSection,
  parts: FolioParts,
  port: u16,
  static_dir: Option<&Path>,
) -> Result<()> {
  ui::banner("serve");
  if let Some(name) = site.title.as_ref().or(site.name.as_ref()) {
    match &site.url {
      Some(url) => ui::arrow(&format!("{name} ({url})")),
      None => ui::arrow(name),
    }
  }

  let static_dir = match static_dir {
    Some(dir) if dir.is_dir() => Some(dir),
    Some(dir) => {
      ui::warn(&format!("static dir {} not found, serving API only", dir.display()));
      None
    }
    None => None,
  };

  ui::arrow(&format!("{} posts, {} locales", parts.posts.len(), parts.router.locales().len()));
  if let Some(dir) = static_dir {
    ui::arrow(&format!("static files from {}", dir.display()));
  }

  let router = site_router(parts, static_dir);
  let addr = format!("0.0.0.0:{port}");
  let listener =
    tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
  ui::ok(&format!("listening on http://localhost:{port}"));
  tracing::info!(%addr, "folio server started");
  axum::serve(listener, router).await.context("server error")?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use axum::body::Body;
  use axum::http::{Request, StatusCode};
  use folio_server::FolioServer;
  use tower::ServiceExt;

  use super::*;

  #[tokio::test]
  async fn static_fallback_serves_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>folio</h1>").unwrap();
    let parts = FolioServer::new().into_parts().unwrap();
    let app = site_router(parts, Some(dir.path()));

    let req = Request::builder().uri("/index.html").body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::builder().uri("/_folio/blog").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn api_only_without_static_dir() {
    let parts = FolioServer::new().into_parts().unwrap();
    let app = site_router(parts, None);
    let req = Request::builder().uri("/index.html").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }
}
