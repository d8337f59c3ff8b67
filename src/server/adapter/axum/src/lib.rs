/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

/// Re-export folio-server core for convenience
pub use folio_server;

use folio_server::FolioParts;

/// Extension trait that converts validated `FolioParts` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for FolioParts {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self)
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let port = listener.local_addr()?.port();
    tracing::info!(port, "folio backend running on http://localhost:{port}");
    axum::serve(listener, router).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use folio_server::FolioServer;

  use super::*;

  #[test]
  fn into_axum_router_builds_without_panic() {
    let parts = FolioServer::new().into_parts().unwrap();
    let _router = parts.into_axum_router();
  }
}
