/* src/server/core/rust/src/server.rs */

use crate::config::I18nConfig;
use crate::errors::FolioError;
use crate::messages::Messages;
use crate::paginate::Paginator;
use crate::posts::PostList;
use crate::router::LocaleRouter;

/// Fixed blog page size.
pub const POSTS_PER_PAGE: u32 = 10;

/// Validated, immutable parts extracted from `FolioServer`.
/// Adapter crates consume this to build framework-specific routers.
#[derive(Debug, Clone)]
pub struct FolioParts {
  pub router: LocaleRouter,
  pub paginator: Paginator,
  pub posts: PostList,
  pub messages: Messages,
}

pub struct FolioServer {
  i18n: I18nConfig,
  posts_per_page: u32,
  posts: PostList,
  messages: Option<Messages>,
}

impl FolioServer {
  pub fn new() -> Self {
    Self {
      i18n: I18nConfig::default(),
      posts_per_page: POSTS_PER_PAGE,
      posts: PostList::default(),
      messages: None,
    }
  }

  pub fn i18n_config(mut self, config: I18nConfig) -> Self {
    self.i18n = config;
    self
  }

  pub fn posts_per_page(mut self, size: u32) -> Self {
    self.posts_per_page = size;
    self
  }

  pub fn posts(mut self, posts: PostList) -> Self {
    self.posts = posts;
    self
  }

  pub fn messages(mut self, messages: Messages) -> Self {
    self.messages = Some(messages);
    self
  }

  /// Validate configuration and consume the builder.
  /// Without explicit messages the built-in navigation labels are used.
  pub fn into_parts(self) -> Result<FolioParts, FolioError> {
    let router = LocaleRouter::new(&self.i18n)?;
    let paginator = Paginator::new(self.posts_per_page)?;
    let messages = self.messages.unwrap_or_else(|| Messages::builtin(router.locales()));
    Ok(FolioParts { router, paginator, posts: self.posts, messages })
  }
}

impl Default for FolioServer {
  fn default() -> Self {
    Self::new()
  }
}
