/* src/server/core/rust/src/lib.rs */

pub mod blog;
pub mod config;
pub mod errors;
pub mod locale;
pub mod messages;
pub mod nav;
pub mod paginate;
pub mod posts;
pub mod router;
pub mod routes;
pub mod server;

// Re-exports for ergonomic use
pub use blog::{BlogPage, EXCERPT_LENGTH, PostSummary};
pub use config::I18nConfig;
pub use errors::FolioError;
pub use locale::{Locale, LocaleSet};
pub use messages::{Messages, ResolvedMessages};
pub use nav::{AlternateLink, MenuLink, NAV_ITEMS, NavItem, alternates, menu};
pub use paginate::{
  NavState, Page, PageLink, PageState, Paginator, items_for_page, nav_state, page_count, page_href,
  parse_page_segment,
};
pub use posts::{Post, PostList, display_date, excerpt};
pub use router::LocaleRouter;
pub use routes::{RouteTable, UntranslatedPages};
pub use server::{FolioParts, FolioServer, POSTS_PER_PAGE};
