/* src/server/core/rust/src/blog.rs */

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::FolioError;
use crate::locale::Locale;
use crate::paginate::{PageLink, PageState, page_href};
use crate::posts::{Post, display_date, excerpt};
use crate::server::FolioParts;

pub const EXCERPT_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
  pub slug: String,
  pub title: String,
  pub published: DateTime<Utc>,
  /// Tokyo-time long date, e.g. `2024年1月1日`.
  pub published_display: String,
  pub excerpt: Option<String>,
  pub tags: Vec<String>,
  pub href: String,
}

/// Everything the presentation layer needs for one blog list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPage {
  pub locale: Locale,
  pub current_page: u32,
  pub total_pages: u32,
  pub state: PageState,
  pub href: String,
  pub posts: Vec<PostSummary>,
  pub previous: PageLink,
  pub next: PageLink,
  pub previous_href: Option<String>,
  pub next_href: Option<String>,
}

impl FolioParts {
  /// Localized base route of the blog list (`/blog`, `/ja/blog`).
  pub fn blog_base(&self, locale: &Locale) -> String {
    self.router.localize("/blog", locale)
  }

  /// Page `page` of the blog in `locale`. Out-of-range pages are errors.
  pub fn blog_page(&self, locale: &Locale, page: u32) -> Result<BlogPage, FolioError> {
    let resolved = self.paginator.paginate(self.posts.as_slice(), page)?;
    let base = self.blog_base(locale);
    let href_for = |link: PageLink| link.page().map(|n| page_href(&base, n));

    Ok(BlogPage {
      locale: locale.clone(),
      current_page: resolved.number,
      total_pages: resolved.total_pages,
      state: resolved.state,
      href: page_href(&base, resolved.number),
      posts: resolved.items.iter().map(|post| self.summarize(post, locale)).collect(),
      previous: resolved.nav.previous,
      next: resolved.nav.next,
      previous_href: href_for(resolved.nav.previous),
      next_href: href_for(resolved.nav.next),
    })
  }

  fn summarize(&self, post: &Post, locale: &Locale) -> PostSummary {
    PostSummary {
      slug: post.slug.clone(),
      title: post.title.clone(),
      published: post.published,
      published_display: display_date(post.published),
      excerpt: post.description.as_deref().map(|d| excerpt(d, EXCERPT_LENGTH)),
      tags: post.tags.clone(),
      href: self.router.localize(&post.path(), locale),
    }
  }
}
