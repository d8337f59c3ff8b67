/* src/cli/core/src/pages.rs */

use anyhow::Result;
use folio_server::{FolioParts, PageState};

use crate::ui;

/// One blog list page: which posts it shows and where it lives per locale.
#[derive(Debug, PartialEq, Eq)]
pub struct PagePlan {
  pub page: u32,
  /// 1-based inclusive post range; `None` for an empty blog.
  pub range: Option<(usize, usize)>,
  pub state: PageState,
  pub hrefs: Vec<String>,
  pub previous: Option<String>,
  pub next: Option<String>,
}

pub fn page_plan(parts: &FolioParts) -> Result<Vec<PagePlan>> {
  let default = parts.router.default_locale();
  let size = parts.paginator.page_size() as usize;
  let total = parts.posts.len();

  let mut plan = Vec::new();
  for page in parts.paginator.pages(total) {
    let blog = parts.blog_page(default, page)?;
    let first = (page as usize - 1) * size + 1;
    let range = (!blog.posts.is_empty()).then(|| (first, first + blog.posts.len() - 1));
    let mut hrefs = Vec::new();
    for locale in parts.router.locales().iter() {
      hrefs.push(parts.blog_page(locale, page)?.href);
    }
    plan.push(PagePlan {
      page,
      range,
      state: blog.state,
      hrefs,
      previous: blog.previous_href,
      next: blog.next_href,
    });
  }
  Ok(plan)
}

fn state_label(state: PageState) -> &'static str {
  match state {
    PageState::NoPagination => "single",
    PageState::FirstPage => "first",
    PageState::MiddlePage => "middle",
    PageState::LastPage => "last",
  }
}

pub fn run_pages(parts: &FolioParts) -> Result<()> {
  ui::banner("pages");
  let plan = page_plan(parts)?;
  ui::arrow(&format!(
    "{} posts, {} per page, {} page(s)",
    parts.posts.len(),
    parts.paginator.page_size(),
    plan.len()
  ));
  ui::blank();

  for entry in &plan {
    let range = match entry.range {
      Some((first, last)) => format!("posts {first}-{last}"),
      None => "no posts".to_string(),
    };
    ui::row(&format!("page {} ({}, {range})", entry.page, state_label(entry.state)));
    ui::detail(&entry.hrefs.join("  "));
    let previous = entry.previous.as_deref().unwrap_or("-");
    let next = entry.next.as_deref().unwrap_or("-");
    ui::detail(&format!("prev {previous}  next {next}"));
  }
  Ok(())
}
