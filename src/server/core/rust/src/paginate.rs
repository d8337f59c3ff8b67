/* src/server/core/rust/src/paginate.rs */

use std::num::NonZeroU32;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::errors::FolioError;

/// One side (previous or next) of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PageLink {
  Enabled { page: u32 },
  Disabled,
  /// No control rendered at all (single page).
  Absent,
}

impl PageLink {
  pub fn page(self) -> Option<u32> {
    match self {
      Self::Enabled { page } => Some(page),
      Self::Disabled | Self::Absent => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavState {
  pub previous: PageLink,
  pub next: PageLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageState {
  NoPagination,
  FirstPage,
  MiddlePage,
  LastPage,
}

impl PageState {
  pub fn of(page: u32, total_pages: u32) -> Self {
    if total_pages <= 1 {
      Self::NoPagination
    } else if page <= 1 {
      Self::FirstPage
    } else if page >= total_pages {
      Self::LastPage
    } else {
      Self::MiddlePage
    }
  }
}

/// `max(1, ceil(total_items / page_size))`: an empty list still has one page.
pub fn page_count(total_items: usize, page_size: NonZeroU32) -> u32 {
  let pages = total_items.div_ceil(page_size.get() as usize).max(1);
  u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Items on the 1-based `page`, in list order.
pub fn items_for_page<T>(items: &[T], page_size: NonZeroU32, page: u32) -> Result<&[T], FolioError> {
  let count = page_count(items.len(), page_size);
  if page < 1 || page > count {
    return Err(FolioError::PageOutOfRange { page, page_count: count });
  }
  let size = page_size.get() as usize;
  let start = (page as usize - 1) * size;
  let end = (start + size).min(items.len());
  Ok(&items[start..end])
}

pub fn nav_state(page: u32, total_pages: u32) -> NavState {
  if total_pages <= 1 {
    return NavState { previous: PageLink::Absent, next: PageLink::Absent };
  }
  let previous = if page <= 1 { PageLink::Disabled } else { PageLink::Enabled { page: page - 1 } };
  let next =
    if page >= total_pages { PageLink::Disabled } else { PageLink::Enabled { page: page + 1 } };
  NavState { previous, next }
}

/// Page 1 is the list route itself; page n lives at `{base}/{n}`.
pub fn page_href(base: &str, page: u32) -> String {
  let base = base.trim_end_matches('/');
  match (base.is_empty(), page <= 1) {
    (true, true) => "/".to_string(),
    (_, true) => base.to_string(),
    (_, false) => format!("{base}/{page}"),
  }
}

/// Parse a page-number path segment. Digits only: signs, whitespace and
/// overflow are rejected; `0` parses and is later reported out of range.
pub fn parse_page_segment(segment: &str) -> Result<u32, FolioError> {
  if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
    return Err(FolioError::InvalidPage(segment.to_string()));
  }
  segment.parse().map_err(|_| FolioError::InvalidPage(segment.to_string()))
}

/// A resolved page of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
  pub number: u32,
  pub total_pages: u32,
  pub items: &'a [T],
  pub nav: NavState,
  pub state: PageState,
}

/// Fixed-size paginator over ordered lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
  page_size: NonZeroU32,
}

impl Paginator {
  pub fn new(page_size: u32) -> Result<Self, FolioError> {
    let page_size =
      NonZeroU32::new(page_size).ok_or_else(|| FolioError::config("page size must be positive"))?;
    Ok(Self { page_size })
  }

  pub fn page_size(&self) -> u32 {
    self.page_size.get()
  }

  pub fn page_count(&self, total_items: usize) -> u32 {
    page_count(total_items, self.page_size)
  }

  /// Every valid page number for a list of `total_items`.
  pub fn pages(&self, total_items: usize) -> RangeInclusive<u32> {
    1..=self.page_count(total_items)
  }

  pub fn items_for_page<'a, T>(&self, items: &'a [T], page: u32) -> Result<&'a [T], FolioError> {
    items_for_page(items, self.page_size, page)
  }

  pub fn paginate<'a, T>(&self, items: &'a [T], page: u32) -> Result<Page<'a, T>, FolioError> {
    let slice = self.items_for_page(items, page)?;
    let total_pages = self.page_count(items.len());
    Ok(Page {
      number: page,
      total_pages,
      items: slice,
      nav: nav_state(page, total_pages),
      state: PageState::of(page, total_pages),
    })
  }
}
