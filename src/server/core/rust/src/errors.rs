/* src/server/core/rust/src/errors.rs */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
  /// Requested page lies outside `1..=page_count`. Never clamped.
  #[error("page {page} is out of range (1..={page_count})")]
  PageOutOfRange { page: u32, page_count: u32 },

  #[error("not a page number: \"{0}\"")]
  InvalidPage(String),

  #[error("unknown locale \"{0}\"")]
  UnknownLocale(String),

  #[error("invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("failed to parse posts: {0}")]
  Posts(#[from] serde_json::Error),
}

impl FolioError {
  pub fn config(msg: impl Into<String>) -> Self {
    Self::InvalidConfig(msg.into())
  }

  pub fn code(&self) -> &'static str {
    match self {
      Self::PageOutOfRange { .. } | Self::InvalidPage(_) | Self::UnknownLocale(_) => "NOT_FOUND",
      Self::InvalidConfig(_) | Self::Posts(_) => "INTERNAL_ERROR",
    }
  }

  pub fn status(&self) -> u16 {
    match self.code() {
      "NOT_FOUND" => 404,
      _ => 500,
    }
  }

  pub fn is_not_found(&self) -> bool {
    self.status() == 404
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn out_of_range_maps_to_not_found() {
    let err = FolioError::PageOutOfRange { page: 4, page_count: 3 };
    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.status(), 404);
    assert!(err.is_not_found());
  }

  #[test]
  fn config_errors_are_internal() {
    let err = FolioError::config("locales must not be empty");
    assert_eq!(err.code(), "INTERNAL_ERROR");
    assert_eq!(err.status(), 500);
    assert!(!err.is_not_found());
  }

  #[test]
  fn display_format() {
    let err = FolioError::PageOutOfRange { page: 0, page_count: 3 };
    assert_eq!(err.to_string(), "page 0 is out of range (1..=3)");
    assert_eq!(FolioError::UnknownLocale("fr".into()).to_string(), "unknown locale \"fr\"");
  }
}
