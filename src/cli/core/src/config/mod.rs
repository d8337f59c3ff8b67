/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_folio_config, load_folio_config};
pub use types::{FolioConfig, SiteSection};
