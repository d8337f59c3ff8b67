/* src/cli/core/src/config/tests/mod.rs */

use super::*;


fn parse(toml_str: &str) -> FolioConfig {
  toml::from_str(toml_str).unwrap()
}
