/* src/cli/core/src/ui.rs */

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn ok(msg: &str) {
  println!("  {GREEN}\u{2713}{RESET} {msg}");
}

pub fn fail(msg: &str) {
  eprintln!("  {RED}\u{2717}{RESET} {msg}");
}

pub fn warn(msg: &str) {
  eprintln!("  {YELLOW}!{RESET} {msg}");
}

pub fn arrow(msg: &str) {
  println!("  {GREEN}\u{2192}{RESET} {msg}");
}

pub fn detail(msg: &str) {
  println!("        {msg}");
}

pub fn banner(cmd: &str) {
  println!();
  println!("  {BOLD}folio{RESET} {cmd} {DIM}v{VERSION}{RESET}");
  println!();
}

/// Header row of a table, highlighted.
pub fn header(msg: &str) {
  println!("  {CYAN}{msg}{RESET}");
}

pub fn row(msg: &str) {
  println!("  {msg}");
}

pub fn blank() {
  println!();
}

/// Left-align `cells` in columns of the given widths.
pub fn columns(cells: &[&str], widths: &[usize]) -> String {
  let mut out = String::new();
  for (i, cell) in cells.iter().enumerate() {
    let width = widths.get(i).copied().unwrap_or(0);
    if i + 1 == cells.len() {
      out.push_str(cell);
    } else {
      out.push_str(&format!("{cell:<width$}  "));
    }
  }
  out
}
