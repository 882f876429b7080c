//! Fixed-width text table codec for Stockroom inventories.
//!
//! Converts between the persisted table and [`stockroom_core::Item`]
//! records, and renders the console listing. Pure synchronous; no file I/O.
//!
//! # Quick start
//!
//! ```no_run
//! use stockroom_core::Item;
//!
//! let widget = Item::new(1, "Acme", "Widget", 9.5, 100, 0.0).unwrap();
//! let table = stockroom_table::render([&widget]);
//! let items = stockroom_table::parse(&table).unwrap();
//! assert_eq!(items, vec![widget]);
//! ```

pub mod error;
mod listing;
mod parse;
mod render;

pub use error::{Error, Result};
use stockroom_core::Item;

// ─── Public API ──────────────────────────────────────────────────────────────

/// Render `items`, in order, as the persisted inventory table.
pub fn render<'a>(items: impl IntoIterator<Item = &'a Item>) -> String {
  render::render_table(items)
}

/// Parse a persisted inventory table back into records, in file order.
///
/// Everything before the `Current Inventory:` marker is ignored. Empty input
/// yields no records. The first malformed record aborts the parse.
pub fn parse(input: &str) -> Result<Vec<Item>> { parse::parse_table(input) }

/// Render `items` as the human-facing inventory listing, labelling prices
/// with `currency`.
pub fn render_listing<'a>(
  items: impl IntoIterator<Item = &'a Item>,
  currency: &str,
) -> String {
  listing::render_listing(items, currency)
}

// ─── Round-trip test ─────────────────────────────────────────────────────────
