//! Error types for the inventory table codec.

use stockroom_core::ItemId;
use thiserror::Error;

/// A persisted table that cannot be turned back into records.
#[derive(Debug, Error)]
pub enum Error {
  #[error("table has no \"Current Inventory:\" header line")]
  MissingHeader,

  #[error("line {line}: expected 6 columns, found {found}")]
  FieldCount { line: usize, found: usize },

  #[error("line {line}: invalid {column}: {value:?}")]
  InvalidNumber {
    line:   usize,
    column: &'static str,
    value:  String,
  },

  #[error("line {line}: {source}")]
  InvalidRecord {
    line:   usize,
    source: stockroom_core::Error,
  },

  #[error("line {line}: duplicate item ID {id}")]
  DuplicateId { line: usize, id: ItemId },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
