//! Error type for `stockroom-store`.

use std::io;

use stockroom_core::ItemId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("item with ID {0} already exists; choose a different ID for the new item")]
  DuplicateId(ItemId),

  #[error("item not found in inventory: ID {0}")]
  NotFound(ItemId),

  #[error("item not found in inventory: {0}")]
  NameNotFound(String),

  /// Every slot is taken. Nothing was changed.
  #[error("inventory is full ({capacity} items); cannot add more items")]
  CapacityExceeded { capacity: usize },

  #[error(transparent)]
  Core(#[from] stockroom_core::Error),

  #[error("malformed inventory file: {0}")]
  Table(#[from] stockroom_table::Error),

  #[error("error loading inventory: {0}")]
  Load(#[source] io::Error),

  /// The in-memory change was applied but could not be written out.
  #[error("error saving inventory: {0}")]
  Save(#[source] io::Error),
}

impl Error {
  /// Whether this is the stock-shortage rejection from a removal or purchase.
  pub fn is_insufficient_stock(&self) -> bool {
    matches!(self, Self::Core(stockroom_core::Error::InsufficientStock { .. }))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
