//! Error types for `stockroom-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
  #[error(
    "insufficient stock for item: {name} (requested {requested}, available {available})"
  )]
  InsufficientStock {
    name:      String,
    requested: u32,
    available: u32,
  },

  #[error("invalid price: {0} (must be a finite, non-negative number)")]
  InvalidPrice(f64),

  #[error("invalid discount: {0} (must be a fraction in [0, 1))")]
  InvalidDiscount(f64),

  #[error("invalid {field}: {value:?} (must not contain '|' or line breaks)")]
  InvalidText { field: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
