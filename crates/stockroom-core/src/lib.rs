//! Core record types for the Stockroom inventory catalog.
//!
//! This crate has no I/O. The table codec (`stockroom-table`) and the slot
//! store (`stockroom-store`) both build on the types defined here.

pub mod error;
pub mod item;

pub use error::{Error, Result};
pub use item::{COLUMN_DELIMITER, Item, ItemId, Pricing, format_amount, format_percent};
