//! Fixed-capacity inventory store for Stockroom.
//!
//! An [`Inventory`] owns fifteen record slots and a [`Storage`] backend. It
//! loads the persisted table once on open and rewrites it in full after
//! every successful mutation.

mod inventory;
mod storage;

pub mod error;

pub use error::{Error, Result};
pub use inventory::{CAPACITY, Inventory};
pub use storage::{FileStorage, MemoryStorage, Storage};
