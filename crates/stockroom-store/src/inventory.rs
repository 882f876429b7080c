//! [`Inventory`], the fixed-slot record store.

use std::path::PathBuf;

use stockroom_core::{Item, ItemId};
use tracing::{debug, info, warn};

use crate::{
  Error, Result,
  storage::{FileStorage, MemoryStorage, Storage},
};

/// Maximum number of live records an inventory holds.
pub const CAPACITY: usize = 15;

// ─── Store ───────────────────────────────────────────────────────────────────

/// A bounded set of item records kept in slot order and mirrored to a
/// [`Storage`] backend.
///
/// Records occupy the first free slot at insertion time, so after removals a
/// new record may appear ahead of older ones. All scans run in slot order.
///
/// Mutations are written through: on success the whole table is re-rendered
/// and saved. A failed save is reported as [`Error::Save`] but the in-memory
/// change stays applied.
#[derive(Debug)]
pub struct Inventory<S> {
  slots:   [Option<Item>; CAPACITY],
  storage: S,
}

impl Inventory<FileStorage> {
  /// Open the inventory persisted at `path`. A missing file opens empty.
  pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
    let storage = FileStorage::new(path);
    info!(path = %storage.path().display(), "opening inventory");
    Self::load(storage)
  }
}

impl Inventory<MemoryStorage> {
  /// An empty inventory that saves into memory.
  pub fn in_memory() -> Self { Self::empty(MemoryStorage::default()) }
}

impl<S: Storage> Inventory<S> {
  /// Build an inventory from whatever `storage` last saved.
  ///
  /// Records fill slots in file order; any beyond [`CAPACITY`] are dropped.
  /// A malformed table fails the whole load.
  pub fn load(storage: S) -> Result<Self> {
    let contents = storage.load().map_err(Error::Load)?;
    let mut inventory = Self::empty(storage);

    let Some(contents) = contents else {
      debug!("no persisted inventory; starting empty");
      return Ok(inventory);
    };

    let mut dropped = 0usize;
    for item in stockroom_table::parse(&contents)? {
      match inventory.free_slot() {
        Some(slot) => inventory.slots[slot] = Some(item),
        None => dropped += 1,
      }
    }
    if dropped > 0 {
      warn!(dropped, capacity = CAPACITY, "persisted inventory over capacity; extra records ignored");
    }

    debug!(items = inventory.len(), "inventory loaded");
    Ok(inventory)
  }

  fn empty(storage: S) -> Self {
    Self {
      slots: std::array::from_fn(|_| None),
      storage,
    }
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// Number of live records.
  pub fn len(&self) -> usize { self.items().count() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  pub fn is_full(&self) -> bool { self.free_slot().is_none() }

  /// Live records in slot order.
  pub fn items(&self) -> impl Iterator<Item = &Item> { self.slots.iter().flatten() }

  /// The raw slots, empty ones included.
  pub fn slots(&self) -> &[Option<Item>] { &self.slots }

  pub fn get(&self, id: ItemId) -> Option<&Item> {
    self.items().find(|item| item.id() == id)
  }

  pub fn storage(&self) -> &S { &self.storage }

  /// First record whose name matches `name`, ignoring case.
  pub fn search_item(&self, name: &str) -> Result<&Item> {
    self
      .items()
      .find(|item| item.name_matches(name))
      .ok_or_else(|| Error::NameNotFound(name.to_string()))
  }

  /// The human-facing listing of every live record, in slot order.
  pub fn display(&self, currency: &str) -> String {
    stockroom_table::render_listing(self.items(), currency)
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  /// Place `item` in the first free slot and return that slot's index.
  pub fn add_item(&mut self, item: Item) -> Result<usize> {
    if self.get(item.id()).is_some() {
      return Err(Error::DuplicateId(item.id()));
    }
    let Some(slot) = self.free_slot() else {
      warn!(id = item.id(), "inventory full; item not added");
      return Err(Error::CapacityExceeded { capacity: CAPACITY });
    };

    debug!(id = item.id(), slot, "adding item");
    self.slots[slot] = Some(item);
    self.persist()?;
    Ok(slot)
  }

  /// Clear the slot holding `id` and return the record it held.
  pub fn remove_item(&mut self, id: ItemId) -> Result<Item> {
    let removed = self
      .slots
      .iter_mut()
      .find(|slot| slot.as_ref().is_some_and(|item| item.id() == id))
      .and_then(Option::take)
      .ok_or(Error::NotFound(id))?;

    debug!(id, "removed item");
    self.persist()?;
    Ok(removed)
  }

  /// Overwrite the list price of `id`. Any discount is kept.
  pub fn edit_price(&mut self, id: ItemId, price: f64) -> Result<Item> {
    self.update(id, |item| Ok(item.set_price(price)?))
  }

  pub fn add_stock(&mut self, id: ItemId, quantity: u32) -> Result<Item> {
    self.update(id, |item| {
      item.add_stock(quantity);
      Ok(())
    })
  }

  /// Take `quantity` units off `id`. Fails without saving if fewer are on
  /// hand.
  pub fn remove_stock(&mut self, id: ItemId, quantity: u32) -> Result<Item> {
    self.update(id, |item| Ok(item.remove_stock(quantity)?))
  }

  /// Purchase `quantity` units of the first record named `name`.
  pub fn request_item(&mut self, name: &str, quantity: u32) -> Result<Item> {
    let item = self
      .slots
      .iter_mut()
      .flatten()
      .find(|item| item.name_matches(name))
      .ok_or_else(|| Error::NameNotFound(name.to_string()))?;

    item.remove_stock(quantity)?;
    let purchased = item.clone();
    debug!(id = purchased.id(), quantity, "item purchased");
    self.persist()?;
    Ok(purchased)
  }

  // ── Internals ─────────────────────────────────────────────────────────────

  fn free_slot(&self) -> Option<usize> { self.slots.iter().position(Option::is_none) }

  /// Apply `change` to the record `id` and persist if it succeeds.
  fn update(
    &mut self,
    id: ItemId,
    change: impl FnOnce(&mut Item) -> Result<()>,
  ) -> Result<Item> {
    let item = self
      .slots
      .iter_mut()
      .flatten()
      .find(|item| item.id() == id)
      .ok_or(Error::NotFound(id))?;

    change(item)?;
    let updated = item.clone();
    self.persist()?;
    Ok(updated)
  }

  /// Rewrite the persisted table from the live records.
  fn persist(&mut self) -> Result<()> {
    let table = stockroom_table::render(self.items());
    if let Err(e) = self.storage.save(&table) {
      warn!(error = %e, "failed to save inventory; in-memory changes kept");
      return Err(Error::Save(e));
    }
    debug!(items = self.len(), "inventory saved");
    Ok(())
  }
}
