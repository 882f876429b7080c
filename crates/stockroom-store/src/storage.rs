//! Backends holding the persisted inventory table.

use std::{
  fs::{self, File},
  io::{self, BufWriter, Write as _},
  path::{Path, PathBuf},
};

/// Where an [`Inventory`](crate::Inventory) reads its table from and writes
/// it back to.
///
/// Every call is self-contained: nothing stays open between calls.
pub trait Storage {
  /// Return the persisted table, or `None` if nothing has been saved yet.
  fn load(&self) -> io::Result<Option<String>>;

  /// Replace the persisted table with `contents`.
  fn save(&mut self, contents: &str) -> io::Result<()>;
}

// ─── File ────────────────────────────────────────────────────────────────────

/// A table kept in a single text file.
#[derive(Debug, Clone)]
pub struct FileStorage {
  path: PathBuf,
}

impl FileStorage {
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  pub fn path(&self) -> &Path { &self.path }
}

impl Storage for FileStorage {
  fn load(&self) -> io::Result<Option<String>> {
    match fs::read_to_string(&self.path) {
      Ok(contents) => Ok(Some(contents)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e),
    }
  }

  fn save(&mut self, contents: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(&self.path)?);
    writer.write_all(contents.as_bytes())?;
    writer.flush()
  }
}

// ─── Memory ──────────────────────────────────────────────────────────────────

/// A table held in memory, for tests and tooling.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
  contents: Option<String>,
  saves:    usize,
}

impl MemoryStorage {
  /// Start with `contents` as if it had been saved earlier.
  pub fn with_contents(contents: impl Into<String>) -> Self {
    Self {
      contents: Some(contents.into()),
      saves:    0,
    }
  }

  /// The most recently saved table.
  pub fn contents(&self) -> Option<&str> { self.contents.as_deref() }

  /// How many times the table has been saved.
  pub fn saves(&self) -> usize { self.saves }
}

impl Storage for MemoryStorage {
  fn load(&self) -> io::Result<Option<String>> { Ok(self.contents.clone()) }

  fn save(&mut self, contents: &str) -> io::Result<()> {
    self.contents = Some(contents.to_string());
    self.saves += 1;
    Ok(())
  }
}
