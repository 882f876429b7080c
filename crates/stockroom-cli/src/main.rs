//! `stockroom`: menu-driven front end for the Stockroom inventory.
//!
//! # Usage
//!
//! ```
//! stockroom
//! stockroom --file shop-inventory.txt
//! stockroom --config ~/.config/stockroom.toml
//! ```

mod menu;
mod settings;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use menu::Menu;
use settings::Settings;
use stockroom_store::Inventory;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "stockroom", version, about = "Fixed-capacity inventory catalog")]
struct Args {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "stockroom.toml")]
  config: PathBuf,

  /// Inventory file to use instead of the configured one.
  #[arg(short, long, value_name = "PATH")]
  file: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr so they never interleave with the menu on stdout.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let mut settings = Settings::load(&args.config)
    .with_context(|| format!("reading config file {}", args.config.display()))?;
  if let Some(file) = args.file {
    settings.inventory_path = file;
  }

  // A malformed file stops us here rather than being overwritten by the
  // first save.
  let mut inventory = Inventory::open(&settings.inventory_path).with_context(|| {
    format!("opening inventory at {}", settings.inventory_path.display())
  })?;

  let stdin = io::stdin();
  let stdout = io::stdout();
  Menu::new(&mut inventory, stdin.lock(), stdout.lock(), &settings.currency)
    .run()
    .context("terminal I/O failed")?;

  Ok(())
}
