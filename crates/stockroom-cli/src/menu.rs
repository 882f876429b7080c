//! Numbered text menu driving an [`Inventory`].
//!
//! Each menu entry prompts for its arguments, calls the matching store
//! operation and prints the outcome. Store errors are printed and the menu
//! comes back; only I/O failure or the end of input stops the loop early.

use std::{
  fmt::Display,
  io::{self, BufRead, Write},
  str::FromStr,
};

use stockroom_core::{Item, ItemId};
use stockroom_store::{Inventory, Storage};
use strum::{EnumIter, FromRepr, IntoEnumIterator as _};

// ─── Choices ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, EnumIter, FromRepr)]
#[repr(u8)]
enum Choice {
  #[strum(to_string = "Add item to inventory")]
  AddItem = 1,
  #[strum(to_string = "Remove item from inventory")]
  RemoveItem = 2,
  #[strum(to_string = "Search for item by name")]
  SearchItem = 3,
  #[strum(to_string = "Edit item price")]
  EditPrice = 4,
  #[strum(to_string = "Add stock quantity for item")]
  AddStock = 5,
  #[strum(to_string = "Remove stock quantity for item")]
  RemoveStock = 6,
  #[strum(to_string = "Show available items in inventory")]
  ShowInventory = 7,
  #[strum(to_string = "Request item from inventory")]
  RequestItem = 8,
  #[strum(to_string = "Exit")]
  Exit = 9,
}

// ─── Prompt plumbing ──────────────────────────────────────────────────────────

/// Why the session stopped before the user chose "Exit".
enum Interrupt {
  EndOfInput,
  Io(io::Error),
}

impl From<io::Error> for Interrupt {
  fn from(e: io::Error) -> Self { Self::Io(e) }
}

type Step<T = ()> = Result<T, Interrupt>;

// ─── Menu ─────────────────────────────────────────────────────────────────────

pub struct Menu<'a, S, R, W> {
  inventory: &'a mut Inventory<S>,
  input:     R,
  output:    W,
  currency:  String,
}

impl<'a, S, R, W> Menu<'a, S, R, W>
where
  S: Storage,
  R: BufRead,
  W: Write,
{
  pub fn new(inventory: &'a mut Inventory<S>, input: R, output: W, currency: &str) -> Self {
    Self {
      inventory,
      input,
      output,
      currency: currency.to_string(),
    }
  }

  /// Run until the user exits or input ends.
  pub fn run(&mut self) -> io::Result<()> {
    match self.session() {
      Ok(()) | Err(Interrupt::EndOfInput) => Ok(()),
      Err(Interrupt::Io(e)) => Err(e),
    }
  }

  fn session(&mut self) -> Step {
    loop {
      self.print_menu()?;
      let line = self.read_line("Enter your choice: ")?;
      let choice = line.trim().parse::<u8>().ok().and_then(Choice::from_repr);
      tracing::debug!(?choice, "menu choice");

      match choice {
        Some(Choice::Exit) => {
          writeln!(self.output, "Exiting program...")?;
          return Ok(());
        }
        Some(choice) => self.dispatch(choice)?,
        None => writeln!(
          self.output,
          "Invalid choice. Please enter a number between 1 and 9."
        )?,
      }
    }
  }

  fn print_menu(&mut self) -> Step {
    writeln!(self.output, "\n---------------Menu:---------------")?;
    for choice in Choice::iter() {
      writeln!(self.output, "{}. {choice}", choice as u8)?;
    }
    Ok(())
  }

  fn dispatch(&mut self, choice: Choice) -> Step {
    match choice {
      Choice::AddItem => self.add_item(),
      Choice::RemoveItem => {
        let id: ItemId = self.read_value("Enter item ID to remove the item: ")?;
        match self.inventory.remove_item(id) {
          Ok(_) => self.say(format_args!("Item removed from inventory: ID {id}")),
          Err(e) => self.say(e),
        }
      }
      Choice::SearchItem => {
        let name = self.read_line("Enter item name to search for the item in the inventory: ")?;
        match self.inventory.search_item(&name) {
          Ok(item) => writeln!(self.output, "Item found in inventory: {item}")?,
          Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
      }
      Choice::EditPrice => {
        let id: ItemId = self.read_value("Enter item ID to edit its price: ")?;
        let price: f64 = self.read_value("Enter new price: ")?;
        let outcome = self.inventory.edit_price(id, price);
        self.report(outcome, "Item price updated")
      }
      Choice::AddStock => {
        let id: ItemId = self.read_value("Enter item ID to add stock quantity: ")?;
        let quantity: u32 = self.read_value("Enter quantity to add: ")?;
        let outcome = self.inventory.add_stock(id, quantity);
        self.report(outcome, "Stock added for item")
      }
      Choice::RemoveStock => {
        let id: ItemId = self.read_value("Enter item ID to remove stock quantity: ")?;
        let quantity: u32 = self.read_value("Enter quantity to remove: ")?;
        let outcome = self.inventory.remove_stock(id, quantity);
        self.report(outcome, "Stock removed for item")
      }
      Choice::ShowInventory => {
        let listing = self.inventory.display(&self.currency);
        self.output.write_all(listing.as_bytes())?;
        Ok(())
      }
      Choice::RequestItem => self.request_item(),
      Choice::Exit => Ok(()),
    }
  }

  fn add_item(&mut self) -> Step {
    let id: ItemId =
      self.read_value("Enter item ID to add the item (Item ID must be unique): ")?;
    let company = self.read_line("Enter company name: ")?;
    let name = self.read_line("Enter item name: ")?;
    let price: f64 = self.read_value("Enter item price: ")?;
    let stock: u32 = self.read_value("Enter stock quantity: ")?;
    let discount: f64 = self.read_value(
      "Enter discount as a fraction, e.g. 0.1 for 10% (if no discount, enter 0): ",
    )?;

    let item = match Item::new(id, &company, &name, price, stock, discount) {
      Ok(item) => item,
      Err(e) => return self.say(e),
    };
    let name = item.name().to_string();
    match self.inventory.add_item(item) {
      Ok(_) => self.say(format_args!("Item added to inventory: {name}")),
      Err(e) => self.say(e),
    }
  }

  /// Confirm the item exists before asking how many to buy.
  fn request_item(&mut self) -> Step {
    let name = self.read_line("Enter item name to request from inventory: ")?;
    if self.inventory.search_item(&name).is_err() {
      return self.say("Item not available in the inventory.");
    }
    writeln!(self.output, "Item available in the inventory.")?;

    let quantity: u32 = self.read_value("Enter quantity to purchase: ")?;
    match self.inventory.request_item(&name, quantity) {
      Ok(item) => self.say(format_args!("Item successfully purchased: {}", item.name())),
      Err(e) => self.say(format_args!("Error purchasing item: {e}")),
    }
  }

  fn report(&mut self, outcome: stockroom_store::Result<Item>, done: &str) -> Step {
    match outcome {
      Ok(item) => self.say(format_args!("{done}: {item}")),
      Err(e) => self.say(e),
    }
  }

  fn say(&mut self, message: impl Display) -> Step {
    writeln!(self.output, "{message}")?;
    Ok(())
  }

  fn read_line(&mut self, prompt: &str) -> Step<String> {
    write!(self.output, "{prompt}")?;
    self.output.flush()?;

    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      return Err(Interrupt::EndOfInput);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
  }

  /// Prompt until the answer parses as `T`.
  fn read_value<T: FromStr>(&mut self, prompt: &str) -> Step<T> {
    loop {
      let line = self.read_line(prompt)?;
      match line.trim().parse() {
        Ok(value) => return Ok(value),
        Err(_) => writeln!(
          self.output,
          "Invalid input {:?}. Please enter a valid number.",
          line.trim()
        )?,
      }
    }
  }
}
