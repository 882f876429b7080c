//! Item records: the single unit stored in an inventory slot.
//!
//! An item is either sold at its list price ([`Pricing::Plain`]) or at a
//! fractional discount off it ([`Pricing::Discounted`]). Both variants share
//! the same identity, naming and stock fields; only effective-price
//! computation and rendering dispatch on the variant.

use std::fmt;

use crate::{Error, Result};

/// Identifier of an item; unique across a store.
pub type ItemId = u32;

/// Character separating table columns. Text fields may never contain it.
pub const COLUMN_DELIMITER: char = '|';

// ─── Pricing ─────────────────────────────────────────────────────────────────

/// How the price of an item is charged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pricing {
  /// Charged at list price.
  Plain,
  /// Charged at `price × (1 − discount)`; `discount` lies in `(0, 1)`.
  Discounted { discount: f64 },
}

impl Pricing {
  /// Pick the variant for a requested discount fraction.
  ///
  /// A discount of exactly zero means no discount at all.
  pub fn from_discount(discount: f64) -> Result<Self> {
    if !discount.is_finite() || !(0.0..1.0).contains(&discount) {
      return Err(Error::InvalidDiscount(discount));
    }
    if discount == 0.0 {
      Ok(Self::Plain)
    } else {
      Ok(Self::Discounted { discount })
    }
  }

  pub fn discount(&self) -> Option<f64> {
    match self {
      Self::Plain => None,
      Self::Discounted { discount } => Some(*discount),
    }
  }
}

// ─── Item ────────────────────────────────────────────────────────────────────

/// One inventory record.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
  id:      ItemId,
  company: String,
  name:    String,
  price:   f64,
  stock:   u32,
  pricing: Pricing,
}

impl Item {
  /// Build a validated item.
  ///
  /// Text fields are trimmed and must not contain the column delimiter or a
  /// line break. `price` must be finite and non-negative. `discount` is a
  /// fraction in `[0, 1)`; zero yields a [`Pricing::Plain`] item.
  pub fn new(
    id: ItemId,
    company: &str,
    name: &str,
    price: f64,
    stock: u32,
    discount: f64,
  ) -> Result<Self> {
    Ok(Self {
      id,
      company: check_text("company", company)?,
      name: check_text("name", name)?,
      price: check_price(price)?,
      stock,
      pricing: Pricing::from_discount(discount)?,
    })
  }

  pub fn id(&self) -> ItemId { self.id }

  pub fn company(&self) -> &str { &self.company }

  pub fn name(&self) -> &str { &self.name }

  /// List price, before any discount.
  pub fn price(&self) -> f64 { self.price }

  pub fn stock(&self) -> u32 { self.stock }

  pub fn pricing(&self) -> Pricing { self.pricing }

  /// Discount fraction, or `None` for a plain item.
  pub fn discount(&self) -> Option<f64> { self.pricing.discount() }

  /// The price actually charged.
  pub fn effective_price(&self) -> f64 {
    match self.pricing {
      Pricing::Plain => self.price,
      Pricing::Discounted { discount } => self.price * (1.0 - discount),
    }
  }

  /// Whether `name` matches this item's name, ignoring case.
  pub fn name_matches(&self, name: &str) -> bool {
    self.name.to_lowercase() == name.trim().to_lowercase()
  }

  /// Overwrite the list price. The discount, if any, is kept.
  pub fn set_price(&mut self, price: f64) -> Result<()> {
    self.price = check_price(price)?;
    Ok(())
  }

  /// Increase stock. Saturates at `u32::MAX`.
  pub fn add_stock(&mut self, quantity: u32) {
    self.stock = self.stock.saturating_add(quantity);
  }

  /// Decrease stock by `quantity`, or fail without touching it when fewer
  /// than `quantity` units are on hand.
  pub fn remove_stock(&mut self, quantity: u32) -> Result<()> {
    if self.stock < quantity {
      return Err(Error::InsufficientStock {
        name:      self.name.clone(),
        requested: quantity,
        available: self.stock,
      });
    }
    self.stock -= quantity;
    Ok(())
  }
}

impl fmt::Display for Item {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "ID: {} | Company: {} | Name: {} - Rs: {}",
      self.id,
      self.company,
      self.name,
      format_amount(self.price),
    )?;
    if let Pricing::Discounted { discount } = self.pricing {
      write!(f, " (Discount: {}%)", format_percent(discount))?;
    }
    write!(f, " (Stock: {})", self.stock)
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Render an amount with one decimal place, falling back to the shortest
/// exact representation when one decimal would not read back as `value`.
///
/// `9.5` → `"9.5"`, `100.0` → `"100.0"`, `9.99` → `"9.99"`.
pub fn format_amount(value: f64) -> String {
  let one_decimal = format!("{value:.1}");
  if one_decimal.parse::<f64>() == Ok(value) {
    one_decimal
  } else {
    format!("{value}")
  }
}

/// Render a fraction as a percentage by moving the decimal point of its
/// shortest representation two places right, so the text reads back as the
/// same `f64` once the point is moved back.
///
/// `0.1` → `"10.0"`, `0.007` → `"0.7"`, `0.075` → `"7.5"`.
pub fn format_percent(fraction: f64) -> String {
  let text = format!("{fraction}");
  let (sign, digits) = match text.strip_prefix('-') {
    Some(rest) => ("-", rest),
    None => ("", text.as_str()),
  };
  let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));
  let frac = format!("{frac:0<2}");
  let (moved, rest) = frac.split_at(2);

  let whole = format!("{int}{moved}");
  let whole = whole.trim_start_matches('0');
  let whole = if whole.is_empty() { "0" } else { whole };
  let rest = if rest.is_empty() { "0" } else { rest };
  format!("{sign}{whole}.{rest}")
}

fn check_text(field: &'static str, value: &str) -> Result<String> {
  let trimmed = value.trim();
  if trimmed.contains(COLUMN_DELIMITER) || trimmed.contains(['\n', '\r']) {
    return Err(Error::InvalidText {
      field,
      value: value.to_string(),
    });
  }
  Ok(trimmed.to_string())
}

fn check_price(price: f64) -> Result<f64> {
  if price.is_finite() && price >= 0.0 {
    Ok(price)
  } else {
    Err(Error::InvalidPrice(price))
  }
}
