//! Fixed-width table reader.
//!
//! Pipeline:
//!   raw &str
//!     └─ skip to the "Current Inventory:" marker
//!          └─ drop border lines and the column-header line
//!               └─ split_cells()  → [&str; 6]
//!                    └─ parse_record() → Item

use std::collections::HashSet;

use stockroom_core::{COLUMN_DELIMITER, Item, ItemId};

use crate::{
  error::{Error, Result},
  render::MARKER,
};

const COLUMN_COUNT: usize = 6;

/// Sentinel written in the discount column of plain items.
const NO_DISCOUNT: &str = "N/A";

pub(crate) fn parse_table(input: &str) -> Result<Vec<Item>> {
  let mut lines = input.lines().enumerate();

  if !lines.by_ref().any(|(_, line)| line.contains(MARKER)) {
    return if input.trim().is_empty() {
      Ok(Vec::new())
    } else {
      Err(Error::MissingHeader)
    };
  }

  let mut items = Vec::new();
  let mut seen: HashSet<ItemId> = HashSet::new();
  let mut header_seen = false;

  for (index, raw) in lines {
    let line_no = index + 1;
    let line = raw.trim();
    if line.is_empty() || is_border(line) {
      continue;
    }

    let cells = split_cells(line);
    if !header_seen && cells.first().is_some_and(|c| c.eq_ignore_ascii_case("ID")) {
      header_seen = true;
      continue;
    }

    let item = parse_record(line_no, &cells)?;
    if !seen.insert(item.id()) {
      return Err(Error::DuplicateId {
        line: line_no,
        id:   item.id(),
      });
    }
    items.push(item);
  }

  Ok(items)
}

/// A border is a non-empty run of `+` and `-` only.
fn is_border(line: &str) -> bool {
  line.starts_with('+') && line.chars().all(|c| c == '+' || c == '-')
}

/// Split a `| a | b |` row into trimmed cells, dropping the outer frame.
fn split_cells(line: &str) -> Vec<&str> {
  let inner = line.strip_prefix(COLUMN_DELIMITER).unwrap_or(line);
  let inner = inner.strip_suffix(COLUMN_DELIMITER).unwrap_or(inner);
  inner.split(COLUMN_DELIMITER).map(str::trim).collect()
}

fn parse_record(line: usize, cells: &[&str]) -> Result<Item> {
  let [id, company, name, price, stock, discount] = cells else {
    return Err(Error::FieldCount {
      line,
      found: cells.len(),
    });
  };

  let id: ItemId = parse_number(line, "ID", id)?;
  let price: f64 = parse_number(line, "price", price)?;
  let stock: u32 = parse_number(line, "stock quantity", stock)?;
  let discount = parse_discount(line, discount)?;

  Item::new(id, company, name, price, stock, discount)
    .map_err(|source| Error::InvalidRecord { line, source })
}

/// The discount column holds a percentage (`10.0%`) or the `N/A` sentinel.
/// Returns the discount as a fraction; `N/A` and `0` both mean none.
fn parse_discount(line: usize, cell: &str) -> Result<f64> {
  if cell.eq_ignore_ascii_case(NO_DISCOUNT) {
    return Ok(0.0);
  }
  let percent = cell.strip_suffix('%').unwrap_or(cell).trim();
  let fraction = percent_to_fraction(percent).ok_or_else(|| Error::InvalidNumber {
    line,
    column: "discount",
    value: percent.to_string(),
  })?;
  parse_number(line, "discount", &fraction)
}

/// Move the decimal point of a plain decimal two places left, in text.
///
/// `7.5` → `0.075`, `25` → `0.25`. Anything other than an optional sign,
/// digits and at most one point yields `None`.
fn percent_to_fraction(percent: &str) -> Option<String> {
  let (sign, digits) = match percent.strip_prefix('-') {
    Some(rest) => ("-", rest),
    None => ("", percent.strip_prefix('+').unwrap_or(percent)),
  };
  let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));
  let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
  if int.len() + frac.len() == 0 || !is_digits(int) || !is_digits(frac) {
    return None;
  }

  let int = format!("{int:0>2}");
  let (whole, moved) = int.split_at(int.len() - 2);
  let whole = if whole.is_empty() { "0" } else { whole };
  Some(format!("{sign}{whole}.{moved}{frac}"))
}

fn parse_number<T: std::str::FromStr>(
  line: usize,
  column: &'static str,
  value: &str,
) -> Result<T> {
  value.parse().map_err(|_| Error::InvalidNumber {
    line,
    column,
    value: value.to_string(),
  })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use stockroom_core::Pricing;

  use super::*;
  use crate::render::{BORDER, COLUMNS, TITLE};

  fn table(rows: &[&str]) -> String {
    let mut out = format!("{TITLE}\n{BORDER}\n{COLUMNS}\n{BORDER}\n");
    for row in rows {
      out.push_str(row);
      out.push('\n');
      out.push_str(BORDER);
      out.push('\n');
    }
    out
  }

  #[test]
  fn empty_input_has_no_records() {
    assert!(parse_table("").unwrap().is_empty());
    assert!(parse_table("\n  \n").unwrap().is_empty());
  }

  #[test]
  fn header_only_has_no_records() {
    assert!(parse_table(&table(&[])).unwrap().is_empty());
  }

  #[test]
  fn missing_marker_is_rejected() {
    let err = parse_table("| 1 | Acme | Widget | 9.5 | 100 | N/A |\n").unwrap_err();
    assert!(matches!(err, Error::MissingHeader));
  }

  #[test]
  fn plain_and_discounted_rows() {
    let input = table(&[
      "| 1  | Acme                             | Widget                   | 9.5        | 100             | N/A          |",
      "| 2  | Acme                             | Gadget                   | 20.0       | 50              | 10.0    %    |",
    ]);
    let items = parse_table(&input).unwrap();
    assert_eq!(items.len(), 2);

    assert_eq!(items[0].id(), 1);
    assert_eq!(items[0].company(), "Acme");
    assert_eq!(items[0].name(), "Widget");
    assert_eq!(items[0].price(), 9.5);
    assert_eq!(items[0].stock(), 100);
    assert_eq!(items[0].pricing(), Pricing::Plain);

    assert_eq!(items[1].id(), 2);
    assert_eq!(items[1].pricing(), Pricing::Discounted { discount: 0.1 });
  }

  #[test]
  fn lines_before_marker_are_ignored() {
    let input = format!(
      "exported by hand\n| junk | row |\n{}",
      table(&["| 7 | Co | Thing | 1.0 | 2 | N/A |"])
    );
    let items = parse_table(&input).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id(), 7);
  }

  #[test]
  fn discount_without_percent_sign_and_zero_discount() {
    let input = table(&[
      "| 1 | Co | A | 1.0 | 1 | 25 |",
      "| 2 | Co | B | 1.0 | 1 | 0.0% |",
    ]);
    let items = parse_table(&input).unwrap();
    assert_eq!(items[0].discount(), Some(0.25));
    assert_eq!(items[1].pricing(), Pricing::Plain);
  }

  #[test]
  fn percent_text_shifts_two_places() {
    assert_eq!(percent_to_fraction("25").as_deref(), Some("0.25"));
    assert_eq!(percent_to_fraction("7.5").as_deref(), Some("0.075"));
    assert_eq!(percent_to_fraction("0.7").as_deref(), Some("0.007"));
    assert_eq!(percent_to_fraction("100.0").as_deref(), Some("1.000"));
    assert_eq!(percent_to_fraction("-5").as_deref(), Some("-0.05"));
    assert_eq!(percent_to_fraction(".5").as_deref(), Some("0.005"));
    assert_eq!(percent_to_fraction(""), None);
    assert_eq!(percent_to_fraction("."), None);
    assert_eq!(percent_to_fraction("1.2.3"), None);
    assert_eq!(percent_to_fraction("1e2"), None);
  }

  #[test]
  fn discount_reads_back_without_division_error() {
    let input = table(&[
      "| 1 | Co | A | 1.0 | 1 | 0.7% |",
      "| 2 | Co | B | 1.0 | 1 | 7.5% |",
      "| 3 | Co | C | 1.0 | 1 | 33.33333333333333% |",
    ]);
    let items = parse_table(&input).unwrap();
    assert_eq!(items[0].discount(), Some(0.007));
    assert_eq!(items[1].discount(), Some(0.075));
    assert_eq!(items[2].discount(), Some(1.0 / 3.0));
  }

  #[test]
  fn tolerates_unpadded_rows_and_blank_lines() {
    let input = format!("{}\n\n|3|Co|Name with spaces|4.25|9|N/A|\n", table(&[]));
    let items = parse_table(&input).unwrap();
    assert_eq!(items[0].name(), "Name with spaces");
    assert_eq!(items[0].price(), 4.25);
  }

  #[test]
  fn missing_discount_column_is_rejected() {
    let input = table(&["| 1 | Co | A | 1.0 | 1 |"]);
    let err = parse_table(&input).unwrap_err();
    assert!(matches!(err, Error::FieldCount { line: 5, found: 5 }));
  }

  #[test]
  fn extra_column_is_rejected() {
    let input = table(&["| 1 | Co | A | 1.0 | 1 | N/A | x |"]);
    assert!(matches!(
      parse_table(&input).unwrap_err(),
      Error::FieldCount { found: 7, .. }
    ));
  }

  #[test]
  fn non_numeric_fields_are_rejected() {
    let bad_id = table(&["| x | Co | A | 1.0 | 1 | N/A |"]);
    assert!(matches!(
      parse_table(&bad_id).unwrap_err(),
      Error::InvalidNumber { column: "ID", .. }
    ));

    let bad_stock = table(&["| 1 | Co | A | 1.0 | -4 | N/A |"]);
    assert!(matches!(
      parse_table(&bad_stock).unwrap_err(),
      Error::InvalidNumber { column: "stock quantity", .. }
    ));

    let bad_discount = table(&["| 1 | Co | A | 1.0 | 4 | lots% |"]);
    assert!(matches!(
      parse_table(&bad_discount).unwrap_err(),
      Error::InvalidNumber { column: "discount", .. }
    ));
  }

  #[test]
  fn out_of_range_values_are_rejected() {
    let input = table(&["| 1 | Co | A | -1.0 | 4 | N/A |"]);
    assert!(matches!(
      parse_table(&input).unwrap_err(),
      Error::InvalidRecord {
        source: stockroom_core::Error::InvalidPrice(_),
        ..
      }
    ));

    let input = table(&["| 1 | Co | A | 1.0 | 4 | 100.0% |"]);
    assert!(matches!(
      parse_table(&input).unwrap_err(),
      Error::InvalidRecord {
        source: stockroom_core::Error::InvalidDiscount(_),
        ..
      }
    ));
  }

  #[test]
  fn duplicate_ids_are_rejected() {
    let input = table(&[
      "| 1 | Co | A | 1.0 | 1 | N/A |",
      "| 1 | Co | B | 1.0 | 1 | N/A |",
    ]);
    assert!(matches!(
      parse_table(&input).unwrap_err(),
      Error::DuplicateId { line: 7, id: 1 }
    ));
  }
}
