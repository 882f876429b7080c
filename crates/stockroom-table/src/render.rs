//! Fixed-width table writer.
//!
//! Layout per record: one data line followed by one border line. Columns
//! are padded to the widths of the header; over-long text spills past its
//! column, which the parser tolerates since it splits on the delimiter.

use stockroom_core::{Item, Pricing, format_amount, format_percent};

/// Marker the parser scans for before reading any records.
pub(crate) const MARKER: &str = "Current Inventory:";

pub(crate) const TITLE: &str = "Current Inventory:- ";

pub(crate) const BORDER: &str = "+----+----------------------------------+--------------------------+------------+-----------------+--------------+";

pub(crate) const COLUMNS: &str = "| ID | Company                          | Name                     | Price      | Stock Quantity  | Discount     |";

pub(crate) fn render_table<'a>(items: impl IntoIterator<Item = &'a Item>) -> String {
  let mut out = String::new();
  for line in [TITLE, BORDER, COLUMNS, BORDER] {
    out.push_str(line);
    out.push('\n');
  }
  for item in items {
    push_row(&mut out, item);
    out.push_str(BORDER);
    out.push('\n');
  }
  out
}

fn push_row(out: &mut String, item: &Item) {
  let discount = match item.pricing() {
    Pricing::Plain => "N/A          |".to_string(),
    Pricing::Discounted { discount } => {
      format!("{:<8}%    |", format_percent(discount))
    }
  };
  out.push_str(&format!(
    "| {:<3}| {:<33}| {:<20}     | {:<10} | {:<15} | {}\n",
    item.id(),
    item.company(),
    item.name(),
    format_amount(item.price()),
    item.stock(),
    discount,
  ));
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_table_has_framing_only() {
    let out = render_table(&[] as &[Item]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec![TITLE, BORDER, COLUMNS, BORDER]);
  }

  #[test]
  fn plain_row_layout() {
    let item = Item::new(1, "Acme", "Widget", 9.5, 100, 0.0).unwrap();
    let out = render_table([&item]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(
      lines[4],
      "| 1  | Acme                             | Widget                   | 9.5        | 100             | N/A          |"
    );
    assert_eq!(lines[5], BORDER);
    assert_eq!(lines[4].len(), BORDER.len());
  }

  #[test]
  fn discounted_row_layout() {
    let item = Item::new(2, "Acme", "Gadget", 20.0, 50, 0.1).unwrap();
    let out = render_table([&item]);
    let row = out.lines().nth(4).unwrap();
    assert_eq!(
      row,
      "| 2  | Acme                             | Gadget                   | 20.0       | 50              | 10.0    %    |"
    );
    assert_eq!(row.len(), BORDER.len());
  }

  #[test]
  fn small_and_long_discounts_keep_every_digit() {
    let item = Item::new(3, "Acme", "Sprocket", 0.1 + 0.2, 5, 0.007).unwrap();
    let row = render_table([&item]).lines().nth(4).unwrap().to_string();
    assert!(row.contains("| 0.30000000000000004 |"), "{row}");
    assert!(row.ends_with("| 0.7     %    |"), "{row}");

    let third = Item::new(4, "Acme", "Cog", 1.0, 1, 1.0 / 3.0).unwrap();
    let row = render_table([&third]).lines().nth(4).unwrap().to_string();
    assert!(row.contains("| 33.33333333333333%    |"), "{row}");
  }

  #[test]
  fn title_keeps_trailing_space() {
    assert!(render_table(&[] as &[Item]).starts_with("Current Inventory:- \n"));
  }
}
