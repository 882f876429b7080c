//! Console listing for the "show inventory" view.
//!
//! Unlike the persisted table, the listing is for people: prices carry a
//! currency label and an effective-price column shows what is charged after
//! discount. It is never parsed back.

use stockroom_core::{Item, Pricing};

const HEADINGS: [(&str, usize); 7] = [
  ("ID", 4),
  ("Company", 35),
  ("Name", 21),
  ("Price", 16),
  ("Effective", 16),
  ("Stock Quantity", 17),
  ("Discount", 18),
];

pub(crate) fn render_listing<'a>(
  items: impl IntoIterator<Item = &'a Item>,
  currency: &str,
) -> String {
  let border = border();
  let mut out = String::from("Current Inventory:\n");
  out.push_str(&border);
  out.push_str(&row(HEADINGS.map(|(heading, _)| heading.to_string())));
  out.push_str(&border);
  for item in items {
    let discount = match item.pricing() {
      Pricing::Plain => "N/A".to_string(),
      Pricing::Discounted { discount } => format!("{:.1}%", discount * 100.0),
    };
    out.push_str(&row([
      item.id().to_string(),
      item.company().to_string(),
      item.name().to_string(),
      format!("{currency}: {:.1}", item.price()),
      format!("{currency}: {:.1}", item.effective_price()),
      item.stock().to_string(),
      discount,
    ]));
  }
  out.push_str(&border);
  out
}

fn border() -> String {
  let mut line = String::from("+");
  for (_, width) in HEADINGS {
    line.push_str(&"-".repeat(width + 2));
    line.push('+');
  }
  line.push('\n');
  line
}

fn row(cells: [String; 7]) -> String {
  let mut line = String::from("|");
  for (cell, (_, width)) in cells.iter().zip(HEADINGS) {
    line.push_str(&format!(" {cell:<width$} |"));
  }
  line.push('\n');
  line
}
