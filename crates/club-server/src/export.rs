//! CSV rendering of the visitor list.

use club_core::Visitor;

pub const CSV_HEADER: &str = "Nom,Prénom,Email,Message,Date";

/// Render `visitors` as CSV: every field quoted, rows separated by `\n`,
/// dates as `dd/mm/yyyy`.
pub fn visitors_csv(visitors: &[Visitor]) -> String {
  let mut out = String::from(CSV_HEADER);
  for v in visitors {
    let date = v.submitted_at.format("%d/%m/%Y").to_string();
    let row = [
      v.last_name.as_str(),
      v.first_name.as_str(),
      v.email.as_str(),
      v.message.as_str(),
      date.as_str(),
    ]
    .map(quote)
    .join(",");
    out.push('\n');
    out.push_str(&row);
  }
  out
}

fn quote(field: &str) -> String {
  format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{TimeZone, Utc};

  fn visitor(message: &str) -> Visitor {
    Visitor {
      id:           1,
      last_name:    "Ben Salah".into(),
      first_name:   "Amira".into(),
      email:        "amira@example.com".into(),
      message:      message.into(),
      submitted_at: Utc.with_ymd_and_hms(2026, 3, 7, 18, 45, 0).unwrap(),
    }
  }

  #[test]
  fn empty_list_is_header_only() {
    assert_eq!(visitors_csv(&[]), CSV_HEADER);
  }

  #[test]
  fn rows_are_quoted_with_french_dates() {
    let csv = visitors_csv(&[visitor("Bonjour, je voudrais adhérer")]);
    assert_eq!(
      csv,
      "Nom,Prénom,Email,Message,Date\n\
       \"Ben Salah\",\"Amira\",\"amira@example.com\",\"Bonjour, je voudrais adhérer\",\"07/03/2026\""
    );
  }

  #[test]
  fn embedded_quotes_are_doubled() {
    let csv = visitors_csv(&[visitor(r#"le "club""#)]);
    assert!(csv.ends_with(r#","le ""club""","07/03/2026""#), "{csv}");
  }

  #[test]
  fn one_line_per_visitor() {
    let csv = visitors_csv(&[visitor("a"), visitor("b"), visitor("c")]);
    assert_eq!(csv.lines().count(), 4);
  }
}
