//! Daily streak arithmetic. Pure functions over calendar days so the rules
//! are testable without touching the clock or the store.

use chrono::{DateTime, NaiveDate};

/// Fold one activity day into the streak counter.
///
/// Returns `(new_streak, is_new_day)`. Points are granted exactly when
/// `is_new_day` is true. No previous activity starts a streak of 1.
/// Same-day activity changes nothing. Exactly one day later extends the
/// streak. Any other gap, including a clock going backwards, resets to 1.
pub fn compute_streak(last_active: Option<NaiveDate>, current_streak: u32, today: NaiveDate) -> (u32, bool) {
  let last = match last_active {
    Some(d) => d,
    None => return (1, true),
  };
  match today.signed_duration_since(last).num_days() {
    0 => (current_streak, false),
    1 => (current_streak + 1, true),
    _ => (1, true),
  }
}

/// Parse a stored activity timestamp down to its calendar day.
/// Accepts RFC 3339 or a bare `YYYY-MM-DD` prefix; anything else is `None`,
/// which callers treat the same as "never active".
pub fn parse_day(s: &str) -> Option<NaiveDate> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt.date_naive());
  }
  let prefix = s.get(..10)?;
  NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
  }

  #[test]
  fn first_activity_starts_at_one() {
    assert_eq!(compute_streak(None, 0, day(2025, 3, 10)), (1, true));
  }

  #[test]
  fn same_day_is_a_no_op() {
    assert_eq!(compute_streak(Some(day(2025, 3, 10)), 4, day(2025, 3, 10)), (4, false));
  }

  #[test]
  fn next_day_extends() {
    assert_eq!(compute_streak(Some(day(2025, 3, 10)), 4, day(2025, 3, 11)), (5, true));
  }

  #[test]
  fn gap_resets_to_one() {
    assert_eq!(compute_streak(Some(day(2025, 3, 10)), 9, day(2025, 3, 13)), (1, true));
  }

  #[test]
  fn backwards_clock_resets_to_one() {
    assert_eq!(compute_streak(Some(day(2025, 3, 10)), 9, day(2025, 3, 9)), (1, true));
  }

  #[test]
  fn month_boundary_counts_as_consecutive() {
    assert_eq!(compute_streak(Some(day(2025, 1, 31)), 2, day(2025, 2, 1)), (3, true));
  }

  #[test]
  fn parse_day_accepts_rfc3339_and_plain_dates() {
    assert_eq!(parse_day("2025-03-10T14:30:00+00:00"), Some(day(2025, 3, 10)));
    assert_eq!(parse_day("2025-03-10T14:30:00Z"), Some(day(2025, 3, 10)));
    assert_eq!(parse_day("2025-03-10"), Some(day(2025, 3, 10)));
    assert_eq!(parse_day("not a date"), None);
    assert_eq!(parse_day(""), None);
  }
}
