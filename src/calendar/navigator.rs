use chrono::{Datelike, Days, Months, NaiveDate};

pub const WEEK_LENGTH: usize = 7;

/// Holds the single date the calendar is looking at. The visible week and
/// month are derived from it on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
  current: NaiveDate,
}

impl Navigator {
  pub const fn new(current: NaiveDate) -> Self {
    Self { current }
  }

  pub const fn current(&self) -> NaiveDate {
    self.current
  }

  pub fn is_selected(&self, date: NaiveDate) -> bool {
    date == self.current
  }

  /// Jump to an arbitrary day
  pub fn select(&mut self, date: NaiveDate) -> NaiveDate {
    self.current = date;

    date
  }

  pub fn today(&mut self, today: NaiveDate) -> NaiveDate {
    self.select(today)
  }

  /// One calendar month ahead. The day is clamped to the length of the
  /// target month (Jan 31 becomes Feb 28).
  pub fn next_month(&mut self) -> NaiveDate {
    let new_date = self
      .current
      .checked_add_months(Months::new(1))
      .unwrap_or(self.current);

    self.select(new_date)
  }

  pub fn prev_month(&mut self) -> NaiveDate {
    let new_date = self
      .current
      .checked_sub_months(Months::new(1))
      .unwrap_or(self.current);

    self.select(new_date)
  }

  pub fn next_week(&mut self) -> NaiveDate {
    let new_date = self
      .current
      .checked_add_days(Days::new(WEEK_LENGTH as u64))
      .unwrap_or(self.current);

    self.select(new_date)
  }

  pub fn prev_week(&mut self) -> NaiveDate {
    let new_date = self
      .current
      .checked_sub_days(Days::new(WEEK_LENGTH as u64))
      .unwrap_or(self.current);

    self.select(new_date)
  }

  /// The Sunday on or before the current date
  pub fn week_start(&self) -> NaiveDate {
    let offset = self.current.weekday().num_days_from_sunday();

    self
      .current
      .checked_sub_days(Days::new(u64::from(offset)))
      .unwrap_or(self.current)
  }

  pub fn week_end(&self) -> NaiveDate {
    let start = self.week_start();

    start
      .checked_add_days(Days::new(WEEK_LENGTH as u64 - 1))
      .unwrap_or(start)
  }

  pub fn week(&self) -> [NaiveDate; WEEK_LENGTH] {
    let start = self.week_start();
    let mut days = [start; WEEK_LENGTH];

    for (date, slot) in start.iter_days().zip(days.iter_mut()) {
      *slot = date;
    }

    days
  }

  pub fn month_start(&self) -> NaiveDate {
    self
      .current
      .checked_sub_days(Days::new(u64::from(self.current.day0())))
      .unwrap_or(self.current)
  }

  pub fn month_end(&self) -> NaiveDate {
    self
      .month_start()
      .checked_add_months(Months::new(1))
      .and_then(|next| next.pred_opt())
      .unwrap_or(self.current)
  }

  pub fn month_days(&self) -> impl Iterator<Item = NaiveDate> {
    let end = self.month_end();

    self.month_start().iter_days().take_while(move |date| date <= &end)
  }

  /// Number of empty cells before the 1st in a Sunday first month grid
  pub fn leading_blanks(&self) -> usize {
    self.month_start().weekday().num_days_from_sunday() as usize
  }
}

#[cfg(test)]
mod tests {
  use chrono::Weekday;

  use super::*;

  fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
  }

  #[test]
  fn week_starts_on_sunday() {
    let navigator = Navigator::new(date(2025, 7, 16));

    assert_eq!(navigator.week_start(), date(2025, 7, 13));
    assert_eq!(navigator.week_end(), date(2025, 7, 19));
    assert_eq!(navigator.week()[0].weekday(), Weekday::Sun);
    assert_eq!(navigator.week()[6], date(2025, 7, 19));
  }

  #[test]
  fn sunday_is_its_own_week_start() {
    let navigator = Navigator::new(date(2025, 7, 13));

    assert_eq!(navigator.week_start(), date(2025, 7, 13));
  }

  #[test]
  fn week_spans_month_boundary() {
    let navigator = Navigator::new(date(2025, 8, 1));

    assert_eq!(navigator.week_start(), date(2025, 7, 27));
    assert_eq!(navigator.week_end(), date(2025, 8, 2));
  }

  #[test]
  fn steps_by_week() {
    let mut navigator = Navigator::new(date(2025, 7, 30));

    assert_eq!(navigator.next_week(), date(2025, 8, 6));
    assert_eq!(navigator.prev_week(), date(2025, 7, 30));
    assert_eq!(navigator.prev_week(), date(2025, 7, 23));
  }

  #[test]
  fn twelve_months_forward_is_one_year() {
    for start in [date(2025, 7, 16), date(2024, 1, 1), date(2023, 12, 28)] {
      let mut navigator = Navigator::new(start);

      for _ in 0..12 {
        navigator.next_month();
      }

      assert_eq!(navigator.current().month(), start.month());
      assert_eq!(navigator.current().year(), start.year() + 1);
    }
  }

  #[test]
  fn month_steps_clamp_day() {
    let mut navigator = Navigator::new(date(2025, 1, 31));

    assert_eq!(navigator.next_month(), date(2025, 2, 28));
    assert_eq!(navigator.prev_month(), date(2025, 1, 28));
  }

  #[test]
  fn derives_month_range() {
    let navigator = Navigator::new(date(2025, 7, 16));

    assert_eq!(navigator.month_start(), date(2025, 7, 1));
    assert_eq!(navigator.month_end(), date(2025, 7, 31));
    assert_eq!(navigator.month_days().count(), 31);
    // July 1, 2025 is a Tuesday
    assert_eq!(navigator.leading_blanks(), 2);

    let february = Navigator::new(date(2024, 2, 10));
    assert_eq!(february.month_end(), date(2024, 2, 29));
    assert_eq!(february.leading_blanks(), 4);
  }

  #[test]
  fn jumps_to_selected_and_today() {
    let mut navigator = Navigator::new(date(2025, 7, 16));

    navigator.select(date(2025, 7, 3));
    assert!(navigator.is_selected(date(2025, 7, 3)));

    assert_eq!(navigator.today(date(2026, 10, 16)), date(2026, 10, 16));
    assert_eq!(navigator.current(), date(2026, 10, 16));
  }
}
