use chrono::NaiveDate;

use super::{CalendarId, EventId, LOCALE};

pub const DEFAULT_ORGANIZER: &str = "You";
pub const NO_ATTENDEES: &str = "No attendees";

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
  pub id: EventId,
  pub title: String,
  pub date: NaiveDate,
  /// Wall clock "HH:MM", not validated
  pub start_time: String,
  /// Wall clock "HH:MM", not validated
  pub end_time: String,
  pub calendar_id: CalendarId,
  pub description: String,
  pub location: String,
  pub attendees: Vec<String>,
  pub organizer: String,
}

impl Event {
  pub fn is_on(&self, date: NaiveDate) -> bool {
    self.date == date
  }

  pub fn is_between_dates(&self, start: NaiveDate, end: NaiveDate) -> bool {
    start <= self.date && self.date <= end
  }

  /// Case insensitive title match, an empty query matches everything.
  pub fn matches(&self, query: &str) -> bool {
    let query = query.trim();

    query.is_empty() || self.title.to_lowercase().contains(&query.to_lowercase())
  }

  pub fn time_range(&self) -> String {
    format!("{} - {}", self.start_time, self.end_time)
  }

  pub fn attendees_label(&self) -> String {
    if self.attendees.is_empty() {
      return NO_ATTENDEES.to_owned();
    }

    self.attendees.join(", ")
  }

  /// "Wednesday, July 16, 2025"
  pub fn long_date(&self) -> String {
    self.date.format_localized("%A, %B %-d, %Y", LOCALE).to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn event(title: &str, attendees: &[&str]) -> Event {
    Event {
      id: EventId::new(1),
      title: title.to_owned(),
      date: NaiveDate::from_ymd_opt(2025, 7, 16).unwrap(),
      start_time: "13:00".to_owned(),
      end_time: "16:00".to_owned(),
      calendar_id: CalendarId::from("project"),
      description: String::new(),
      location: String::new(),
      attendees: attendees.iter().map(|name| (*name).to_owned()).collect(),
      organizer: DEFAULT_ORGANIZER.to_owned(),
    }
  }

  #[test]
  fn formats_detail_fields() {
    let event = event("Coding Project", &[]);

    assert_eq!(event.time_range(), "13:00 - 16:00");
    assert_eq!(event.long_date(), "Wednesday, July 16, 2025");
    assert_eq!(event.attendees_label(), "No attendees");
  }

  #[test]
  fn joins_attendees_in_order() {
    let event = event("Group Meeting", &["Dev Team", "Product Manager"]);

    assert_eq!(event.attendees_label(), "Dev Team, Product Manager");
  }

  #[test]
  fn matches_titles_case_insensitively() {
    let event = event("Lunch with Mum", &["Mum"]);

    assert!(event.matches(""));
    assert!(event.matches("  "));
    assert!(event.matches("lunch"));
    assert!(event.matches("MUM"));
    assert!(!event.matches("dentist"));
  }
}
