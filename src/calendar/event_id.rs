use std::fmt::{Display, Formatter, Result};

use chrono::{DateTime, Utc};

/// Identifier of an event. New ids are derived from the creation timestamp
/// in milliseconds; seeded events use small sequential numbers.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct EventId(u64);

impl EventId {
  pub const fn new(id: u64) -> Self {
    Self(id)
  }

  pub fn from_timestamp(now: DateTime<Utc>) -> Self {
    Self(u64::try_from(now.timestamp_millis()).unwrap_or_default())
  }

  pub const fn next(self) -> Self {
    Self(self.0.saturating_add(1))
  }
}

impl Display for EventId {
  fn fmt(&self, formatter: &mut Formatter) -> Result {
    formatter.write_fmt(format_args!("{}", self.0))
  }
}
