use chrono::NaiveDate;

use super::{CalendarId, Event, EventId, Registry, DEFAULT_ORGANIZER};

pub const DEFAULT_START_TIME: &str = "12:00";
pub const DEFAULT_END_TIME: &str = "13:00";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EventBuilderError {
    #[error("an event needs a title")]
    EmptyTitle,
}

/// What the creation form collects. Everything else on an [`Event`] gets a
/// default when the event is built.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBuilder {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub calendar_id: CalendarId,
}

impl EventBuilder {
    /// Form defaults: no title, 12:00 - 13:00, first calendar of the
    /// registry (an empty id if there is none).
    pub fn new(registry: &Registry) -> Self {
        Self {
            title: String::new(),
            start_time: DEFAULT_START_TIME.to_owned(),
            end_time: DEFAULT_END_TIME.to_owned(),
            calendar_id: registry
                .first()
                .map(|calendar| calendar.id.clone())
                .unwrap_or_default(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Builds the event.
    ///
    /// # Errors
    /// Returns an error if the title is blank.
    pub fn build(&self, id: EventId, date: NaiveDate) -> Result<Event, EventBuilderError> {
        if !self.is_valid() {
            return Err(EventBuilderError::EmptyTitle);
        }

        Ok(Event {
            id,
            title: self.title.trim().to_owned(),
            date,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            calendar_id: self.calendar_id.clone(),
            description: String::new(),
            location: String::new(),
            attendees: Vec::new(),
            organizer: DEFAULT_ORGANIZER.to_owned(),
        })
    }
}
