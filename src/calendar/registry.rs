use iced::Color;

use super::{Calendar, CalendarId, BLOSSOM, FALLBACK_COLOR, LATTE, PISTACHIO, SERENE};

/// The fixed set of calendars events can belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    calendars: Vec<Calendar>,
}

impl Registry {
    pub const fn new(calendars: Vec<Calendar>) -> Self {
        Self { calendars }
    }

    pub fn calendars(&self) -> &[Calendar] {
        &self.calendars
    }

    pub fn get(&self, id: &CalendarId) -> Option<&Calendar> {
        self.calendars.iter().find(|calendar| &calendar.id == id)
    }

    /// The calendar new events default to.
    pub fn first(&self) -> Option<&Calendar> {
        self.calendars.first()
    }

    /// Color of the calendar, or [`FALLBACK_COLOR`] for a dangling id.
    pub fn color(&self, id: &CalendarId) -> Color {
        self.get(id).map_or(FALLBACK_COLOR, |calendar| calendar.color)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(vec![
            Calendar::new("work", "Work", PISTACHIO),
            Calendar::new("personal", "Personal", BLOSSOM),
            Calendar::new("family", "Family", LATTE),
            Calendar::new("project", "Coding Project", SERENE),
        ])
    }
}
