use chrono::{DateTime, NaiveDate, Utc};

use super::{CalendarId, Event, EventId, DEFAULT_ORGANIZER};

/// Events in insertion order. Lookups are linear scans.
#[derive(Debug, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
    // Highest id handed out or appended so far
    last_id: Option<EventId>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four sample events around July 16, 2025.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        for seed in SEEDS {
            let Some(date) = NaiveDate::from_ymd_opt(seed.date.0, seed.date.1, seed.date.2) else {
                log::warn!("Skipping seed event with invalid date: {}", seed.title);
                continue;
            };

            store.append(Event {
                id: EventId::new(seed.id),
                title: seed.title.to_owned(),
                date,
                start_time: seed.start_time.to_owned(),
                end_time: seed.end_time.to_owned(),
                calendar_id: CalendarId::from(seed.calendar_id),
                description: seed.description.to_owned(),
                location: seed.location.to_owned(),
                attendees: seed.attendees.iter().map(|name| (*name).to_owned()).collect(),
                organizer: DEFAULT_ORGANIZER.to_owned(),
            });
        }

        store
    }

    pub fn append(&mut self, event: Event) {
        self.last_id = self.last_id.max(Some(event.id));
        self.events.push(event);
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events dated `date`, in insertion order.
    pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |event| event.is_on(date))
    }

    pub fn events_between(&self, start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(move |event| event.is_between_dates(start, end))
    }

    /// Id for an event created at `now`. Falls back to one past the highest
    /// known id when the clock did not move forward.
    pub fn next_id(&self, now: DateTime<Utc>) -> EventId {
        let stamp = EventId::from_timestamp(now);

        match self.last_id {
            Some(last) if last >= stamp => last.next(),
            _ => stamp,
        }
    }

    /// Id for an event loaded at start-up, one past the highest known id.
    pub fn next_sequential_id(&self) -> EventId {
        self.last_id.map_or(EventId::new(1), EventId::next)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

struct Seed {
    id: u64,
    title: &'static str,
    date: (i32, u32, u32),
    start_time: &'static str,
    end_time: &'static str,
    calendar_id: &'static str,
    description: &'static str,
    location: &'static str,
    attendees: &'static [&'static str],
}

const SEEDS: [Seed; 4] = [
    Seed {
        id: 1,
        title: "Group Meeting",
        date: (2025, 7, 15),
        start_time: "10:00",
        end_time: "11:30",
        calendar_id: "work",
        description: "Weekly sync-up with the project team.",
        location: "Conference Room 4",
        attendees: &["Dev Team", "Product Manager"],
    },
    Seed {
        id: 2,
        title: "Coding Project",
        date: (2025, 7, 16),
        start_time: "13:00",
        end_time: "16:00",
        calendar_id: "project",
        description: "Dedicated time for working on the new feature.",
        location: "Home Office",
        attendees: &[],
    },
    Seed {
        id: 3,
        title: "Lunch with Mum",
        date: (2025, 7, 17),
        start_time: "12:00",
        end_time: "13:00",
        calendar_id: "family",
        description: "Catch up over lunch.",
        location: "The Corner Cafe",
        attendees: &["Mum"],
    },
    Seed {
        id: 4,
        title: "Chores",
        date: (2025, 7, 19),
        start_time: "09:00",
        end_time: "11:00",
        calendar_id: "personal",
        description: "Groceries and house cleaning.",
        location: "Home",
        attendees: &[],
    },
];

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, day).unwrap()
    }

    #[test]
    fn seeds_sample_week() {
        let store = EventStore::seeded();

        assert_eq!(store.len(), 4);
        assert_eq!(store.get(EventId::new(3)).map(|e| e.title.as_str()), Some("Lunch with Mum"));
        assert!(store
            .events_between(NaiveDate::MIN, NaiveDate::MAX)
            .all(|event| event.organizer == "You"));
    }

    #[test]
    fn filters_by_calendar_day_only() {
        let store = EventStore::seeded();

        let on_15th: Vec<_> = store.events_on(date(15)).map(|e| e.title.as_str()).collect();
        assert_eq!(on_15th, ["Group Meeting"]);

        assert!(store.events_on(date(14)).all(|e| e.title != "Group Meeting"));
        assert!(store.events_on(date(16)).all(|e| e.title != "Group Meeting"));
        assert_eq!(store.events_on(date(18)).count(), 0);
    }

    #[test]
    fn keeps_insertion_order_for_overlaps() {
        let mut store = EventStore::seeded();
        let mut overlap = store.get(EventId::new(1)).unwrap().clone();
        overlap.id = store.next_sequential_id();
        overlap.title = "Overlap".to_owned();
        store.append(overlap);

        let titles: Vec<_> = store.events_on(date(15)).map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Group Meeting", "Overlap"]);
    }

    #[test]
    fn events_between_is_inclusive() {
        let store = EventStore::seeded();

        assert_eq!(store.events_between(date(15), date(17)).count(), 3);
        assert_eq!(store.events_between(date(19), date(19)).count(), 1);
    }

    #[test]
    fn ids_are_timestamps_and_monotonic() {
        let mut store = EventStore::seeded();
        let now = Utc.with_ymd_and_hms(2025, 7, 16, 9, 30, 0).unwrap();

        let first = store.next_id(now);
        assert_eq!(first, EventId::new(now.timestamp_millis() as u64));

        let mut event = store.get(EventId::new(2)).unwrap().clone();
        event.id = first;
        store.append(event);

        // Same millisecond, the id still has to move forward
        let second = store.next_id(now);
        assert_eq!(second, first.next());
        assert!(second > first);
    }

    #[test]
    fn sequential_ids_follow_the_seeds() {
        assert_eq!(EventStore::new().next_sequential_id(), EventId::new(1));
        assert_eq!(EventStore::seeded().next_sequential_id(), EventId::new(5));
    }
}
