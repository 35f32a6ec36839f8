use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer};

use crate::calendar::layout::Grid;
use crate::calendar::{Calendar, CalendarId, Event, EventId, Registry, DEFAULT_ORGANIZER};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid [grid] in {}: {grid:?}", .path.display())]
    Grid { path: PathBuf, grid: Grid },
}

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Date the calendar opens at, today if unset
    #[serde(default)]
    pub initial_date: Option<NaiveDate>,
    /// Zone used to decide what "today" is, the system zone if unset
    #[serde(default, deserialize_with = "deserialize_timezone")]
    pub timezone: Option<Tz>,
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
    /// Load the sample events
    #[serde(default = "default_seed")]
    pub seed: bool,
    #[serde(default)]
    pub grid: Grid,
    /// Replaces the built-in calendars when not empty
    #[serde(default)]
    pub calendars: Vec<Calendar>,
    /// Additional events loaded at start-up
    #[serde(default)]
    pub events: Vec<EventConfig>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EventConfig {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub calendar_id: CalendarId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default = "default_organizer")]
    pub organizer: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_date: None,
            timezone: None,
            scale_factor: default_scale_factor(),
            seed: default_seed(),
            grid: Grid::default(),
            calendars: Vec::default(),
            events: Vec::default(),
        }
    }
}

impl Config {
    pub fn registry(&self) -> Registry {
        if self.calendars.is_empty() {
            return Registry::default();
        }

        Registry::new(self.calendars.clone())
    }
}

impl EventConfig {
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            calendar_id: self.calendar_id,
            description: self.description,
            location: self.location,
            attendees: self.attendees,
            organizer: self.organizer,
        }
    }
}

/// Reads the configuration at `path`, or the defaults without one.
pub fn init(path: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let string = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;

    let config: Config = toml::from_str(&string).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })?;

    if !config.grid.is_valid() {
        return Err(ConfigError::Grid {
            path: path.to_owned(),
            grid: config.grid,
        });
    }

    Ok(config)
}

fn deserialize_timezone<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Tz>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|name| {
            name.parse::<Tz>()
                .map_err(|_| serde::de::Error::custom(format!("unknown timezone `{name}`")))
        })
        .transpose()
}

const fn default_scale_factor() -> f64 {
    1.0
}

const fn default_seed() -> bool {
    true
}

fn default_organizer() -> String {
    DEFAULT_ORGANIZER.to_owned()
}
