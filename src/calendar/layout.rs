use chrono::NaiveTime;
use serde::Deserialize;

use crate::logger::LogExt;

pub const GRID_START_HOUR: u32 = 8;
pub const GRID_SLOTS: u32 = 9;
pub const PIXELS_PER_HOUR: f32 = 80.0;
/// Zero length events still get a visible sliver
pub const MIN_BLOCK_HEIGHT: f32 = PIXELS_PER_HOUR / 4.0;

/// The hourly grid of the week view: `slots` rows of one hour each,
/// starting at `start_hour`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Grid {
  pub start_hour: u32,
  pub slots: u32,
  pub pixels_per_hour: f32,
}

/// Vertical placement of an event inside a day column, in pixels from the
/// top of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventBlock {
  pub offset: f32,
  pub height: f32,
}

impl Default for Grid {
  fn default() -> Self {
    Self {
      start_hour: GRID_START_HOUR,
      slots: GRID_SLOTS,
      pixels_per_hour: PIXELS_PER_HOUR,
    }
  }
}

impl Grid {
  pub fn height(&self) -> f32 {
    self.slots as f32 * self.pixels_per_hour
  }

  /// Hours labelled in the time column, one per slot
  pub fn hours(&self) -> impl Iterator<Item = u32> {
    self.start_hour..self.start_hour.saturating_add(self.slots)
  }

  /// At least one slot, all slots within a day and a positive row height
  pub fn is_valid(&self) -> bool {
    let within_day = self
      .start_hour
      .checked_add(self.slots)
      .is_some_and(|end| end <= 24);

    self.slots > 0 && within_day && self.pixels_per_hour.is_finite() && self.pixels_per_hour > 0.0
  }

  /// Unclipped placement of `start`..`end`. `None` if either time does
  /// not parse.
  pub fn block(&self, start: &str, end: &str) -> Option<EventBlock> {
    let start = fractional_hours(start)?;
    let end = fractional_hours(end)?;

    Some(EventBlock {
      offset: (start - self.start_hour as f32) * self.pixels_per_hour,
      height: (end - start) * self.pixels_per_hour,
    })
  }

  /// Placement as drawn: malformed times fall back to the first slot and
  /// the result is clipped to the grid. `None` means nothing of the event
  /// is visible.
  pub fn place(&self, start: &str, end: &str) -> Option<EventBlock> {
    let block = self
      .block(start, end)
      .log_warn(&format!("Malformed event time {start:?} - {end:?}"))
      .unwrap_or(EventBlock {
        offset: 0.0,
        height: self.pixels_per_hour,
      });

    block.clip(self.height())
  }
}

impl EventBlock {
  /// Restricts the block to `0..grid_height`. Blocks ending at or above
  /// the grid top, or starting at or below its bottom, are dropped before
  /// the minimum height applies.
  pub fn clip(self, grid_height: f32) -> Option<Self> {
    let end = self.offset + self.height.max(0.0);
    if self.offset >= grid_height || (self.offset < 0.0 && end <= 0.0) {
      return None;
    }

    let top = self.offset.max(0.0);
    let bottom = end.max(top + MIN_BLOCK_HEIGHT).min(grid_height);

    (bottom > top).then_some(Self {
      offset: top,
      height: bottom - top,
    })
  }
}

/// "HH:MM" as hours, `"10:30"` is `10.5`.
pub fn fractional_hours(time: &str) -> Option<f32> {
  let (hour, minute) = time.trim().split_once(':')?;
  let hour: u32 = hour.parse().ok()?;
  let minute: u32 = minute.parse().ok()?;

  Some(hour as f32 + minute as f32 / 60.0)
}

/// "8 AM", "12 PM", "4 PM"
pub fn hour_label(hour: u32) -> String {
  NaiveTime::from_hms_opt(hour % 24, 0, 0)
    .map(|time| time.format("%-I %p").to_string())
    .unwrap_or_default()
}
