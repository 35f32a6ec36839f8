use std::fmt::{Display, Formatter};

use iced::{color, Color};
use serde::{Deserialize, Deserializer};

/// Decoration for events whose calendar is not in the registry.
pub const FALLBACK_COLOR: Color = color!(0x6b7280);

pub const PISTACHIO: Color = color!(0xb5d99c);
pub const BLOSSOM: Color = color!(0xf7c5d0);
pub const LATTE: Color = color!(0xe6d3b3);
pub const SERENE: Color = color!(0xa8c8e8);

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct CalendarId(String);

impl CalendarId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CalendarId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Display for CalendarId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Calendar {
    pub id: CalendarId,
    pub name: String,
    #[serde(deserialize_with = "deserialize_color")]
    pub color: Color,
}

impl Calendar {
    pub fn new(id: impl Into<CalendarId>, name: impl Into<String>, color: Color) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
        }
    }
}

impl PartialEq for Calendar {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

// The creation form's calendar picker lists calendars by name
impl Display for Calendar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Picks black or white text, whichever reads better on `bg_color`.
pub fn fg_from_bg_w3c(bg_color: Color) -> Color {
    let [red, green, blue] = [bg_color.r, bg_color.g, bg_color.b].map(|c| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    });

    if red.mul_add(0.2126, green.mul_add(0.7152, blue * 0.0722)) > 0.179 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// Parses `#rrggbb` (the leading `#` is optional).
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#').unwrap_or(value);

    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn deserialize_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
    let value = String::deserialize(deserializer)?;

    parse_hex_color(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid color `{value}`, expected #rrggbb")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#ffffff"), Some(Color::WHITE));
        assert_eq!(parse_hex_color("000000"), Some(Color::BLACK));
        assert_eq!(parse_hex_color("#b5d99c"), Some(Color::from_rgb8(0xb5, 0xd9, 0x9c)));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color("bg-serene"), None);
        assert_eq!(parse_hex_color("#ffäfff"), None);
    }

    #[test]
    fn picks_readable_foreground() {
        assert_eq!(fg_from_bg_w3c(PISTACHIO), Color::BLACK);
        assert_eq!(fg_from_bg_w3c(Color::from_rgb8(0x1f, 0x29, 0x37)), Color::WHITE);
    }

    #[test]
    fn calendars_compare_by_id() {
        let work = Calendar::new("work", "Work", PISTACHIO);
        let renamed = Calendar::new("work", "Office", SERENE);

        assert_eq!(work, renamed);
        assert_eq!(work.to_string(), "Work");
    }
}
