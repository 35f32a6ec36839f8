use iced::widget::{column, container, row, text, Column, Space};
use iced::{Alignment, Border, Color};

use crate::calendar::{Calendar, Registry};

use super::{Message, BOLD};

/// The "My calendars" legend.
pub fn view(registry: &Registry) -> iced::Element<Message> {
    let calendars = registry.calendars().iter().map(view_calendar);

    column![
        text("My calendars").font(BOLD),
        Column::from_iter(calendars).spacing(8),
    ]
    .spacing(12)
    .into()
}

fn view_calendar(calendar: &Calendar) -> iced::Element<Message> {
    let color = calendar.color;

    row![
        container(Space::new(12, 12)).style(move |_| style_swatch(color)),
        text(&calendar.name).size(14),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn style_swatch(color: Color) -> container::Style {
    container::Style {
        background: Some(color.into()),
        border: Border::default().rounded(2),
        ..Default::default()
    }
}
