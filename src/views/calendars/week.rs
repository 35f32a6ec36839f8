use chrono::{Datelike, NaiveDate};
use iced::widget::{button, column, container, row, scrollable, text, Column, Space, Stack};
use iced::{Alignment, Border, Color, Length, Padding};

use super::{Dates, Message, BOLD, TEXT_ON_ACCENT};
use crate::calendar::layout::{hour_label, EventBlock, Grid};
use crate::calendar::{fg_from_bg_w3c, Event, EventStore, Registry, LOCALE, SERENE};

const TIME_COLUMN_WIDTH: f32 = 56.0;

/// Seven day columns, Sunday first, over the hourly grid. Events are drawn
/// in store order so later ones cover earlier overlapping ones.
pub fn view<'a>(
    store: &'a EventStore,
    registry: &'a Registry,
    grid: &'a Grid,
    dates: &Dates,
    search: &'a str,
) -> iced::Element<'a, Message> {
    let week = dates.navigator.week();

    let header = row![Space::with_width(TIME_COLUMN_WIDTH)]
        .extend(week.iter().map(|date| view_day_header(dates, *date)));

    let labels = Column::from_iter(grid.hours().map(|hour| {
        container(text(hour_label(hour)).size(12))
            .width(TIME_COLUMN_WIDTH)
            .height(grid.pixels_per_hour)
            .padding(Padding::ZERO.right(8.0))
            .align_x(Alignment::End)
            .into()
    }));

    let body = row![labels].extend(
        week.iter()
            .map(|date| view_day_column(store, registry, grid, *date, search)),
    );

    container(column![header, scrollable(body).height(Length::Fill)].spacing(8))
        .padding(8)
        .style(style_week)
        .into()
}

fn view_day_header<'a>(dates: &Dates, date: NaiveDate) -> iced::Element<'a, Message> {
    let selected = dates.is_selected(date);

    column![
        text(date.format_localized("%a", LOCALE).to_string()).size(12),
        container(text(date.day()).size(18))
            .padding([2, 8])
            .style(move |_| style_day_number(selected)),
    ]
    .spacing(4)
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .into()
}

fn view_day_column<'a>(
    store: &'a EventStore,
    registry: &'a Registry,
    grid: &'a Grid,
    date: NaiveDate,
    search: &'a str,
) -> iced::Element<'a, Message> {
    let slots = Column::from_iter(grid.hours().map(|_| {
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(grid.pixels_per_hour)
            .style(style_slot)
            .into()
    }));

    let blocks = store
        .events_on(date)
        .filter(move |event| event.matches(search))
        .filter_map(|event| {
            let block = grid.place(&event.start_time, &event.end_time)?;

            Some(view_event(event, registry, block))
        });

    Stack::with_children(std::iter::once(slots.into()).chain(blocks))
        .width(Length::Fill)
        .height(grid.height())
        .into()
}

fn view_event<'a>(event: &'a Event, registry: &Registry, block: EventBlock) -> iced::Element<'a, Message> {
    let color = registry.color(&event.calendar_id);
    let fg = fg_from_bg_w3c(color);

    let content = column![
        text(&event.title).size(12).font(BOLD),
        text(event.time_range()).size(10),
    ]
    .spacing(4);

    column![
        Space::with_height(block.offset),
        button(content)
            .width(Length::Fill)
            .height(block.height)
            .padding(4)
            .style(move |_, status| style_event(color, fg, status))
            .on_press(Message::SelectEvent(event.id)),
    ]
    .padding(Padding::ZERO.left(4.0).right(4.0))
    .into()
}

fn style_week(theme: &iced::Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.scale_alpha(0.6).into()),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

fn style_slot(theme: &iced::Theme) -> container::Style {
    container::Style {
        border: Border {
            width: 0.5,
            color: theme.palette().text.scale_alpha(0.1),
            ..Border::default()
        },
        ..Default::default()
    }
}

fn style_day_number(selected: bool) -> container::Style {
    if !selected {
        return container::Style::default();
    }

    container::Style {
        background: Some(SERENE.into()),
        text_color: Some(TEXT_ON_ACCENT),
        border: Border::default().rounded(16),
        ..Default::default()
    }
}

fn style_event(color: Color, fg: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => color.scale_alpha(0.85),
        _ => color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: fg,
        border: Border::default().rounded(6),
        ..Default::default()
    }
}
