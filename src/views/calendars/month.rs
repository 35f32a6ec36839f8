use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use iced::widget::{button, column, horizontal_space, row, text, Column, Row};
use iced::{Alignment, Border, Color, Font, Length};
use iced_font_awesome::fa_icon_solid;

use super::{style_icon_button, Dates, Message, BOLD, TEXT_ON_ACCENT};
use crate::calendar::navigator::WEEK_LENGTH;
use crate::calendar::{CalendarId, EventStore, Registry, LOCALE, SERENE};

const WEEKDAY_INITIALS: [&str; WEEK_LENGTH] = ["S", "M", "T", "W", "T", "F", "S"];
const DAY_SIZE: u16 = 28;

/// Mini month picker. Clicking a day makes it the current date.
pub fn view<'a>(store: &'a EventStore, registry: &'a Registry, dates: &Dates) -> iced::Element<'a, Message> {
    let navigator = &dates.navigator;

    let mut indicators: BTreeMap<NaiveDate, BTreeMap<&CalendarId, Color>> = BTreeMap::new();

    for event in store.events_between(navigator.month_start(), navigator.month_end()) {
        indicators
            .entry(event.date)
            .or_default()
            .entry(&event.calendar_id)
            .or_insert_with(|| registry.color(&event.calendar_id));
    }

    let controls = row![
        text(
            navigator
                .current()
                .format_localized("%B %Y", LOCALE)
                .to_string()
        )
        .font(BOLD)
        .width(Length::Fill)
        .wrapping(text::Wrapping::None),
        button(fa_icon_solid("chevron-left").size(14.0))
            .style(style_icon_button)
            .on_press(Message::PrevMonth),
        button(fa_icon_solid("chevron-right").size(14.0))
            .style(style_icon_button)
            .on_press(Message::NextMonth),
    ]
    .align_y(Alignment::Center);

    let weekdays = Row::from_iter(WEEKDAY_INITIALS.iter().map(|initial| {
        text(*initial)
            .size(12)
            .center()
            .width(Length::Fill)
            .into()
    }));

    let days: Vec<NaiveDate> = navigator.month_days().collect();
    let blanks = navigator.leading_blanks();
    let rows = (blanks + days.len()).div_ceil(WEEK_LENGTH);

    let month_grid = Column::from_iter((0..rows).map(|row| {
        Row::from_iter((0..WEEK_LENGTH).map(|col| {
            let cell = row * WEEK_LENGTH + col;

            match cell.checked_sub(blanks).and_then(|idx| days.get(idx)) {
                Some(date) => view_day(dates, *date, indicators.get(date)),
                None => horizontal_space().into(),
            }
        }))
        .spacing(2)
        .into()
    }))
    .spacing(2);

    column![controls, weekdays, month_grid].spacing(8).into()
}

fn view_day<'a>(
    dates: &Dates,
    date: NaiveDate,
    indicators: Option<&BTreeMap<&CalendarId, Color>>,
) -> iced::Element<'a, Message> {
    let selected = dates.is_selected(date);
    let today = dates.is_today(date);

    let dots = Row::from_iter(indicators.into_iter().flat_map(|map| map.values()).map(|color| {
        fa_icon_solid("circle").size(4.0).color(*color).into()
    }))
    .spacing(2);

    let content = column![
        text(date.day())
            .size(12)
            .font(if today { BOLD } else { Font::DEFAULT })
            .style(move |theme| style_day_text(theme, selected, today)),
        dots,
    ]
    .align_x(Alignment::Center);

    button(content)
        .width(Length::Fill)
        .height(DAY_SIZE)
        .padding(2)
        .style(move |theme, status| style_day(theme, status, selected))
        .on_press(Message::SelectDate(date))
        .into()
}

fn style_day_text(theme: &iced::Theme, selected: bool, today: bool) -> text::Style {
    let color = match (selected, today) {
        (true, _) => TEXT_ON_ACCENT,
        (false, true) => SERENE,
        _ => theme.palette().text,
    };

    text::Style { color: Some(color) }
}

fn style_day(theme: &iced::Theme, status: button::Status, selected: bool) -> button::Style {
    let palette = theme.extended_palette();

    let background = match (selected, status) {
        (true, _) => Some(SERENE.into()),
        (false, button::Status::Hovered | button::Status::Pressed) => {
            Some(palette.background.weak.color.into())
        }
        _ => None,
    };

    button::Style {
        background,
        border: Border::default().rounded(f32::from(DAY_SIZE) / 2.0),
        ..Default::default()
    }
}
