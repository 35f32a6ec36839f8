use chrono::NaiveDate;
use iced::widget::{button, column, container, horizontal_space, pick_list, row, text, text_input};
use iced::{Border, Length};

use crate::calendar::event_builder::EventBuilder;
use crate::calendar::{Calendar, CalendarId, Event, EventId, Registry};
use crate::logger::LogExt;

use super::{style_accent_button, BOLD, MODAL_WIDTH};

/// Draft of the "Create New Event" modal. The event lands on `date`, the
/// day that was current when the modal opened.
pub struct CreateEvent {
    builder: EventBuilder,
    date: NaiveDate,
}

#[derive(Debug, Clone)]
pub enum Message {
    Title(String),
    StartTime(String),
    EndTime(String),
    Calendar(CalendarId),
    Submit,
    Cancel,
}

/// What the page has to do after a form update.
#[derive(Debug)]
pub enum Action {
    None,
    Save(Event),
    Cancel,
}

impl CreateEvent {
    pub fn new(registry: &Registry, date: NaiveDate) -> Self {
        Self {
            builder: EventBuilder::new(registry),
            date,
        }
    }

    /// `next_id` is only called when the draft turns into an event.
    pub fn update(&mut self, message: Message, next_id: impl FnOnce() -> EventId) -> Action {
        match message {
            Message::Title(title) => self.builder.title = title,
            Message::StartTime(time) => self.builder.start_time = time,
            Message::EndTime(time) => self.builder.end_time = time,
            Message::Calendar(calendar_id) => self.builder.calendar_id = calendar_id,
            Message::Submit => {
                if !self.builder.is_valid() {
                    log::debug!("Not saving an event without title");
                    return Action::None;
                }

                return self
                    .builder
                    .build(next_id(), self.date)
                    .log_warn("Could not build event")
                    .map_or(Action::None, Action::Save);
            }
            Message::Cancel => return Action::Cancel,
        }

        Action::None
    }

    pub fn view<'a>(&'a self, registry: &'a Registry) -> iced::Element<'a, Message> {
        let title = column![
            text("Event Title").size(14),
            text_input("", &self.builder.title)
                .on_input(Message::Title)
                .on_submit(Message::Submit)
                .padding(8),
        ]
        .spacing(4);

        let times = row![
            column![
                text("Start Time").size(14),
                text_input("HH:MM", &self.builder.start_time)
                    .on_input(Message::StartTime)
                    .padding(8),
            ]
            .spacing(4),
            column![
                text("End Time").size(14),
                text_input("HH:MM", &self.builder.end_time)
                    .on_input(Message::EndTime)
                    .padding(8),
            ]
            .spacing(4),
        ]
        .spacing(16);

        let calendar = column![
            text("Calendar").size(14),
            pick_list(
                registry.calendars(),
                registry.get(&self.builder.calendar_id),
                |calendar: Calendar| Message::Calendar(calendar.id),
            )
            .width(Length::Fill)
            .padding(8),
        ]
        .spacing(4);

        let actions = row![
            horizontal_space(),
            button(text("Cancel"))
                .padding([8, 16])
                .style(button::text)
                .on_press(Message::Cancel),
            button(text("Save Event").font(BOLD))
                .padding([8, 16])
                .style(style_accent_button)
                .on_press_maybe(self.builder.is_valid().then_some(Message::Submit)),
        ]
        .spacing(16);

        container(
            column![
                text("Create New Event").size(24).font(BOLD),
                title,
                times,
                calendar,
                actions,
            ]
            .spacing(16),
        )
        .width(MODAL_WIDTH)
        .padding(24)
        .style(style_form)
        .into()
    }
}

fn style_form(theme: &iced::Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        border: Border::default().rounded(16),
        ..Default::default()
    }
}
