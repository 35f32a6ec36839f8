use iced::{Subscription, Theme};

use crate::config::Config;
use crate::views;

pub struct App {
    calendar: views::Calendar,
}

#[derive(Debug, Clone)]
pub enum Message {
    Calendar(views::calendars::Message),
}

impl App {
    pub fn new(config: Config) -> (Self, iced::Task<Message>) {
        (
            Self {
                calendar: views::Calendar::new(&config),
            },
            iced::Task::none(),
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.calendar.subscription().map(Message::Calendar)
    }

    pub fn update(&mut self, message: Message) -> iced::Task<Message> {
        match message {
            Message::Calendar(calendar_message) => self.calendar.update(calendar_message),
        }

        iced::Task::none()
    }

    pub fn view(&self) -> iced::Element<Message> {
        self.calendar.view().map(Message::Calendar)
    }

    pub fn theme(&self) -> Theme {
        Theme::TokyoNight
    }
}
