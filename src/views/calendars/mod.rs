use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
    text_input, vertical_space,
};
use iced::{color, font, keyboard, Alignment, Border, Color, Font, Length};
use iced_font_awesome::fa_icon_solid;

use crate::calendar::layout::Grid;
use crate::calendar::navigator::Navigator;
use crate::calendar::{EventId, EventStore, Registry, LOCALE, SERENE};
use crate::config::Config;
use crate::logger::LogExt;

mod create;
mod event;
mod month;
mod selection;
mod week;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};
const SIDEBAR_WIDTH: u16 = 256;
const MODAL_WIDTH: u16 = 448;
const TEXT_ON_ACCENT: Color = color!(0x1f2937);
/// Initial shown in the header badge
const AVATAR: &str = "V";

/// The whole calendar page. Owns every piece of state; nothing outlives it.
pub struct Calendar {
    store: EventStore,
    registry: Registry,
    grid: Grid,
    timezone: Option<Tz>,
    dates: Dates,
    search: String,
    selected: Option<EventId>,
    create: Option<create::CreateEvent>,
}

pub struct Dates {
    pub now: NaiveDateTime,
    pub navigator: Navigator,
}

impl Dates {
    pub fn is_today(&self, date: NaiveDate) -> bool {
        date == self.now.date()
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.navigator.is_selected(date)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NextDay(Instant),
    Today,
    PrevWeek,
    NextWeek,
    PrevMonth,
    NextMonth,
    SelectDate(NaiveDate),
    Search(String),
    SelectEvent(EventId),
    CloseEvent,
    OpenCreate,
    Create(create::Message),
    /// Escape closes whatever overlay is on top
    Dismiss,
}

impl Calendar {
    pub fn new(config: &Config) -> Self {
        let registry = config.registry();
        let mut store = if config.seed {
            EventStore::seeded()
        } else {
            EventStore::new()
        };

        for event in &config.events {
            let id = store.next_sequential_id();
            store.append(event.clone().into_event(id));
        }

        if store.is_empty() {
            log::info!("Starting without events");
        }

        log::info!(
            "Loaded {} events, {} calendars",
            store.len(),
            registry.calendars().len()
        );

        let now = local_now(config.timezone);
        let current = config.initial_date.unwrap_or_else(|| now.date());

        Self {
            store,
            registry,
            grid: config.grid,
            timezone: config.timezone,
            dates: Dates {
                now,
                navigator: Navigator::new(current),
            },
            search: String::new(),
            selected: None,
            create: None,
        }
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        iced::Subscription::batch([
            iced::time::every(until_next_day(self.dates.now)).map(Message::NextDay),
            keyboard::on_key_press(|key, _| match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Dismiss),
                _ => None,
            }),
        ])
    }

    pub fn update(&mut self, message: Message) {
        let navigator = &mut self.dates.navigator;

        match message {
            Message::NextDay(_) => {
                self.dates.now = local_now(self.timezone);
            }
            Message::Today => {
                self.dates.now = local_now(self.timezone);
                let date = navigator.today(self.dates.now.date());
                log::debug!("Jumped to today, {date}");
            }
            Message::PrevWeek => {
                navigator.prev_week();
                log::debug!("Showing {} - {}", navigator.week_start(), navigator.week_end());
            }
            Message::NextWeek => {
                navigator.next_week();
                log::debug!("Showing {} - {}", navigator.week_start(), navigator.week_end());
            }
            Message::PrevMonth => {
                let date = navigator.prev_month();
                log::debug!("Showing month of {date}");
            }
            Message::NextMonth => {
                let date = navigator.next_month();
                log::debug!("Showing month of {date}");
            }
            Message::SelectDate(date) => {
                navigator.select(date);
            }
            Message::Search(query) => {
                self.search = query;
            }
            Message::SelectEvent(id) => {
                self.selected = self
                    .store
                    .get(id)
                    .map(|event| event.id)
                    .log_debug(&format!("Event {id} is not in the store"));
            }
            Message::CloseEvent => {
                self.selected = None;
            }
            Message::OpenCreate => {
                self.selected = None;
                self.create = Some(create::CreateEvent::new(&self.registry, navigator.current()));
            }
            Message::Create(message) => self.update_create(message),
            Message::Dismiss => {
                if self.create.take().is_none() {
                    self.selected = None;
                }
            }
        }
    }

    fn update_create(&mut self, message: create::Message) {
        let Some(form) = self.create.as_mut() else {
            return;
        };

        let store = &self.store;

        match form.update(message, || store.next_id(Utc::now())) {
            create::Action::None => {}
            create::Action::Cancel => {
                self.create = None;
            }
            create::Action::Save(event) => {
                log::info!(
                    "Created event {} {:?} on {} in {}",
                    event.id,
                    event.title,
                    event.date,
                    event.calendar_id
                );

                self.store.append(event);
                self.create = None;
            }
        }
    }

    pub fn view(&self) -> iced::Element<Message> {
        let page = column![
            self.view_header(),
            row![self.view_sidebar(), self.view_main()].height(Length::Fill),
        ];

        if let Some(form) = &self.create {
            return modal(
                page,
                form.view(&self.registry).map(Message::Create),
                Message::Create(create::Message::Cancel),
            );
        }

        match self.selected.and_then(|id| self.store.get(id)) {
            Some(selected) => modal(
                page,
                event::view(selected, &self.registry),
                Message::CloseEvent,
            ),
            None => page.into(),
        }
    }

    fn view_header(&self) -> iced::Element<Message> {
        row![
            fa_icon_solid("bars").size(22.0),
            text("Calendar").size(24).font(BOLD),
            horizontal_space(),
            text_input("Search", &self.search)
                .on_input(Message::Search)
                .padding(8)
                .width(240),
            fa_icon_solid("gear").size(22.0),
            container(text(AVATAR).size(20).font(BOLD).color(TEXT_ON_ACCENT))
                .center(40)
                .style(style_avatar),
        ]
        .spacing(16)
        .padding([16, 32])
        .align_y(Alignment::Center)
        .into()
    }

    fn view_sidebar(&self) -> iced::Element<Message> {
        let create = button(
            row![fa_icon_solid("plus").size(16.0), text("Create").font(BOLD)]
                .spacing(8)
                .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(12)
        .style(style_accent_button)
        .on_press(Message::OpenCreate);

        let floating = button(fa_icon_solid("plus").size(22.0))
            .padding(16)
            .style(style_accent_button)
            .on_press(Message::OpenCreate);

        column![
            create,
            month::view(&self.store, &self.registry, &self.dates),
            selection::view(&self.registry),
            vertical_space(),
            floating,
        ]
        .spacing(24)
        .padding(16)
        .width(SIDEBAR_WIDTH)
        .into()
    }

    fn view_main(&self) -> iced::Element<Message> {
        let current = self.dates.navigator.current();

        let controls = row![
            button(text("Today").font(BOLD))
                .padding([8, 16])
                .style(style_accent_button)
                .on_press(Message::Today),
            button(fa_icon_solid("chevron-left").size(16.0))
                .style(style_icon_button)
                .on_press(Message::PrevWeek),
            button(fa_icon_solid("chevron-right").size(16.0))
                .style(style_icon_button)
                .on_press(Message::NextWeek),
            text(current.format_localized("%B %-d, %Y", LOCALE).to_string())
                .size(20)
                .font(BOLD),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        column![
            controls,
            week::view(
                &self.store,
                &self.registry,
                &self.grid,
                &self.dates,
                &self.search
            ),
        ]
        .spacing(16)
        .padding(16)
        .width(Length::Fill)
        .into()
    }
}

/// Draws `content` centered over a dimmed `base`. Clicking the backdrop
/// sends `on_blur`.
fn modal<'a>(
    base: impl Into<iced::Element<'a, Message>>,
    content: iced::Element<'a, Message>,
    on_blur: Message,
) -> iced::Element<'a, Message> {
    stack![
        base.into(),
        opaque(mouse_area(center(opaque(content)).style(style_backdrop)).on_press(on_blur)),
    ]
    .into()
}

fn local_now(timezone: Option<Tz>) -> NaiveDateTime {
    match timezone {
        Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
        None => Local::now().naive_local(),
    }
}

fn until_next_day(date: NaiveDateTime) -> Duration {
    date.date()
        .succ_opt()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .and_then(|next_day| (next_day - date).to_std().ok())
        .map_or(Duration::from_secs(3600), |until| {
            until + Duration::from_secs(30)
        })
}

fn style_backdrop(_: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Color::BLACK.scale_alpha(0.6).into()),
        ..Default::default()
    }
}

fn style_avatar(_: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(SERENE.into()),
        text_color: Some(TEXT_ON_ACCENT),
        border: Border::default().rounded(20),
        ..Default::default()
    }
}

fn style_accent_button(_: &iced::Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => SERENE.scale_alpha(0.85),
        _ => SERENE,
    };

    button::Style {
        background: Some(background.into()),
        text_color: TEXT_ON_ACCENT,
        border: Border::default().rounded(20),
        ..Default::default()
    }
}

fn style_icon_button(theme: &iced::Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(palette.background.weak.color.into())
            }
            _ => None,
        },
        text_color: palette.background.base.text,
        border: Border::default().rounded(16),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarId;
    use crate::config::EventConfig;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    fn page() -> Calendar {
        Calendar::new(&Config {
            initial_date: Some(date(7, 16)),
            ..Config::default()
        })
    }

    #[test]
    fn starts_at_configured_date_with_seeds() {
        let page = page();

        assert_eq!(page.dates.navigator.current(), date(7, 16));
        assert_eq!(page.store.len(), 4);
        assert_eq!(page.selected, None);
        assert!(page.create.is_none());
    }

    #[test]
    fn header_shows_avatar_badge() {
        let mut page = page();
        page.update(Message::Search("stand".to_owned()));

        assert_eq!(AVATAR, "V");
        let _header = page.view_header();
        let _page = page.view();
    }

    #[test]
    fn closing_details_clears_selection() {
        let mut page = page();

        page.update(Message::SelectEvent(EventId::new(2)));
        assert_eq!(page.selected, Some(EventId::new(2)));

        page.update(Message::CloseEvent);
        assert_eq!(page.selected, None);
    }

    #[test]
    fn unknown_events_are_not_selected() {
        let mut page = page();

        page.update(Message::SelectEvent(EventId::new(99)));
        assert_eq!(page.selected, None);
    }

    #[test]
    fn saving_dentist_appends_and_closes() {
        let mut page = page();

        page.update(Message::OpenCreate);
        page.update(Message::Create(create::Message::Title("Dentist".to_owned())));
        page.update(Message::Create(create::Message::Submit));

        assert!(page.create.is_none());
        assert_eq!(page.store.len(), 5);

        let dentist = page.store.events_on(date(7, 16)).last().unwrap();
        assert_eq!(dentist.title, "Dentist");
        assert_eq!(dentist.calendar_id, CalendarId::from("work"));
        assert_eq!(dentist.organizer, "You");
        assert!(dentist.id > EventId::new(4));
    }

    #[test]
    fn blank_title_keeps_form_open() {
        let mut page = page();

        page.update(Message::OpenCreate);
        page.update(Message::Create(create::Message::Submit));

        assert!(page.create.is_some());
        assert_eq!(page.store.len(), 4);
    }

    #[test]
    fn cancel_discards_draft() {
        let mut page = page();

        page.update(Message::OpenCreate);
        page.update(Message::Create(create::Message::Title("Dentist".to_owned())));
        page.update(Message::Create(create::Message::Cancel));

        assert!(page.create.is_none());
        assert_eq!(page.store.len(), 4);

        // A reopened form starts from scratch
        page.update(Message::OpenCreate);
        page.update(Message::Create(create::Message::Submit));
        assert_eq!(page.store.len(), 4);
    }

    #[test]
    fn escape_closes_topmost_overlay() {
        let mut page = page();

        page.update(Message::SelectEvent(EventId::new(1)));
        page.update(Message::Dismiss);
        assert_eq!(page.selected, None);

        page.update(Message::OpenCreate);
        page.update(Message::Dismiss);
        assert!(page.create.is_none());
    }

    #[test]
    fn navigation_moves_current_date() {
        let mut page = page();

        page.update(Message::NextWeek);
        assert_eq!(page.dates.navigator.current(), date(7, 23));

        page.update(Message::PrevMonth);
        assert_eq!(page.dates.navigator.current(), date(6, 23));

        page.update(Message::SelectDate(date(6, 2)));
        assert!(page.dates.is_selected(date(6, 2)));

        page.update(Message::Today);
        assert_eq!(page.dates.navigator.current(), page.dates.now.date());
    }

    #[test]
    fn new_events_use_current_date() {
        let mut page = page();

        page.update(Message::NextMonth);
        page.update(Message::OpenCreate);
        page.update(Message::Create(create::Message::Title("Review".to_owned())));
        page.update(Message::Create(create::Message::Submit));

        assert_eq!(page.store.events_on(date(8, 16)).count(), 1);
    }

    #[test]
    fn config_events_follow_the_seeds() {
        let page = Calendar::new(&Config {
            initial_date: Some(date(7, 16)),
            events: vec![EventConfig {
                title: "Standup".to_owned(),
                date: date(7, 14),
                start_time: "09:00".to_owned(),
                end_time: "09:15".to_owned(),
                calendar_id: CalendarId::from("work"),
                description: String::new(),
                location: String::new(),
                attendees: Vec::new(),
                organizer: "You".to_owned(),
            }],
            ..Config::default()
        });

        assert_eq!(page.store.len(), 5);
        assert_eq!(
            page.store.get(EventId::new(5)).map(|e| e.title.as_str()),
            Some("Standup")
        );
    }

    #[test]
    fn wakes_up_after_midnight() {
        let evening = date(7, 16).and_hms_opt(23, 59, 0).unwrap();

        assert_eq!(until_next_day(evening), Duration::from_secs(90));
    }
}
