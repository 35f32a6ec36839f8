use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Border, Color};
use iced_font_awesome::fa_icon_solid;

use crate::calendar::{fg_from_bg_w3c, Event, Registry};

use super::{Message, BOLD, MODAL_WIDTH};

/// Read-only card for the selected event, painted in its calendar color.
pub fn view<'a>(event: &'a Event, registry: &'a Registry) -> iced::Element<'a, Message> {
    let color = registry.color(&event.calendar_id);
    let fg = fg_from_bg_w3c(color);

    let attendees = row![
        fa_icon_solid("users").size(18.0).color(fg),
        column![text("Attendees:").font(BOLD), text(event.attendees_label())],
    ]
    .spacing(8);

    let close = button(text("Close"))
        .padding([8, 16])
        .style(move |_, status| style_close(fg, status))
        .on_press(Message::CloseEvent);

    container(
        column![
            text(&event.title).size(26).font(BOLD),
            view_detail("clock", event.time_range(), fg),
            view_detail("location-dot", event.location.clone(), fg),
            view_detail("calendar", event.long_date(), fg),
            attendees,
            row![text("Organizer:").font(BOLD), text(&event.organizer)].spacing(4),
            row![text("Description:").font(BOLD), text(&event.description)].spacing(4),
            row![horizontal_space(), close],
        ]
        .spacing(12),
    )
    .width(MODAL_WIDTH)
    .padding(24)
    .style(move |_| style_card(color, fg))
    .into()
}

fn view_detail<'a>(icon: &'static str, value: String, fg: Color) -> iced::Element<'a, Message> {
    row![fa_icon_solid(icon).size(18.0).color(fg), text(value)]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

fn style_card(background: Color, fg: Color) -> container::Style {
    container::Style {
        background: Some(background.into()),
        text_color: Some(fg),
        border: Border::default().rounded(12),
        ..Default::default()
    }
}

fn style_close(fg: Color, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.7,
        _ => 0.5,
    };

    button::Style {
        background: Some(Color::WHITE.scale_alpha(alpha).into()),
        text_color: fg,
        border: Border::default().rounded(4),
        ..Default::default()
    }
}
