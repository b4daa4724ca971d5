//! Top header with the application title and display preferences

use iced::widget::{Space, checkbox, column, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Build the header row
pub fn view<'a>(dark_mode: bool) -> Element<'a, Message> {
    let title = text("Folio")
        .size(32)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let subtitle = text("Your book collection")
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let dark_toggle = checkbox("Dark mode", dark_mode).on_toggle(Message::UpdateDarkMode);

    row![
        column![title, subtitle].spacing(4),
        Space::new(Fill, 0),
        dark_toggle,
    ]
    .align_y(Alignment::Center)
    .into()
}
