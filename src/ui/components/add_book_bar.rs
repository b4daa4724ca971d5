//! Add-book form bar: title and release-year inputs plus the submit button
//!
//! The inputs are bound to the shared form, so they mirror whatever the edit
//! dialog last left in it.

use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element, Padding};

use crate::app::{BookForm, Message};
use crate::ui::theme;

/// Build the add-book bar
pub fn view<'a>(form: &'a BookForm, creating: bool) -> Element<'a, Message> {
    let title_input = text_input("Book Title", &form.title)
        .on_input(Message::TitleChanged)
        .on_submit(Message::AddBook)
        .padding(12)
        .size(15)
        .width(320)
        .style(theme::form_input);

    let year_input = text_input("Release Year", &form.release_year)
        .on_input(Message::ReleaseYearChanged)
        .on_submit(Message::AddBook)
        .padding(12)
        .size(15)
        .width(160)
        .style(theme::form_input);

    let add_btn = button(text(if creating { "Adding..." } else { "Add Book" }).size(14))
        .padding(Padding {
            top: 10.0,
            right: 24.0,
            bottom: 10.0,
            left: 24.0,
        })
        .style(theme::primary_button)
        .on_press_maybe((!creating).then_some(Message::AddBook));

    row![title_input, year_input, add_btn]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
}
