//! Book table component
//!
//! Header row plus one clickable row per book, in server order. Clicking a
//! row opens the edit dialog for that book.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::Book;
use crate::app::Message;
use crate::ui::theme::{self, MEDIUM_WEIGHT};

const YEAR_COLUMN_WIDTH: f32 = 140.0;

/// Build the book table view
pub fn view(books: &[Book], loading: bool) -> Element<'_, Message> {
    let header = row![
        text("Title")
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            })
            .width(Fill),
        text("Release Year")
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            })
            .width(YEAR_COLUMN_WIDTH),
    ]
    .padding(Padding {
        top: 8.0,
        right: 16.0,
        bottom: 8.0,
        left: 16.0,
    })
    .align_y(Alignment::Center);

    let divider = container(Space::new(Fill, 1)).style(|theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::divider(theme))),
            ..Default::default()
        }
    });

    if loading {
        return column![header, divider, placeholder("Loading books...")].into();
    }

    if books.is_empty() {
        return column![header, divider, placeholder("No books yet. Add one above.")].into();
    }

    let rows: Vec<Element<'_, Message>> = books.iter().map(view_book_row).collect();

    column![
        header,
        divider,
        scrollable(column(rows).spacing(4).padding(Padding {
            top: 8.0,
            right: 0.0,
            bottom: 8.0,
            left: 0.0,
        }))
        .height(Fill),
    ]
    .into()
}

/// Build a single clickable book row
fn view_book_row(book: &Book) -> Element<'_, Message> {
    let title = text(&book.title)
        .size(14)
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .width(Fill);

    let year = text(book.release_year.to_string())
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::dimmed_text(theme)),
        })
        .width(YEAR_COLUMN_WIDTH);

    button(
        row![title, year]
            .align_y(Alignment::Center)
            .padding(Padding {
                top: 12.0,
                right: 16.0,
                bottom: 12.0,
                left: 16.0,
            }),
    )
    .width(Fill)
    .style(theme::row_button)
    .on_press(Message::EditBook(book.id))
    .into()
}

/// Centered placeholder for the loading and empty states
fn placeholder(message: &str) -> Element<'_, Message> {
    container(text(message).size(14).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    }))
    .width(Fill)
    .height(200)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .into()
}
