//! Edit book dialog component

use iced::mouse::Interaction;
use iced::widget::{
    Space, button, column, container, mouse_area, opaque, row, stack, text, text_input,
};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{BookForm, Message};
use crate::ui::theme::{self, BOLD_WEIGHT};

const BUTTON_PADDING: Padding = Padding {
    top: 10.0,
    right: 24.0,
    bottom: 10.0,
    left: 24.0,
};

/// Build the edit book dialog over a dimmed backdrop
pub fn view<'a>(form: &'a BookForm, saving: bool) -> Element<'a, Message> {
    // Semi-transparent backdrop - clicking it cancels the edit
    let backdrop = mouse_area(
        container(Space::new(Fill, Fill))
            .width(Fill)
            .height(Fill)
            .style(|theme| iced::widget::container::Style {
                background: Some(iced::Background::Color(theme::overlay_backdrop(theme, 0.6))),
                ..Default::default()
            }),
    )
    .on_press(Message::CloseEditDialog);

    // Dialog content
    let title = text("Edit Book")
        .size(22)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let title_input = text_input("Book Title", &form.title)
        .on_input(Message::TitleChanged)
        .on_submit(Message::SaveBookEdits)
        .padding(12)
        .size(15)
        .style(theme::form_input);

    let year_input = text_input("Release Year", &form.release_year)
        .on_input(Message::ReleaseYearChanged)
        .on_submit(Message::SaveBookEdits)
        .padding(12)
        .size(15)
        .style(theme::form_input);

    let update_btn = button(text(if saving { "Saving..." } else { "Update" }).size(14))
        .padding(BUTTON_PADDING)
        .style(theme::primary_button)
        .on_press_maybe((!saving).then_some(Message::SaveBookEdits));

    let delete_btn = button(text("Delete").size(14))
        .padding(BUTTON_PADDING)
        .style(theme::danger_button)
        .on_press_maybe((!saving).then_some(Message::DeleteBook));

    let cancel_btn = button(text("Cancel").size(14))
        .padding(BUTTON_PADDING)
        .style(theme::secondary_button)
        .on_press(Message::CloseEditDialog);

    let buttons = row![
        Space::new(Fill, 0),
        update_btn,
        Space::new(12, 0),
        delete_btn,
        Space::new(12, 0),
        cancel_btn,
    ]
    .align_y(Alignment::Center);

    let dialog_content = column![
        title,
        Space::new(0, 20),
        title_input,
        Space::new(0, 12),
        year_input,
        Space::new(0, 24),
        buttons,
    ]
    .width(420)
    .padding(28);

    let dialog_box = container(dialog_content).style(|theme| iced::widget::container::Style {
        background: Some(iced::Background::Color(theme::surface_elevated(theme))),
        border: iced::Border {
            color: theme::divider(theme),
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            color: theme::shadow_color(theme),
            offset: iced::Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    });

    // Center the dialog in a container
    let dialog_centered = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill);

    // Stack backdrop and dialog
    let dialog_stack = stack![backdrop, dialog_centered].width(Fill).height(Fill);

    // Reset the cursor and capture stray clicks inside the dialog area
    let event_blocker = mouse_area(dialog_stack)
        .interaction(Interaction::Idle)
        .on_press(Message::Noop);

    // Block mouse events from propagating to the widgets underneath
    opaque(event_blocker).into()
}
