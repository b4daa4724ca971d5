// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, theme, widgets};

impl App {
    /// Build the single-window view
    pub fn view(&self) -> Element<'_, Message> {
        let header = components::header::view(self.core.settings.display.dark_mode);
        let add_bar = components::add_book_bar::view(&self.ui.form, self.shelf.creating);
        let table = components::book_table::view(&self.shelf.books, self.shelf.loading);

        let main_layout: Element<'_, Message> = container(
            column![header, add_bar, table]
                .spacing(24)
                .width(Fill)
                .height(Fill),
        )
        .width(Fill)
        .height(Fill)
        .padding(32)
        .style(theme::main_content)
        .into();

        // Edit dialog overlay (empty space if not visible)
        let dialog_overlay: Element<'_, Message> =
            if self.ui.dialog.open && self.ui.dialog.selected.is_some() {
                components::edit_dialog::view(&self.ui.form, self.ui.dialog.saving)
            } else {
                Space::new(0, 0).into()
            };

        // Toast overlay (empty space if not visible)
        let toast_overlay: Element<'_, Message> = if self.ui.toast_visible {
            if let Some(toast) = &self.ui.toast {
                container(widgets::view_toast(toast))
                    .width(Fill)
                    .padding(20)
                    .align_x(Alignment::Center)
                    .into()
            } else {
                Space::new(0, 0).into()
            }
        } else {
            Space::new(0, 0).into()
        };

        stack![main_layout, dialog_overlay, toast_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
