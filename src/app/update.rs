//! Message update handlers - thin dispatcher delegating to submodules

mod dialog;
mod settings;
mod shelf;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to the appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_shelf(&message) {
            return task;
        }
        if let Some(task) = self.handle_dialog(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
