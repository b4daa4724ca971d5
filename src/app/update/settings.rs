//! Settings message handlers

use iced::Task;
use tracing::warn;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle settings messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                if let Err(err) = self.core.settings.save() {
                    warn!("failed to persist settings: {err:#}");
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
