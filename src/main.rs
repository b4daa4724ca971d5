//! Folio - a small book collection manager
//! Built with iced, backed by a books REST API

mod api;
mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::title, app::App::update, app::App::view)
        .theme(app::App::theme)
        .window_size(iced::Size::new(880.0, 640.0))
        .run_with(app::App::new)
}
