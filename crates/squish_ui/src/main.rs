//! Squish - Main entry point
//!
//! Initializes application-level logging and launches the iced
//! application. Config loading happens in the application boot so a broken
//! settings file can never prevent startup.

use squish_core::logging::{init_tracing, LogLevel};

mod app;
mod model;
mod pages;
mod theme;
mod workers;

use app::App;

fn main() -> iced::Result {
    init_tracing(LogLevel::Info);

    tracing::info!("Squish starting");
    tracing::info!("Core version: {}", squish_core::version());

    iced::application(App::boot, App::update, App::view)
        .title(App::TITLE)
        .theme(App::theme)
        .window_size(iced::Size::new(960.0, 720.0))
        .run()
}
