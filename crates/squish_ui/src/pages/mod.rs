//! Application views.

pub mod main_window;
