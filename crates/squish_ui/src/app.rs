//! Application state and message routing.
//!
//! All user actions and worker responses flow through one `Message` enum
//! and one `update` function. State transitions live in [`MainModel`];
//! this module only wires them to background tasks and the settings file.

use std::path::PathBuf;
use std::time::Duration;

use iced::widget::text_editor;
use iced::{Element, Task, Theme};

use squish_core::config::{ConfigManager, ConfigSection};
use squish_core::minify::Language;

use crate::model::{MainModel, MinifyOutcome};
use crate::{pages, workers};

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    // === User actions from UI ===
    /// Edit action in the input editor
    InputEdited(text_editor::Action),

    /// Language picked in the selector
    LanguageSelected(Language),

    /// Minify button clicked
    MinifyRequested,

    /// Copy button clicked
    CopyRequested,

    // === Worker responses ===
    /// Minify task completed
    MinifyFinished(Result<MinifyOutcome, String>),

    /// Clipboard write completed
    CopyFinished(Result<(), String>),

    /// Copy confirmation label timed out
    CopyLabelReset,
}

/// Application component: window model plus the input editor and config.
pub struct App {
    config: ConfigManager,
    pub model: MainModel,
    pub input: text_editor::Content,
}

impl App {
    pub const TITLE: &'static str = "Squish - Code Minifier";

    /// Build the initial application state.
    ///
    /// A broken config file is logged and replaced with defaults; startup
    /// never fails because of it.
    pub fn boot() -> (Self, Task<Message>) {
        let config_path = default_config_path();
        let mut config = ConfigManager::new(&config_path);

        if let Err(e) = config.load_or_create() {
            tracing::warn!("Failed to load config: {}. Using defaults.", e);
        }

        tracing::info!("Config: {}", config_path.display());

        let language = config.settings().general.last_language;

        let app = Self {
            config,
            model: MainModel::new(language),
            input: text_editor::Content::new(),
        };

        (app, Task::none())
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Stats line under the output pane.
    pub fn stats_line(&self) -> String {
        self.model
            .stats_line(self.config.settings().general.stats_decimals)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputEdited(action) => {
                self.input.perform(action);
                Task::none()
            }

            Message::LanguageSelected(language) => {
                self.model.language = language;
                self.config.settings_mut().general.last_language = language;
                if let Err(e) = self.config.update_section(ConfigSection::General) {
                    tracing::warn!("Failed to persist language selection: {}", e);
                }
                Task::none()
            }

            Message::MinifyRequested => match self.model.request_minify(&self.input.text()) {
                Some(request) => {
                    let settings = self.config.settings().clone();
                    Task::perform(
                        workers::run_minify(request, settings),
                        Message::MinifyFinished,
                    )
                }
                None => Task::none(),
            },

            Message::MinifyFinished(result) => {
                if let Err(message) = &result {
                    tracing::error!("Minification failed: {}", message);
                }
                self.model.finish_minify(result);
                Task::none()
            }

            Message::CopyRequested => match self.model.request_copy() {
                Some(text) => {
                    Task::perform(workers::copy_to_clipboard(text), Message::CopyFinished)
                }
                None => Task::none(),
            },

            Message::CopyFinished(Ok(())) => {
                self.model.copy_confirmed = true;
                Task::perform(tokio::time::sleep(Duration::from_secs(2)), |_| {
                    Message::CopyLabelReset
                })
            }

            Message::CopyFinished(Err(e)) => {
                // Button label stays unchanged; failure is only logged.
                tracing::error!("Failed to copy to clipboard: {}", e);
                Task::none()
            }

            Message::CopyLabelReset => {
                self.model.copy_confirmed = false;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        pages::main_window::view(self)
    }
}
