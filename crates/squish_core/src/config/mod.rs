//! Configuration handling.
//!
//! Settings live in a TOML file with one table per section. The manager
//! supports atomic whole-file saves and section-level updates.

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, GeneralSettings, HtmlSettings, JavascriptSettings, Settings};
