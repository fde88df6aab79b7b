//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level
//! updates.

use serde::{Deserialize, Serialize};

use crate::minify::Language;
use crate::stats::DEFAULT_DECIMALS;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralSettings,

    /// JavaScript minifier settings.
    #[serde(default)]
    pub javascript: JavascriptSettings,

    /// HTML minifier settings.
    #[serde(default)]
    pub html: HtmlSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Language selected on last use; restored at startup.
    #[serde(default = "default_language")]
    pub last_language: Language,

    /// Decimal places in the size report.
    #[serde(default = "default_decimals")]
    pub stats_decimals: usize,
}

fn default_language() -> Language {
    Language::Javascript
}

fn default_decimals() -> usize {
    DEFAULT_DECIMALS
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            last_language: default_language(),
            stats_decimals: default_decimals(),
        }
    }
}

/// JavaScript minifier settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JavascriptSettings {
    /// Mangle top-level identifiers, not just inner scopes.
    #[serde(default = "default_true")]
    pub mangle_top_level: bool,
}

impl Default for JavascriptSettings {
    fn default() -> Self {
        Self {
            mangle_top_level: true,
        }
    }
}

/// HTML minifier settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlSettings {
    /// Strip HTML comments.
    #[serde(default = "default_true")]
    pub remove_comments: bool,

    /// Minify the content of `<script>` tags.
    #[serde(default = "default_true")]
    pub minify_embedded_js: bool,

    /// Minify the content of `<style>` tags.
    #[serde(default = "default_true")]
    pub minify_embedded_css: bool,
}

fn default_true() -> bool {
    true
}

impl Default for HtmlSettings {
    fn default() -> Self {
        Self {
            remove_comments: true,
            minify_embedded_js: true,
            minify_embedded_css: true,
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    General,
    Javascript,
    Html,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::General => "general",
            ConfigSection::Javascript => "javascript",
            ConfigSection::Html => "html",
        }
    }
}
