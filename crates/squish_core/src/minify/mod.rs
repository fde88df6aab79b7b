//! Minification dispatch.
//!
//! Each supported language maps to an external minifier crate treated as an
//! opaque capability behind the [`Minifier`] trait:
//!
//! - JavaScript → oxc (parse, compress, mangle, codegen)
//! - CSS → lightningcss
//! - HTML → minify-html (with embedded JS/CSS minified recursively)
//!
//! Empty or whitespace-only input is rejected by the caller before dispatch,
//! not here.

mod css;
mod html;
mod js;

pub use css::CssMinifier;
pub use html::HtmlMinifier;
pub use js::JsMinifier;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Settings;

/// Language tag selecting the minification backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Css,
    Html,
}

impl Language {
    /// All selectable languages, in picker order.
    pub const ALL: [Language; 3] = [Language::Javascript, Language::Css, Language::Html];

    /// Lowercase tag used in the settings file.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Css => "css",
            Language::Html => "html",
        }
    }

    /// Parse a lowercase tag back into a language.
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag {
            "javascript" => Some(Language::Javascript),
            "css" => Some(Language::Css),
            "html" => Some(Language::Html),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Javascript => write!(f, "JavaScript"),
            Language::Css => write!(f, "CSS"),
            Language::Html => write!(f, "HTML"),
        }
    }
}

/// Errors that can occur during minification.
///
/// The UI renders these through `Display`, so every variant carries the
/// underlying library's message text.
#[derive(Error, Debug)]
pub enum MinifyError {
    /// The JavaScript parser rejected the input.
    #[error("JavaScript parse failed: {0}")]
    JsParse(String),

    /// The CSS parser rejected the input.
    #[error("CSS parse failed: {0}")]
    CssParse(String),

    /// The CSS minifier rejected the parsed stylesheet.
    #[error("CSS minify failed: {0}")]
    CssMinify(String),

    /// The minified stylesheet could not be printed.
    #[error("CSS print failed: {0}")]
    CssPrint(String),

    /// The HTML minifier produced bytes that are not valid UTF-8.
    #[error("HTML minifier produced invalid UTF-8: {0}")]
    HtmlEncoding(#[from] std::string::FromUtf8Error),
}

/// A minification capability for one language.
pub trait Minifier {
    /// Minify `source`, returning the minified text or the library's error.
    fn minify(&self, source: &str) -> Result<String, MinifyError>;
}

/// Dispatch `source` to the minifier selected by `language`.
pub fn minify(language: Language, source: &str, settings: &Settings) -> Result<String, MinifyError> {
    tracing::debug!(language = language.tag(), bytes = source.len(), "minifying");

    let result = match language {
        Language::Javascript => JsMinifier::from_settings(&settings.javascript).minify(source),
        Language::Css => CssMinifier.minify(source),
        Language::Html => HtmlMinifier::from_settings(&settings.html).minify(source),
    };

    match &result {
        Ok(minified) => {
            tracing::debug!(bytes = minified.len(), "minified");
        }
        Err(e) => {
            tracing::debug!(error = %e, "minification failed");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_tag(language.tag()), Some(language));
        }
        assert_eq!(Language::from_tag("zig"), None);
    }

    #[test]
    fn display_labels() {
        assert_eq!(Language::Javascript.to_string(), "JavaScript");
        assert_eq!(Language::Css.to_string(), "CSS");
        assert_eq!(Language::Html.to_string(), "HTML");
    }

    #[test]
    fn dispatch_css_shrinks() {
        let settings = Settings::default();
        let out = minify(Language::Css, "a { color:  red; }", &settings).unwrap();
        assert!(out.len() < "a { color:  red; }".len());
        assert!(!out.contains("  "));
    }

    #[test]
    fn dispatch_invalid_js_surfaces_message() {
        let settings = Settings::default();
        let err = minify(Language::Javascript, "function {", &settings).unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn dispatch_html_strips_comments() {
        let settings = Settings::default();
        let out = minify(Language::Html, "<p>hi</p>  <!-- gone -->", &settings).unwrap();
        assert!(!out.contains("gone"));
        assert!(out.contains("hi"));
    }
}
