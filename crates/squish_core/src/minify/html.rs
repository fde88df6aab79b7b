//! HTML minification via minify-html.
//!
//! Whitespace collapsing is minify-html's default behaviour; the
//! configurable knobs are comment removal and whether embedded `<script>`
//! and `<style>` content is minified too.

use minify_html::Cfg;

use super::{Minifier, MinifyError};
use crate::config::HtmlSettings;

/// HTML minifier backed by minify-html.
#[derive(Debug, Clone, Copy)]
pub struct HtmlMinifier {
    pub remove_comments: bool,
    pub minify_embedded_js: bool,
    pub minify_embedded_css: bool,
}

impl HtmlMinifier {
    pub fn from_settings(settings: &HtmlSettings) -> Self {
        Self {
            remove_comments: settings.remove_comments,
            minify_embedded_js: settings.minify_embedded_js,
            minify_embedded_css: settings.minify_embedded_css,
        }
    }
}

impl Default for HtmlMinifier {
    fn default() -> Self {
        Self {
            remove_comments: true,
            minify_embedded_js: true,
            minify_embedded_css: true,
        }
    }
}

impl Minifier for HtmlMinifier {
    fn minify(&self, source: &str) -> Result<String, MinifyError> {
        let cfg = Cfg {
            keep_comments: !self.remove_comments,
            minify_js: self.minify_embedded_js,
            minify_css: self.minify_embedded_css,
            ..Cfg::default()
        };

        let minified = minify_html::minify(source.as_bytes(), &cfg);
        Ok(String::from_utf8(minified)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_comments_and_collapses_whitespace() {
        let out = HtmlMinifier::default()
            .minify("<p>\n    hello   world\n</p>\n<!-- secret -->")
            .unwrap();
        assert!(!out.contains("secret"));
        assert!(!out.contains("\n    "));
    }

    #[test]
    fn comments_survive_when_configured() {
        let minifier = HtmlMinifier {
            remove_comments: false,
            ..HtmlMinifier::default()
        };
        let out = minifier.minify("<p>hi</p><!-- keep me -->").unwrap();
        assert!(out.contains("keep me"));
    }

    #[test]
    fn minifies_embedded_css() {
        let out = HtmlMinifier::default()
            .minify("<style>a {  color:  red;  }</style>")
            .unwrap();
        assert!(out.len() < "<style>a {  color:  red;  }</style>".len());
    }
}
