//! CSS minification via lightningcss.
//!
//! Parse, minify, and print each have their own error path; all three are
//! surfaced rather than treated as infallible.

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

use super::{Minifier, MinifyError};

/// CSS minifier backed by lightningcss.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssMinifier;

impl Minifier for CssMinifier {
    fn minify(&self, source: &str) -> Result<String, MinifyError> {
        let mut sheet = StyleSheet::parse(source, ParserOptions::default())
            .map_err(|e| MinifyError::CssParse(e.to_string()))?;

        sheet
            .minify(MinifyOptions::default())
            .map_err(|e| MinifyError::CssMinify(e.to_string()))?;

        let result = sheet
            .to_css(PrinterOptions {
                minify: true,
                ..PrinterOptions::default()
            })
            .map_err(|e| MinifyError::CssPrint(e.to_string()))?;

        Ok(result.code)
    }
}
