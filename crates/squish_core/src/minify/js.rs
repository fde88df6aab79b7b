//! JavaScript minification via the oxc toolchain.
//!
//! Pipeline: parse → compress + mangle → codegen with whitespace elision.
//! Parse errors abort the pipeline and carry the collected diagnostics.

use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions};
use oxc::minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use super::MinifyError;
use crate::config::JavascriptSettings;

/// JavaScript minifier backed by oxc.
#[derive(Debug, Clone, Copy)]
pub struct JsMinifier {
    /// Mangle identifiers in the top-level scope as well as inner scopes.
    pub mangle_top_level: bool,
}

impl JsMinifier {
    pub fn from_settings(settings: &JavascriptSettings) -> Self {
        Self {
            mangle_top_level: settings.mangle_top_level,
        }
    }
}

impl Default for JsMinifier {
    fn default() -> Self {
        Self {
            mangle_top_level: true,
        }
    }
}

impl super::Minifier for JsMinifier {
    fn minify(&self, source: &str) -> Result<String, MinifyError> {
        let allocator = Allocator::default();

        // cjs: script semantics plus require/exports, the closest match for
        // arbitrary pasted snippets.
        let parsed = Parser::new(&allocator, source, SourceType::cjs()).parse();

        if !parsed.errors.is_empty() {
            let message = parsed
                .errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            return Err(MinifyError::JsParse(message));
        }

        let mut program = parsed.program;

        let options = MinifierOptions {
            mangle: Some(MangleOptions {
                top_level: self.mangle_top_level,
                ..MangleOptions::default()
            }),
            compress: Some(CompressOptions::default()),
        };
        let minified = Minifier::new(options).minify(&allocator, &mut program);

        // The minify preset elides whitespace and drops comments.
        let output = Codegen::new()
            .with_options(CodegenOptions::minify())
            .with_scoping(minified.scoping)
            .build(&program);

        Ok(output.code)
    }
}
