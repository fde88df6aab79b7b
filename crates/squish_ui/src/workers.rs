//! Background tasks for minification and clipboard access.
//!
//! Both run on blocking tasks off the UI thread and report back as plain
//! `Result<_, String>` message payloads.

use squish_core::config::Settings;
use squish_core::minify::{self, MinifyError};
use squish_core::stats;

use crate::model::{MinifyOutcome, MinifyRequest};

/// Run the dispatcher on a blocking task and compute the size report next
/// to the result, so the output/report pair arrives atomically.
pub async fn run_minify(request: MinifyRequest, settings: Settings) -> Result<MinifyOutcome, String> {
    let handle = tokio::task::spawn_blocking(move || {
        let minified = minify::minify(request.language, &request.source, &settings)?;
        let report = stats::compute_stats(&request.source, &minified);
        Ok::<_, MinifyError>(MinifyOutcome { minified, report })
    });

    match handle.await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(format!("minify task failed: {e}")),
    }
}

/// Write text to the system clipboard.
pub async fn copy_to_clipboard(text: String) -> Result<(), String> {
    let handle = tokio::task::spawn_blocking(move || {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text).map_err(|e| e.to_string())
    });

    match handle.await {
        Ok(result) => result,
        Err(e) => Err(format!("clipboard task failed: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squish_core::minify::Language;

    #[tokio::test]
    async fn run_minify_produces_outcome_with_report() {
        let request = MinifyRequest {
            language: Language::Css,
            source: "a { color:  red; }".to_string(),
        };
        let outcome = run_minify(request, Settings::default()).await.unwrap();
        assert!(outcome.minified.len() < "a { color:  red; }".len());
        assert!(outcome.report.is_some());
    }

    #[tokio::test]
    async fn run_minify_surfaces_errors_as_strings() {
        let request = MinifyRequest {
            language: Language::Javascript,
            source: "function {".to_string(),
        };
        let err = run_minify(request, Settings::default()).await.unwrap_err();
        assert!(!err.is_empty());
    }
}
