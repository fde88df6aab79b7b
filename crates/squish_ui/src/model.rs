//! Main window state model.
//!
//! Pure state and transitions with no iced types, so the controller
//! behaviour is unit-testable without a live UI. The app wires these
//! transitions to background tasks; the model only decides whether a
//! request should happen and how results are rendered.

use squish_core::minify::Language;
use squish_core::stats::SizeReport;

/// Fixed message shown when the minify trigger fires with no input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please paste some code to minify.";

/// Fixed label shown above minifier errors in the output pane.
pub const ERROR_LABEL: &str = "An error occurred:";

/// A minify request the controller hands to a background task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifyRequest {
    pub language: Language,
    pub source: String,
}

/// Result delivered by the minify task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifyOutcome {
    pub minified: String,
    pub report: Option<SizeReport>,
}

/// Main window state.
#[derive(Debug)]
pub struct MainModel {
    /// Currently selected language.
    pub language: Language,

    /// Output pane text: minified code, an error, or the empty-input hint.
    pub output: String,

    /// Size report for the last successful run.
    pub report: Option<SizeReport>,

    /// True while a minify task is in flight; disables the trigger.
    pub busy: bool,

    /// True while the copy button shows its confirmation label.
    pub copy_confirmed: bool,
}

impl MainModel {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            output: String::new(),
            report: None,
            busy: false,
            copy_confirmed: false,
        }
    }

    /// Handle the minify trigger.
    ///
    /// Empty or whitespace-only input produces no request: the output pane
    /// shows a fixed hint and the stats line is cleared, without the
    /// dispatcher ever being invoked.
    pub fn request_minify(&mut self, source: &str) -> Option<MinifyRequest> {
        if source.trim().is_empty() {
            self.output = EMPTY_INPUT_MESSAGE.to_string();
            self.report = None;
            return None;
        }

        self.busy = true;
        Some(MinifyRequest {
            language: self.language,
            source: source.to_string(),
        })
    }

    /// Handle a minify task completing.
    ///
    /// The output/report pair is replaced atomically on both arms, so a
    /// stale success can never survive a later error. The busy flag is
    /// cleared here on every exit path.
    pub fn finish_minify(&mut self, result: Result<MinifyOutcome, String>) {
        self.busy = false;

        match result {
            Ok(outcome) => {
                self.output = outcome.minified;
                self.report = outcome.report;
            }
            Err(message) => {
                self.output = format!("{ERROR_LABEL}\n\n{message}");
                self.report = None;
            }
        }
    }

    /// Handle the copy trigger. Empty output produces no clipboard request.
    pub fn request_copy(&self) -> Option<String> {
        if self.output.is_empty() {
            return None;
        }
        Some(self.output.clone())
    }

    /// Whether the minify trigger is enabled.
    pub fn can_minify(&self) -> bool {
        !self.busy
    }

    /// Stats line under the output pane; empty when there is no report.
    pub fn stats_line(&self, decimals: usize) -> String {
        match &self.report {
            Some(report) => report.summary(decimals),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(minified: &str, original: &str) -> MinifyOutcome {
        MinifyOutcome {
            minified: minified.to_string(),
            report: squish_core::stats::compute_stats(original, minified),
        }
    }

    #[test]
    fn empty_input_never_dispatches() {
        let mut model = MainModel::new(Language::Javascript);
        assert_eq!(model.request_minify(""), None);
        assert_eq!(model.output, EMPTY_INPUT_MESSAGE);
        assert_eq!(model.report, None);
        assert!(!model.busy);
    }

    #[test]
    fn whitespace_input_never_dispatches() {
        let mut model = MainModel::new(Language::Css);
        assert_eq!(model.request_minify("   \n\t  "), None);
        assert_eq!(model.output, EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn empty_input_clears_previous_report() {
        let mut model = MainModel::new(Language::Css);
        let request = model.request_minify("a { color: red; }").unwrap();
        model.finish_minify(Ok(outcome("a{color:red}", &request.source)));
        assert!(model.report.is_some());

        model.request_minify("");
        assert_eq!(model.report, None);
        assert_eq!(model.output, EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn request_carries_language_and_source() {
        let mut model = MainModel::new(Language::Html);
        let request = model.request_minify("<p>hi</p>").unwrap();
        assert_eq!(request.language, Language::Html);
        assert_eq!(request.source, "<p>hi</p>");
        assert!(model.busy);
        assert!(!model.can_minify());
    }

    #[test]
    fn success_renders_output_and_report() {
        let mut model = MainModel::new(Language::Css);
        model.request_minify("a { color: red; }").unwrap();
        model.finish_minify(Ok(outcome("a{color:red}", "a { color: red; }")));

        assert!(!model.busy);
        assert_eq!(model.output, "a{color:red}");
        let report = model.report.unwrap();
        assert!(report.reduction() > 0);
        assert!(!model.stats_line(2).is_empty());
    }

    #[test]
    fn error_replaces_stale_output_and_clears_report() {
        let mut model = MainModel::new(Language::Javascript);
        model.request_minify("const a = 1;").unwrap();
        model.finish_minify(Ok(outcome("const a=1;", "const a = 1;")));

        model.request_minify("function {").unwrap();
        model.finish_minify(Err("unexpected token".to_string()));

        assert!(!model.busy);
        assert!(model.output.starts_with(ERROR_LABEL));
        assert!(model.output.contains("unexpected token"));
        assert!(!model.output.contains("const a=1;"));
        assert_eq!(model.report, None);
        assert_eq!(model.stats_line(2), "");
    }

    #[test]
    fn copy_with_empty_output_is_a_no_op() {
        let model = MainModel::new(Language::Javascript);
        assert_eq!(model.request_copy(), None);
    }

    #[test]
    fn copy_returns_current_output() {
        let mut model = MainModel::new(Language::Css);
        model.request_minify("a { }").unwrap();
        model.finish_minify(Ok(outcome("a{}", "a { }")));
        assert_eq!(model.request_copy(), Some("a{}".to_string()));
    }
}
