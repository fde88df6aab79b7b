//! Main window view.
//!
//! Single-window layout: language picker and minify trigger up top, input
//! editor, read-only output pane, and a footer with the copy button and
//! the stats line.

use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_editor};
use iced::{Alignment, Element, Fill, Font};

use squish_core::minify::Language;

use crate::app::{App, Message};
use crate::theme::{self, spacing};

/// Build the main window view.
pub fn view(app: &App) -> Element<'_, Message> {
    let content = column![
        header_row(app),
        input_pane(app),
        output_pane(app),
        footer_row(app),
    ]
    .spacing(spacing::MD)
    .padding(spacing::LG);

    container(content).width(Fill).height(Fill).into()
}

/// Header row with the language picker and the minify trigger.
fn header_row(app: &App) -> Element<'_, Message> {
    let picker = pick_list(
        Language::ALL,
        Some(app.model.language),
        Message::LanguageSelected,
    );

    let minify_label = if app.model.busy { "Minifying..." } else { "Minify" };
    let mut minify_button = button(text(minify_label));
    // Disabling the trigger while busy is what prevents re-entrancy.
    if app.model.can_minify() {
        minify_button = minify_button.on_press(Message::MinifyRequested);
    }

    row![picker, minify_button]
        .spacing(spacing::MD)
        .align_y(Alignment::Center)
        .into()
}

/// Multi-line input editor.
fn input_pane(app: &App) -> Element<'_, Message> {
    text_editor(&app.input)
        .placeholder("Paste your code here...")
        .on_action(Message::InputEdited)
        .font(Font::MONOSPACE)
        .height(Fill)
        .into()
}

/// Read-only output pane.
fn output_pane(app: &App) -> Element<'_, Message> {
    let body = scrollable(text(&app.model.output).font(Font::MONOSPACE).size(14))
        .width(Fill)
        .height(Fill);

    container(body)
        .padding(spacing::SM)
        .width(Fill)
        .height(Fill)
        .style(theme::output_pane)
        .into()
}

/// Footer with the copy button and the stats line.
fn footer_row(app: &App) -> Element<'_, Message> {
    let copy_label = if app.model.copy_confirmed { "Copied!" } else { "Copy" };
    let copy_button = button(text(copy_label)).on_press(Message::CopyRequested);

    let stats = text(app.stats_line()).size(14);

    row![copy_button, stats]
        .spacing(spacing::MD)
        .align_y(Alignment::Center)
        .into()
}
