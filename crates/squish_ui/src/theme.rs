//! Spacing constants and widget styles.

use iced::widget::container;
use iced::{Border, Theme};

/// Layout spacing steps, in logical pixels.
pub mod spacing {
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
}

/// Style for the read-only output pane.
pub fn output_pane(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
