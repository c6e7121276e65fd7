use ratatui::style::{Color, Modifier, Style};

use super::app::InputMode;

pub(crate) const HEADER_BG: Color = Color::Rgb(30, 30, 46);
pub(crate) const COMMAND_BG: Color = Color::Rgb(24, 24, 37);
const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);

const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
/// Spending amounts and the total card.
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
/// The shown month and the top-category card.
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
const GREEN: Color = Color::Rgb(166, 227, 161);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn expense_style() -> Style {
    Style::default().fg(RED)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

/// The mode badge at the left of the status bar.
pub(crate) fn mode_style(mode: InputMode) -> Style {
    let bg = match mode {
        InputMode::Normal => ACCENT,
        InputMode::Form => YELLOW,
        InputMode::Command => GREEN,
    };
    Style::default()
        .fg(HEADER_BG)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_badges_are_distinct() {
        let normal = mode_style(InputMode::Normal);
        let form = mode_style(InputMode::Form);
        let command = mode_style(InputMode::Command);
        assert_ne!(normal.bg, form.bg);
        assert_ne!(form.bg, command.bg);
        assert_ne!(normal.bg, command.bg);
        assert_eq!(normal.fg, Some(HEADER_BG));
    }
}
