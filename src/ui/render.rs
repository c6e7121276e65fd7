use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode};
use super::commands;
use super::panels;
use super::theme;

/// Rows the form panel needs: four fields, a gap, preview, hint, borders.
const FORM_HEIGHT: u16 = 9;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header + month selector
            Constraint::Length(4), // Summary cards
            Constraint::Min(8),    // Entries | form + breakdown
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    panels::header::render(f, chunks[0], app);
    panels::cards::render(f, chunks[1], app);
    render_body(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);
    render_command_bar(f, chunks[4], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_body(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    panels::entries::render(f, columns[0], app);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)])
        .split(columns[1]);

    panels::form::render(f, side[0], app);
    panels::breakdown::render(f, side[1], app);
}

/// Table rows that fit on screen for a terminal of `height` rows.
pub(crate) fn table_rows_for(height: u16) -> usize {
    // header(1) + cards(4) + status(1) + command(1) + table borders(2) + table header(1)
    height.saturating_sub(10).max(1) as usize
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = theme::mode_style(app.input_mode);

    let info = format!(
        " {} | {} of {} expenses",
        app.filter_month,
        app.summary.count(),
        app.total_entries
    );

    let right = match app.input_mode {
        InputMode::Normal => " a add | D delete | H/L month | ? help ",
        InputMode::Form => " Enter add | Tab field | Esc done ",
        InputMode::Command => " Enter run | Esc cancel ",
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Normal | InputMode::Form => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, a to add, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let mut help_text = vec![
        Line::from(Span::styled(
            " SpendTUI Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Browsing"),
        row("  j/k or Up/Down   Move cursor           g/G        Top/Bottom"),
        row("  H/L              Older/Newer month     Ctrl-d/u   Page Down/Up"),
        row("  D or x           Delete expense        Ctrl-q     Quit"),
        Line::from(""),
        section(" Entry form (a, i or Tab to open)"),
        row("  Tab/Shift-Tab    Next/Prev field       Enter      Add expense"),
        row("  Up/Down          Step date/category    Left/Right Cycle category"),
        row("  PgUp/PgDn        Date by month         Esc        Back to the table"),
        Line::from(""),
        section(" Commands"),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<12} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 76.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
